//! End-to-end dispatch scenarios.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use switchyard::builder::{MachineBuilder, TransitionBuilder};
use switchyard::viz::render_graph;
use switchyard::{
    event_enum, state_enum, Dispatch, Event, Guard, Handler, Outcome, StateId, StateMachine,
};

state_enum! {
    enum Mode {
        Init,
        Run,
        Error,
    }
}

event_enum! {
    enum Signal {
        Start,
        Fault,
        Reset,
    }
}

fn reference_machine() -> StateMachine {
    let mut machine: StateMachine = StateMachine::new(Mode::Init).unwrap();
    machine.add_transition(Mode::Init, Mode::Run, Signal::Start).unwrap();
    machine.add_transition(Mode::Run, Mode::Error, Signal::Fault).unwrap();
    machine.add_transition(Mode::Run, Mode::Init, Signal::Reset).unwrap();
    machine.add_transition(Mode::Error, Mode::Run, Signal::Start).unwrap();
    machine
}

fn mode(machine: &StateMachine) -> Mode {
    Mode::from_id(machine.current_state()).unwrap()
}

#[test]
fn init_run_error_run_init_sequence() {
    let mut machine = reference_machine();
    let mut path = vec![mode(&machine)];

    for signal in [Signal::Start, Signal::Fault, Signal::Start, Signal::Reset] {
        assert!(machine.dispatch(Event::new(signal)).fired());
        path.push(mode(&machine));
    }

    assert_eq!(
        path,
        vec![Mode::Init, Mode::Run, Mode::Error, Mode::Run, Mode::Init]
    );
}

#[test]
fn unmatched_events_leave_reference_machine_alone() {
    let mut machine = reference_machine();

    assert!(!machine.dispatch(Event::new(Signal::Fault)).fired());
    assert!(!machine.dispatch(Event::new(Signal::Reset)).fired());
    assert_eq!(mode(&machine), Mode::Init);
}

#[test]
fn has_payload_guard_gates_start() {
    let mut machine: StateMachine = StateMachine::new(Mode::Init).unwrap();
    machine
        .add_transition_with_guard(
            Mode::Init,
            Mode::Run,
            Signal::Start,
            None,
            Some(Guard::has_payload()),
        )
        .unwrap();

    let outcome = machine.dispatch(Event::new(Signal::Start));
    assert!(matches!(outcome, Outcome::GuardRejected { .. }));
    assert_eq!(mode(&machine), Mode::Init);

    let config = b"mode=fast".to_vec();
    machine.dispatch(Event::with_payload(Signal::Start, &config));
    assert_eq!(mode(&machine), Mode::Run);
}

#[test]
fn handlers_see_the_dispatched_payload() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut machine = MachineBuilder::<3, 3>::new()
        .initial(Mode::Init)
        .transition(
            TransitionBuilder::new()
                .from(Mode::Init)
                .to(Mode::Run)
                .on(Signal::Start)
                .then(move |e: &Event| {
                    sink.lock().unwrap().extend_from_slice(e.payload().unwrap_or_default())
                }),
        )
        .unwrap()
        .build()
        .unwrap();

    {
        let frame = vec![1u8, 2, 3];
        machine.dispatch(Event::with_payload(Signal::Start, &frame));
    }

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn reentrant_hook_drives_follow_up_transition() {
    // Entering Error immediately requests a reset back to Init.
    let mut machine = reference_machine();
    machine.add_transition(Mode::Error, Mode::Init, Signal::Reset).unwrap();
    machine
        .assign_on_enter(
            Mode::Error,
            Some(Handler::reentrant(|m: &mut dyn Dispatch, _: &Event| {
                m.dispatch(Event::new(Signal::Reset));
            })),
        )
        .unwrap();

    machine.dispatch(Event::new(Signal::Start));
    machine.dispatch(Event::new(Signal::Fault));

    assert_eq!(mode(&machine), Mode::Init);
}

#[test]
fn outer_transition_lands_after_nested_dispatch_from_exit_hook() {
    let entered = Arc::new(Mutex::new(Vec::new()));
    let nested_once = Arc::new(AtomicBool::new(false));
    let mut machine = reference_machine();

    for state in Mode::ALL.iter().copied() {
        let log = Arc::clone(&entered);
        machine
            .assign_on_enter(
                state,
                Some(Handler::new(move |_: &Event| log.lock().unwrap().push(state))),
            )
            .unwrap();
    }

    let flag = Arc::clone(&nested_once);
    machine
        .assign_on_exit(
            Mode::Run,
            Some(Handler::reentrant(move |m: &mut dyn Dispatch, _: &Event| {
                if !flag.swap(true, Ordering::SeqCst) {
                    m.dispatch(Event::new(Signal::Reset));
                }
            })),
        )
        .unwrap();

    machine.dispatch(Event::new(Signal::Start));
    entered.lock().unwrap().clear();

    // Run -> Error; while exiting Run the hook resets to Init first.
    let outcome = machine.dispatch(Event::new(Signal::Fault));

    assert_eq!(
        outcome,
        Outcome::Transitioned {
            from: Mode::Run.into(),
            to: Mode::Error.into(),
            event: Signal::Fault.into(),
        }
    );
    assert_eq!(*entered.lock().unwrap(), vec![Mode::Init, Mode::Error]);
    assert_eq!(mode(&machine), Mode::Error);
}

#[test]
fn shared_machine_behind_a_mutex() {
    let machine = Arc::new(Mutex::new(reference_machine()));
    let transitions = Arc::new(AtomicUsize::new(0));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let machine = Arc::clone(&machine);
            let transitions = Arc::clone(&transitions);
            thread::spawn(move || {
                for _ in 0..100 {
                    for signal in [Signal::Start, Signal::Reset] {
                        let outcome = machine.lock().unwrap().dispatch(Event::new(signal));
                        if outcome.fired() {
                            transitions.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    // Each fire toggles Init and Run, and the last call overall is a Reset.
    let machine = machine.lock().unwrap();
    assert_eq!(transitions.load(Ordering::SeqCst) % 2, 0);
    assert_eq!(machine.current_state(), StateId::from(Mode::Init));
}

#[test]
fn graph_reflects_live_machine() {
    let mut machine = reference_machine();
    machine.dispatch(Event::new(Signal::Start));

    let dot = render_graph(&machine);

    assert!(dot.contains("State_1 [style=filled,fillcolor=lightblue];"));
    assert!(dot.contains("State_0 -> State_1 [label=\"event_0\"];"));
    assert!(dot.contains("State_1 -> State_2 [label=\"event_1\"];"));
    assert!(dot.contains("State_1 -> State_0 [label=\"event_2\"];"));
    assert!(dot.contains("State_2 -> State_1 [label=\"event_0\"];"));
    assert_eq!(mode(&machine), Mode::Run);
}
