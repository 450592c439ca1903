//! Property-based tests for dispatch.
//!
//! These tests use proptest to check that dispatch behaves like a plain
//! table lookup across many randomly generated tables and event streams.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use switchyard::{Event, Guard, Handler, Outcome, StateId, StateMachine};

const STATES: usize = 6;
const EVENTS: usize = 5;

type Machine = StateMachine<STATES, EVENTS>;
type Log = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Debug)]
struct Rule {
    from: u32,
    to: u32,
    event: u32,
    guarded: bool,
}

#[derive(Clone, Debug)]
struct Input {
    event: u32,
    with_payload: bool,
}

prop_compose! {
    fn arbitrary_rule()(
        from in 0..STATES as u32,
        to in 0..STATES as u32,
        event in 0..EVENTS as u32,
        guarded in any::<bool>(),
    ) -> Rule {
        Rule { from, to, event, guarded }
    }
}

prop_compose! {
    // Includes ids past the table so out-of-range dispatch is exercised.
    fn arbitrary_input()(event in 0..(EVENTS as u32 + 2), with_payload in any::<bool>()) -> Input {
        Input { event, with_payload }
    }
}

fn recorder(log: &Log, label: String) -> Handler {
    let log = Arc::clone(log);
    Handler::new(move |e: &Event| log.lock().unwrap().push(format!("{label}@{}", e.id())))
}

fn build(initial: u32, rules: &[Rule], log: &Log) -> Machine {
    let mut machine = Machine::new(initial).unwrap();
    for (i, rule) in rules.iter().enumerate() {
        let guard = rule.guarded.then(Guard::has_payload);
        let action = Some(recorder(log, format!("action{i}")));
        machine
            .add_transition_with_guard(rule.from, rule.to, rule.event, action, guard)
            .unwrap();
    }
    for state in 0..STATES as u32 {
        machine
            .assign_on_enter(state, Some(recorder(log, format!("enter{state}"))))
            .unwrap();
        machine
            .assign_on_exit(state, Some(recorder(log, format!("exit{state}"))))
            .unwrap();
    }
    machine
}

fn feed(machine: &mut Machine, input: &Input) -> Outcome {
    let payload = [0xA5u8];
    if input.with_payload {
        machine.dispatch(Event::with_payload(input.event, &payload))
    } else {
        machine.dispatch(Event::new(input.event))
    }
}

fn log_len(log: &Log) -> usize {
    log.lock().unwrap().len()
}

proptest! {
    #[test]
    fn dispatch_is_deterministic(
        initial in 0..STATES as u32,
        rules in prop::collection::vec(arbitrary_rule(), 0..20),
        inputs in prop::collection::vec(arbitrary_input(), 0..40),
    ) {
        let log_a: Log = Arc::default();
        let log_b: Log = Arc::default();
        let mut a = build(initial, &rules, &log_a);
        let mut b = build(initial, &rules, &log_b);

        for input in &inputs {
            prop_assert_eq!(feed(&mut a, input), feed(&mut b, input));
        }

        prop_assert_eq!(a.current_state(), b.current_state());
        prop_assert_eq!(log_a.lock().unwrap().clone(), log_b.lock().unwrap().clone());
    }

    #[test]
    fn dispatch_matches_table_model(
        initial in 0..STATES as u32,
        rules in prop::collection::vec(arbitrary_rule(), 0..20),
        inputs in prop::collection::vec(arbitrary_input(), 0..40),
    ) {
        let log: Log = Arc::default();
        let mut machine = build(initial, &rules, &log);

        // Last registration wins per cell.
        let model: HashMap<(u32, u32), (u32, bool)> = rules
            .iter()
            .map(|r| ((r.from, r.event), (r.to, r.guarded)))
            .collect();

        let mut state = initial;
        for input in &inputs {
            let expected = match model.get(&(state, input.event)) {
                Some(&(to, guarded)) if !guarded || input.with_payload => to,
                _ => state,
            };
            feed(&mut machine, input);
            state = expected;
            prop_assert_eq!(machine.current_state(), StateId::new(state));
        }
    }

    #[test]
    fn non_firing_dispatch_is_idempotent(
        initial in 0..STATES as u32,
        rules in prop::collection::vec(arbitrary_rule(), 0..20),
        inputs in prop::collection::vec(arbitrary_input(), 0..40),
    ) {
        let log: Log = Arc::default();
        let mut machine = build(initial, &rules, &log);

        for input in &inputs {
            let before_state = machine.current_state();
            let before_calls = log_len(&log);

            match feed(&mut machine, input) {
                Outcome::Unhandled { state, .. } | Outcome::GuardRejected { state, .. } => {
                    prop_assert_eq!(state, before_state);
                    prop_assert_eq!(machine.current_state(), before_state);
                    prop_assert_eq!(log_len(&log), before_calls);
                }
                Outcome::Transitioned { from, to, .. } => {
                    prop_assert_eq!(from, before_state);
                    prop_assert_eq!(machine.current_state(), to);
                    // Every state has both hooks and every rule has an action.
                    prop_assert_eq!(log_len(&log), before_calls + 3);
                }
            }
        }
    }

    #[test]
    fn fired_transition_orders_exit_action_enter(
        rules in prop::collection::vec(arbitrary_rule(), 1..20),
        inputs in prop::collection::vec(arbitrary_input(), 1..40),
    ) {
        let log: Log = Arc::default();
        let mut machine = build(rules[0].from, &rules, &log);

        for input in &inputs {
            let before = log_len(&log);
            if let Outcome::Transitioned { from, to, event } = feed(&mut machine, input) {
                let entries = log.lock().unwrap()[before..].to_vec();
                prop_assert_eq!(entries.len(), 3);
                prop_assert_eq!(&entries[0], &format!("exit{from}@{event}"));
                prop_assert!(entries[1].starts_with("action"));
                prop_assert_eq!(&entries[2], &format!("enter{to}@{event}"));
            }
        }
    }

    #[test]
    fn current_state_stays_in_bounds(
        initial in 0..STATES as u32,
        rules in prop::collection::vec(arbitrary_rule(), 0..30),
        inputs in prop::collection::vec(arbitrary_input(), 0..60),
    ) {
        let log: Log = Arc::default();
        let mut machine = build(initial, &rules, &log);

        for input in &inputs {
            feed(&mut machine, input);
            prop_assert!(machine.current_state().index() < STATES);
        }
    }

    #[test]
    fn out_of_range_registration_never_mutates(
        from in 0..(STATES as u32 * 2),
        to in 0..(STATES as u32 * 2),
        event in 0..(EVENTS as u32 * 2),
    ) {
        let mut machine = Machine::new(0u32).unwrap();
        let in_range = (from as usize) < STATES && (to as usize) < STATES && (event as usize) < EVENTS;

        let result = machine.add_transition(from, to, event);

        prop_assert_eq!(result.is_ok(), in_range);
        prop_assert_eq!(machine.transitions().count(), usize::from(in_range));
        if let Err(err) = result {
            let expected = usize::from(from as usize >= STATES)
                + usize::from(to as usize >= STATES)
                + usize::from(event as usize >= EVENTS);
            prop_assert_eq!(err.violations().len(), expected);
        }
    }
}
