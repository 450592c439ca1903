//! Re-entrant Dispatch
//!
//! This example shows a handler feeding a follow-up event back into the
//! machine it runs on. A connection that enters `Failed` schedules its own
//! retry without any outer loop.
//!
//! Key concepts:
//! - `Handler::reentrant` receives the machine as `&mut dyn Dispatch`
//! - Nested dispatches run to completion before the outer one resumes
//! - A retry budget bounds the recursion
//!
//! Run with: RUST_LOG=debug cargo run --example reentrant_dispatch

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use switchyard::{event_enum, state_enum, Dispatch, Event, Handler, StateMachine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Link {
        Idle,
        Connecting,
        Up,
        Failed,
    }
}

event_enum! {
    enum LinkEvent {
        Dial,
        Ack,
        Timeout,
        Retry,
    }
}

const MAX_RETRIES: u32 = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Re-entrant Dispatch Example ===\n");

    let mut machine: StateMachine<4, 4> =
        StateMachine::new(Link::Idle).expect("initial state fits");

    let table = [
        (Link::Idle, Link::Connecting, LinkEvent::Dial),
        (Link::Connecting, Link::Up, LinkEvent::Ack),
        (Link::Connecting, Link::Failed, LinkEvent::Timeout),
        (Link::Failed, Link::Connecting, LinkEvent::Retry),
    ];
    for (from, to, event) in table {
        machine
            .add_transition(from, to, event)
            .expect("ids fit the table");
    }

    let attempts = Arc::new(AtomicU32::new(0));
    let budget = Arc::clone(&attempts);
    machine
        .assign_on_enter(
            Link::Failed,
            Some(Handler::reentrant(move |m: &mut dyn Dispatch, _: &Event| {
                let attempt = budget.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt <= MAX_RETRIES {
                    println!("  failed, retry {attempt}/{MAX_RETRIES}");
                    m.dispatch(Event::new(LinkEvent::Retry));
                } else {
                    println!("  failed, giving up");
                }
            })),
        )
        .expect("state fits");

    machine.dispatch(Event::new(LinkEvent::Dial));

    // Every retry lands back in Connecting, where the peer keeps timing out.
    for _ in 0..=MAX_RETRIES {
        machine.dispatch(Event::new(LinkEvent::Timeout));
    }

    let state = Link::from_id(machine.current_state()).map_or("?", |l| l.name());
    println!("\nfinal state: {state}");
    println!("attempts:    {}", attempts.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
}
