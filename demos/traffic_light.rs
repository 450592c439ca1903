//! Traffic Light State Machine
//!
//! This example drives a cyclic controller with a timer tick and a
//! pedestrian button that is only honoured while the light is green.
//!
//! Key concepts:
//! - Cyclic state transitions on a single event
//! - Guards reading the event payload
//! - Enter and exit hooks for lamp control
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use switchyard::builder::{MachineBuilder, TransitionBuilder};
use switchyard::{event_enum, state_enum, Event, Handler};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

event_enum! {
    enum Input {
        Tick,
        Button,
    }
}

fn lamp(light: Light, on: bool) -> Handler {
    Handler::new(move |_: &Event| {
        let verb = if on { "on " } else { "off" };
        println!("    lamp {verb} {}", light.name());
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut builder = MachineBuilder::<3, 2>::new().initial(Light::Red);
    for (from, to) in [
        (Light::Red, Light::Green),
        (Light::Green, Light::Yellow),
        (Light::Yellow, Light::Red),
    ] {
        builder = builder
            .transition(TransitionBuilder::new().from(from).to(to).on(Input::Tick))
            .expect("tick transition is complete");
    }

    for light in Light::ALL.iter().copied() {
        builder = builder
            .on_enter(light, lamp(light, true))
            .on_exit(light, lamp(light, false));
    }

    // A request frame of [1] means someone is waiting to cross.
    let mut machine = builder
        .transition(
            TransitionBuilder::new()
                .from(Light::Green)
                .to(Light::Yellow)
                .on(Input::Button)
                .when(|e| e.payload() == Some(&[1][..])),
        )
        .expect("button transition is complete")
        .build()
        .expect("all ids fit the table");

    let waiting = [1u8];
    let script = [
        ("tick", Event::new(Input::Tick)),
        ("button (nobody waiting)", Event::with_payload(Input::Button, &[0])),
        ("button (pedestrian)", Event::with_payload(Input::Button, &waiting)),
        ("tick", Event::new(Input::Tick)),
        ("button while red", Event::with_payload(Input::Button, &waiting)),
    ];

    for (label, event) in script {
        println!("{label}:");
        let outcome = machine.dispatch(event);
        let now = Light::from_id(machine.current_state()).map_or("?", |l| l.name());
        println!("  fired: {:<5} now: {now}\n", outcome.fired());
    }

    println!("=== Example Complete ===");
}
