//! DOT Export
//!
//! This example renders a machine as a Graphviz graph, first with the
//! default `State_<id>` / `event_<id>` labels and then with enum names.
//!
//! Key concepts:
//! - `render_graph` for a quick look
//! - `DotExporter` with label functions and JSON-loaded options
//! - Snapshots as the input to rendering and table queries
//!
//! Run with: cargo run --example export_dot [output.dot]
//! Then:     dot -Tpng output.dot -o machine.png

use switchyard::viz::{render_graph, DotExporter, DotOptions};
use switchyard::{event_enum, state_enum, Event, Guard, Handler, StateMachine};
use tracing_subscriber::EnvFilter;

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== DOT Export Example ===\n");

    let mut machine: StateMachine = StateMachine::new(Mode::Init)?;
    machine.add_transition_with_guard(
        Mode::Init,
        Mode::Run,
        Signal::Start,
        Some(Handler::new(|_: &Event| println!("starting"))),
        Some(Guard::has_payload()),
    )?;
    machine.add_transition(Mode::Run, Mode::Error, Signal::Fault)?;
    machine.add_transition(Mode::Error, Mode::Init, Signal::Reset)?;
    machine.assign_on_enter(Mode::Error, Some(Handler::new(|_: &Event| println!("fault latched"))))?;

    machine.dispatch(Event::with_payload(Signal::Start, b"cfg"));

    println!("Default rendering:\n");
    println!("{}", render_graph(&machine));

    let opts = DotOptions::from_json(r#"{ "graph_name": "controller", "rankdir": "TB", "legend": false }"#)?;
    let exporter = DotExporter::new(opts)
        .with_state_labels(|s| Mode::from_id(s).map_or_else(|| s.to_string(), |m| m.name().to_string()))
        .with_event_labels(|e| Signal::from_id(e).map_or_else(|| e.to_string(), |s| s.name().to_string()));

    let snapshot = machine.snapshot();
    println!("Outgoing transitions:");
    for mode in Mode::ALL.iter().copied() {
        for t in snapshot.transitions_from(mode.into()) {
            let target = Mode::from_id(t.to).map_or("?", |m| m.name());
            let guard = if t.has_guard { " (guarded)" } else { "" };
            println!("  {} -> {target}{guard}", mode.name());
        }
    }
    println!();

    let options = exporter.options();
    println!("Rendering graph {:?} with rankdir={}\n", options.graph_name, options.rankdir);

    match std::env::args().nth(1) {
        Some(path) => {
            exporter.save(&snapshot, &path)?;
            println!("Wrote {path}");
        }
        None => {
            println!("Named rendering:\n");
            println!("{}", exporter.render(&snapshot));
        }
    }

    println!("=== Example Complete ===");
    Ok(())
}
