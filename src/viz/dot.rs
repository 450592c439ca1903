//! Graphviz DOT rendering of a machine's transition table.

use crate::core::{EventId, StateId};
use crate::engine::StateMachine;
use crate::snapshot::Snapshot;
use crate::viz::error::VizError;
use crate::viz::options::DotOptions;
use std::fmt;
use std::path::Path;

type LabelFn<T> = Box<dyn Fn(T) -> String + Send + Sync>;

const LEGEND: &str = "Blue fill = Current State\\n\
Bold outline = Has Enter/Exit handlers\\n\
* on transition = Has transition handler";

/// Renders snapshots as DOT digraphs.
///
/// Nodes are the current state plus every state with an outgoing
/// transition. The current state is filled, states with lifecycle hooks get
/// a bold outline, and edges are labelled with their event, suffixed with
/// `*` when the transition has an action.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
/// use switchyard::viz::{DotExporter, DotOptions};
///
/// let mut machine: StateMachine = StateMachine::new(0u32).unwrap();
/// machine.add_transition(0u32, 1u32, 3u32).unwrap();
///
/// let exporter = DotExporter::new(DotOptions::default())
///     .with_state_labels(|state| ["Idle", "Busy"][state.index()].to_string());
/// let dot = exporter.render_machine(&machine);
///
/// assert!(dot.contains("State_0 -> State_1 [label=\"event_3\"];"));
/// assert!(dot.contains("label=\"Idle\""));
/// ```
pub struct DotExporter {
    options: DotOptions,
    state_label: Option<LabelFn<StateId>>,
    event_label: Option<LabelFn<EventId>>,
}

impl DotExporter {
    pub fn new(options: DotOptions) -> Self {
        Self {
            options,
            state_label: None,
            event_label: None,
        }
    }

    /// Display names for states; node ids stay `State_<id>`.
    pub fn with_state_labels<F>(mut self, label: F) -> Self
    where
        F: Fn(StateId) -> String + Send + Sync + 'static,
    {
        self.state_label = Some(Box::new(label));
        self
    }

    /// Edge labels for events, replacing `event_<id>`.
    pub fn with_event_labels<F>(mut self, label: F) -> Self
    where
        F: Fn(EventId) -> String + Send + Sync + 'static,
    {
        self.event_label = Some(Box::new(label));
        self
    }

    pub fn options(&self) -> &DotOptions {
        &self.options
    }

    pub fn render(&self, snapshot: &Snapshot) -> String {
        DotGraph {
            exporter: self,
            snapshot,
        }
        .to_string()
    }

    pub fn render_machine<const STATES: usize, const EVENTS: usize>(
        &self,
        machine: &StateMachine<STATES, EVENTS>,
    ) -> String {
        self.render(&machine.snapshot())
    }

    /// Render `snapshot` and write it to `path`, replacing any existing file.
    pub fn save(&self, snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), VizError> {
        let path = path.as_ref();
        std::fs::write(path, self.render(snapshot))?;
        tracing::debug!(path = %path.display(), "wrote DOT graph");
        Ok(())
    }

    fn event_name(&self, event: EventId) -> String {
        match &self.event_label {
            Some(label) => label(event),
            None => format!("event_{event}"),
        }
    }
}

impl Default for DotExporter {
    fn default() -> Self {
        Self::new(DotOptions::default())
    }
}

/// Render `machine` with default options.
pub fn render_graph<const STATES: usize, const EVENTS: usize>(
    machine: &StateMachine<STATES, EVENTS>,
) -> String {
    DotExporter::default().render_machine(machine)
}

/// Render `machine` with default options and write it to `path`.
pub fn save_dot<const STATES: usize, const EVENTS: usize>(
    machine: &StateMachine<STATES, EVENTS>,
    path: impl AsRef<Path>,
) -> Result<(), VizError> {
    DotExporter::default().save(&machine.snapshot(), path)
}

struct DotGraph<'a> {
    exporter: &'a DotExporter,
    snapshot: &'a Snapshot,
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = &self.exporter.options;
        let snapshot = self.snapshot;

        writeln!(f, "digraph {} {{", Id(&options.graph_name))?;
        writeln!(f, "    node [shape={}];", Id(&options.node_shape))?;
        writeln!(f, "    rankdir={};", Id(&options.rankdir))?;
        writeln!(f)?;

        for view in &snapshot.states {
            let current = view.state == snapshot.current_state;
            if !current && !snapshot.has_transitions_from(view.state) {
                continue;
            }

            let mut attrs = Vec::new();
            if current {
                attrs.push(format!("style=filled,fillcolor={}", Id(&options.current_fill)));
            }
            if view.has_lifecycle() {
                attrs.push("penwidth=2".to_string());
            }
            if let Some(label) = &self.exporter.state_label {
                attrs.push(format!("label=\"{}\"", Escaped(&label(view.state))));
            }
            writeln!(f, "    {} [{}];", NodeId(view.state), attrs.join(","))?;
        }

        for transition in &snapshot.transitions {
            writeln!(
                f,
                "    {} -> {} [label=\"{}{}\"];",
                NodeId(transition.from),
                NodeId(transition.to),
                Escaped(&self.exporter.event_name(transition.event)),
                if transition.has_action { "*" } else { "" }
            )?;
        }

        if options.legend {
            writeln!(f)?;
            writeln!(f, "    // Legend")?;
            writeln!(f, "    subgraph cluster_legend {{")?;
            writeln!(f, "        label=\"Legend\";")?;
            writeln!(f, "        node [shape=plaintext];")?;
            writeln!(f, "        legend [label=\"{LEGEND}\"];")?;
            writeln!(f, "    }}")?;
        }

        writeln!(f, "}}")
    }
}

struct NodeId(StateId);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State_{}", self.0)
    }
}

/// Text inside a double-quoted DOT string.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// DOT keywords, matched case-insensitively.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// A DOT identifier, quoted unless it is a plain alphanumeric word.
struct Id<'a>(&'a str);

impl fmt::Display for Id<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = !self.0.is_empty()
            && !self.0.starts_with(|c: char| c.is_ascii_digit())
            && self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(self.0));
        if plain {
            f.write_str(self.0)
        } else {
            write!(f, "\"{}\"", Escaped(self.0))
        }
    }
}
