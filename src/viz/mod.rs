//! Graph export of a machine's transition table.
//!
//! The exporter is a pure read over a [`Snapshot`](crate::snapshot::Snapshot);
//! rendering never touches the machine it came from.

mod dot;
mod error;
mod options;

pub use dot::{render_graph, save_dot, DotExporter};
pub use error::VizError;
pub use options::DotOptions;
