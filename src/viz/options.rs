//! Rendering options for DOT export.

use crate::viz::error::VizError;
use serde::{Deserialize, Serialize};

/// Layout and styling knobs for [`DotExporter`](crate::viz::DotExporter).
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file only needs the keys it changes.
///
/// # Example
///
/// ```rust
/// use switchyard::viz::DotOptions;
///
/// let options = DotOptions::from_json(r#"{ "rankdir": "TB", "legend": false }"#).unwrap();
/// assert_eq!(options.rankdir, "TB");
/// assert_eq!(options.node_shape, "circle");
/// assert!(!options.legend);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Name of the emitted `digraph`
    pub graph_name: String,

    /// Graphviz `rankdir` (`LR`, `TB`, ...)
    pub rankdir: String,

    /// Shape used for every state node
    pub node_shape: String,

    /// Fill color marking the current state
    pub current_fill: String,

    /// Emit the legend cluster
    pub legend: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "state_machine".to_string(),
            rankdir: "LR".to_string(),
            node_shape: "circle".to_string(),
            current_fill: "lightblue".to_string(),
            legend: true,
        }
    }
}

impl DotOptions {
    pub fn from_json(json: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(json)?)
    }
}
