//! Visualizer error types.

use thiserror::Error;

/// Errors from exporting a machine as a graph.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid DOT options: {0}")]
    Options(#[from] serde_json::Error),
}
