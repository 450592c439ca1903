//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded snapshot describes an impossible table
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
