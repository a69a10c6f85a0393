//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur when encoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The state type's `Serialize` impl refused to encode
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
