//! Point-in-time capture of a machine for diagnostics.
//!
//! A snapshot records the current state identity and, for timed machines,
//! the ticks spent in it. It is a read-only view: a machine cannot be
//! rebuilt from one.

use crate::core::{Attribute, Machine, State};
use serde::Serialize;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a machine.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// Current state of the machine
    pub state: S,

    /// Ticks spent in `state`, if the machine keeps time
    pub elapsed: Option<u64>,
}

impl<S: State> Snapshot<S> {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<S: State, A: Attribute> Machine<S, A> {
    /// Capture the current state and elapsed ticks.
    pub fn snapshot(&self) -> Snapshot<S> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            state: self.state(),
            elapsed: self.attribute().elapsed_ticks(),
        };
        tracing::debug!(
            state = snapshot.state.name(),
            elapsed = ?snapshot.elapsed,
            "captured machine snapshot"
        );
        snapshot
    }
}
