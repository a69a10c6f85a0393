//! Core state machine types.
//!
//! This module contains the pieces every machine is built from:
//! - State identities and their dispatch table via `State` and `StateSet`
//! - The `Machine` value holding the current identity
//! - The single `Attribute` extension slot
//!
//! Nothing here allocates or blocks.

mod attribute;
mod machine;
mod state;

pub use attribute::Attribute;
pub use machine::Machine;
pub use state::{Routine, State, StateSet, UnknownState};
