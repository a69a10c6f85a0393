//! Timed extension: how long has the machine been in its current state?
//!
//! Attach [`Timed`] as the machine's attribute and pick a [`Clock`]. Timeouts
//! are built by a state routine polling `state_elapsed()` and calling
//! `change_state` once a threshold is crossed; there is no scheduler.

mod attr;
mod clock;

pub use attr::{Timed, TimedMachine, Timer};
pub use clock::{Clock, SystemMicros, SystemMillis, Ticks};
