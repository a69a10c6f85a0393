//! Tickstate: a static finite state machine for tick-driven main loops
//!
//! Tickstate targets cooperative, single-threaded schedulers such as a
//! microcontroller `loop()`. Each state is one method of the host type; the
//! machine stores only the current state's identity and `update()` runs the
//! bound method through a static dispatch table. There is no heap allocation,
//! no trait object, and no central `match` that every state's logic has to be
//! threaded through.
//!
//! # Core Concepts
//!
//! - **State**: a variant of a closed enum, bound to a host method via `StateSet`
//! - **Machine**: the current identity plus one attribute, embedded in the host
//! - **StateMachine**: host trait providing `update`, `change_state`, `is_state`
//! - **Timed**: attribute that tracks ticks spent in the current state
//! - **Entry states**: one-shot states that switch to a target, then run setup
//!
//! # Example
//!
//! ```rust
//! use tickstate::{clock, states, Machine, StateMachine, Timed};
//! use std::cell::Cell;
//!
//! thread_local!(static TICKS: Cell<u32> = const { Cell::new(0) });
//! fn ticks() -> u32 {
//!     TICKS.with(Cell::get)
//! }
//! clock!(TickClock: u32 = ticks);
//!
//! struct Light {
//!     fsm: Machine<Lamp, Timed<TickClock>>,
//! }
//!
//! states! {
//!     enum Lamp for Light {
//!         Red => red,
//!         Green => green,
//!     }
//! }
//!
//! impl Light {
//!     fn red(&mut self) {
//!         if self.state_elapsed() >= 5 {
//!             self.change_state(Lamp::Green);
//!         }
//!     }
//!
//!     fn green(&mut self) {
//!         if self.state_elapsed() >= 3 {
//!             self.change_state(Lamp::Red);
//!         }
//!     }
//! }
//!
//! impl StateMachine for Light {
//!     type State = Lamp;
//!     type Attr = Timed<TickClock>;
//!
//!     fn machine(&self) -> &Machine<Lamp, Timed<TickClock>> {
//!         &self.fsm
//!     }
//!
//!     fn machine_mut(&mut self) -> &mut Machine<Lamp, Timed<TickClock>> {
//!         &mut self.fsm
//!     }
//! }
//!
//! let mut light = Light { fsm: Machine::new(Lamp::Red) };
//! for now in 0..5 {
//!     TICKS.with(|t| t.set(now));
//!     light.update();
//!     assert!(light.is_state(Lamp::Red));
//! }
//!
//! TICKS.with(|t| t.set(5));
//! light.update();
//! assert!(light.is_state(Lamp::Green));
//! assert_eq!(light.state_elapsed(), 0);
//! ```

extern crate self as tickstate;

pub mod core;
pub mod host;
mod macros;
pub mod snapshot;
pub mod timed;

#[doc(hidden)]
pub use serde as __serde;

// Re-export commonly used types
pub use crate::core::{Attribute, Machine, Routine, State, StateSet, UnknownState};
pub use host::{enter, Flag, StateMachine};
pub use snapshot::{Snapshot, SnapshotError};
pub use timed::{Clock, SystemMicros, SystemMillis, Ticks, Timed, TimedMachine, Timer};
