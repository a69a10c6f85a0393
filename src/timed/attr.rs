//! Time-in-state tracking attribute.

use super::clock::{Clock, Ticks};
use crate::core::{Attribute, Machine, State};
use std::fmt;
use std::marker::PhantomData;

/// An attribute that can report how long the machine has been in its
/// current state.
pub trait Timer: Attribute {
    type Ticks: Ticks;

    /// Ticks since the last transition.
    fn elapsed(&self) -> Self::Ticks;
}

/// Records the clock reading of the most recent transition.
///
/// The baseline is taken when the machine is constructed and refreshed at
/// the start of every `change_state`, so the elapsed time right after a
/// transition is zero (or as close as the clock allows).
pub struct Timed<C: Clock> {
    changed_at: C::Ticks,
    _clock: PhantomData<fn() -> C>,
}

impl<C: Clock> Timed<C> {
    /// Clock reading taken at the last transition.
    pub fn changed_at(&self) -> C::Ticks {
        self.changed_at
    }
}

impl<C: Clock> Attribute for Timed<C> {
    fn attach() -> Self {
        Self {
            changed_at: C::now(),
            _clock: PhantomData,
        }
    }

    fn on_change(&mut self) {
        self.changed_at = C::now();
    }

    fn elapsed_ticks(&self) -> Option<u64> {
        Some(self.elapsed().to_u64())
    }
}

impl<C: Clock> Timer for Timed<C> {
    type Ticks = C::Ticks;

    fn elapsed(&self) -> C::Ticks {
        C::now().elapsed_since(self.changed_at)
    }
}

impl<C: Clock> Clone for Timed<C> {
    fn clone(&self) -> Self {
        Self {
            changed_at: self.changed_at,
            _clock: PhantomData,
        }
    }
}

impl<C: Clock> fmt::Debug for Timed<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timed")
            .field("changed_at", &self.changed_at)
            .finish()
    }
}

/// A machine that tracks time spent in its current state.
pub type TimedMachine<S, C> = Machine<S, Timed<C>>;

impl<S: State, A: Timer> Machine<S, A> {
    /// Ticks since the last transition (or since construction).
    ///
    /// Untimed machines have no elapsed time to report:
    ///
    /// ```compile_fail
    /// use tickstate::{Machine, State};
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    /// enum Phase { Boot, Run }
    ///
    /// impl State for Phase {
    ///     const ALL: &'static [Self] = &[Self::Boot, Self::Run];
    ///     fn name(&self) -> &'static str {
    ///         match self {
    ///             Self::Boot => "Boot",
    ///             Self::Run => "Run",
    ///         }
    ///     }
    /// }
    ///
    /// let machine: Machine<Phase> = Machine::new(Phase::Boot);
    /// let _ = machine.state_elapsed();
    /// ```
    pub fn state_elapsed(&self) -> A::Ticks {
        self.attribute().elapsed()
    }
}
