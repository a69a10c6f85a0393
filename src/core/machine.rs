//! The machine value embedded in every host.

use super::attribute::Attribute;
use super::state::State;

/// Current state identity plus one attribute.
///
/// A machine is owned by the host that embeds it and has no lifecycle of its
/// own. There is no `Default`: every machine starts in an explicitly chosen
/// state.
///
/// # Example
///
/// ```rust
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
/// let mut machine: Machine<Phase> = Machine::new(Phase::Boot);
/// assert!(machine.is_state(Phase::Boot));
///
/// machine.change_state(Phase::Run);
/// assert_eq!(machine.state(), Phase::Run);
/// ```
///
/// A machine cannot be built without naming its initial state:
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
/// let machine = Machine::<Phase>::default();
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State, A: Attribute = ()> {
    current: S,
    attr: A,
}

impl<S: State, A: Attribute> Machine<S, A> {
    /// Create a machine in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            attr: A::attach(),
        }
    }

    /// Identity of the current state.
    ///
    /// Fine for diagnostics from anywhere, but control decisions belong in
    /// the state routines themselves.
    pub fn state(&self) -> S {
        self.current
    }

    /// Check whether the machine currently occupies `state`.
    pub fn is_state(&self, state: S) -> bool {
        self.current == state
    }

    /// Switch to `to`.
    ///
    /// The attribute is notified first, then the identity is replaced.
    /// Changing to the current state still counts as a transition.
    pub fn change_state(&mut self, to: S) {
        self.attr.on_change();
        tracing::trace!(from = self.current.name(), to = to.name(), "state change");
        self.current = to;
    }

    /// The attribute attached to this machine.
    pub fn attribute(&self) -> &A {
        &self.attr
    }
}
