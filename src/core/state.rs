//! State identities and their binding to update routines.
//!
//! A state set is a closed, fieldless enum. Each variant is the identity of
//! one state, and [`StateSet::routine`] maps it to the host method that runs
//! once per tick while the machine occupies that state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Update routine of a host type, invoked once per tick.
pub type Routine<H> = fn(&mut H);

/// A name that matches no declared state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown state '{name}'")]
pub struct UnknownState {
    pub name: String,
}

/// Identity of one state within a closed state set.
///
/// Identities are plain values: two different variants never compare equal
/// and a variant's identity never changes.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: identities are stored and compared by value
/// - `Debug`: identities are printable for diagnostics
/// - `Serialize` + `Deserialize`: identities can be captured in snapshots
///
/// # Example
///
/// ```rust
/// use tickstate::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     const ALL: &'static [Self] = &[Self::Open, Self::Closed];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::from_name("Closed"), Ok(Door::Closed));
/// assert!(Door::from_name("Ajar").is_err());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every identity of the set, in declaration order.
    const ALL: &'static [Self];

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Look up an identity by its name.
    fn from_name(name: &str) -> Result<Self, UnknownState> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.name() == name)
            .ok_or_else(|| UnknownState {
                name: name.to_string(),
            })
    }
}

/// Binds each identity of a state set to an update routine of its host.
///
/// The `match` inside [`routine`](StateSet::routine) is the dispatch table.
/// Because the host's `change_state` only accepts its own `State` type, a
/// transition into a foreign state set does not compile.
pub trait StateSet: State {
    /// The concrete state machine whose methods implement the states.
    type Host;

    /// The routine run while the machine is in this state.
    fn routine(self) -> Routine<Self::Host>;
}
