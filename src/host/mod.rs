//! Host-side state machine interface.
//!
//! A host is the concrete type whose methods implement the states. It embeds
//! a [`Machine`] and implements [`StateMachine`] to expose it; in exchange it
//! gets `update()` and the transition operations as provided methods. The
//! machine calls back into the host through plain function pointers, so
//! there is no trait object and no allocation on the tick path.
//!
//! # Host responsibilities
//!
//! 1. Embed a `Machine` built with an explicit initial state.
//! 2. Declare at least one state (usually with [`states!`](crate::states)).
//! 3. Call `update()` once per scheduling tick.
//!
//! Call `change_state` only from inside a state routine. Other execution
//! contexts should raise a [`Flag`] that the routine polls.

mod flag;

pub use flag::Flag;

use crate::core::{Attribute, Machine, Routine, StateSet};
use crate::timed::Timer;

/// A type that runs a static state machine over its own methods.
///
/// # Example
///
/// ```rust
/// use tickstate::{states, Machine, StateMachine};
///
/// struct Blinker {
///     fsm: Machine<Led>,
///     toggles: u32,
/// }
///
/// states! {
///     enum Led for Blinker {
///         On => on,
///         Off => off,
///     }
/// }
///
/// impl Blinker {
///     fn on(&mut self) {
///         self.toggles += 1;
///         self.change_state(Led::Off);
///     }
///
///     fn off(&mut self) {
///         self.change_state(Led::On);
///     }
/// }
///
/// impl StateMachine for Blinker {
///     type State = Led;
///     type Attr = ();
///
///     fn machine(&self) -> &Machine<Led> {
///         &self.fsm
///     }
///
///     fn machine_mut(&mut self) -> &mut Machine<Led> {
///         &mut self.fsm
///     }
/// }
///
/// let mut blinker = Blinker { fsm: Machine::new(Led::On), toggles: 0 };
/// blinker.update();
/// assert!(blinker.is_state(Led::Off));
/// blinker.update();
/// blinker.update();
/// assert_eq!(blinker.toggles, 2);
/// ```
///
/// A host only accepts identities from its own state set:
///
/// ```compile_fail
/// use tickstate::{states, Machine, StateMachine};
///
/// struct Blinker {
///     fsm: Machine<Led>,
/// }
///
/// struct Other;
///
/// states! {
///     enum Led for Blinker {
///         On => on,
///     }
/// }
///
/// states! {
///     enum OtherSet for Other {
///         X => x,
///     }
/// }
///
/// impl Blinker {
///     fn on(&mut self) {
///         self.change_state(OtherSet::X);
///     }
/// }
///
/// impl Other {
///     fn x(&mut self) {}
/// }
///
/// impl StateMachine for Blinker {
///     type State = Led;
///     type Attr = ();
///
///     fn machine(&self) -> &Machine<Led> {
///         &self.fsm
///     }
///
///     fn machine_mut(&mut self) -> &mut Machine<Led> {
///         &mut self.fsm
///     }
/// }
/// ```
pub trait StateMachine: Sized {
    /// The closed set of states this host implements.
    type State: StateSet<Host = Self>;

    /// The machine's attribute: `()` or [`Timed`](crate::timed::Timed).
    type Attr: Attribute;

    fn machine(&self) -> &Machine<Self::State, Self::Attr>;

    fn machine_mut(&mut self) -> &mut Machine<Self::State, Self::Attr>;

    /// Run the routine of the current state once.
    ///
    /// The routine may change state any number of times; the last change
    /// decides which routine the next `update()` runs.
    fn update(&mut self) {
        let routine = self.machine().state().routine();
        routine(self);
    }

    /// Identity of the current state.
    fn state(&self) -> Self::State {
        self.machine().state()
    }

    /// Check whether the machine currently occupies `state`.
    fn is_state(&self, state: Self::State) -> bool {
        self.machine().is_state(state)
    }

    /// Switch to `to`. Takes effect on the next `update()`.
    fn change_state(&mut self, to: Self::State) {
        self.machine_mut().change_state(to);
    }

    /// Ticks since the last transition. Only available on timed machines.
    fn state_elapsed(&self) -> <Self::Attr as Timer>::Ticks
    where
        Self::Attr: Timer,
    {
        self.machine().state_elapsed()
    }
}

/// Entry-state protocol: switch to `to`, then run `setup` once.
///
/// The switch happens first so `setup` may redirect the machine again; the
/// last `change_state` wins. Because the machine has already moved on by the
/// time anything else runs, an entry state is never observable through
/// `is_state`.
pub fn enter<M: StateMachine>(host: &mut M, to: M::State, setup: Routine<M>) {
    host.change_state(to);
    setup(host);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Step {
        First,
        Second,
        EnterSecond,
        EnterElsewhere,
    }

    impl State for Step {
        const ALL: &'static [Self] = &[
            Self::First,
            Self::Second,
            Self::EnterSecond,
            Self::EnterElsewhere,
        ];

        fn name(&self) -> &'static str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
                Self::EnterSecond => "EnterSecond",
                Self::EnterElsewhere => "EnterElsewhere",
            }
        }
    }

    impl StateSet for Step {
        type Host = Recorder;

        fn routine(self) -> Routine<Recorder> {
            match self {
                Self::First => Recorder::first,
                Self::Second => Recorder::second,
                Self::EnterSecond => |host: &mut Recorder| {
                    enter(host, Step::Second, Recorder::setup_second)
                },
                Self::EnterElsewhere => |host: &mut Recorder| {
                    enter(host, Step::Second, Recorder::redirect)
                },
            }
        }
    }

    struct Recorder {
        fsm: Machine<Step>,
        calls: Vec<&'static str>,
        state_during_setup: Option<Step>,
    }

    impl Recorder {
        fn new(initial: Step) -> Self {
            Self {
                fsm: Machine::new(initial),
                calls: Vec::new(),
                state_during_setup: None,
            }
        }

        fn first(&mut self) {
            self.calls.push("first");
        }

        fn second(&mut self) {
            self.calls.push("second");
        }

        fn setup_second(&mut self) {
            self.state_during_setup = Some(self.state());
            self.calls.push("setup_second");
        }

        fn redirect(&mut self) {
            self.calls.push("redirect");
            self.change_state(Step::First);
        }
    }

    impl StateMachine for Recorder {
        type State = Step;
        type Attr = ();

        fn machine(&self) -> &Machine<Step> {
            &self.fsm
        }

        fn machine_mut(&mut self) -> &mut Machine<Step> {
            &mut self.fsm
        }
    }

    #[test]
    fn update_runs_only_current_routine() {
        let mut host = Recorder::new(Step::First);
        host.update();
        assert_eq!(host.calls, vec!["first"]);

        host.change_state(Step::Second);
        host.update();
        assert_eq!(host.calls, vec!["first", "second"]);
    }

    #[test]
    fn change_state_takes_effect_on_next_update() {
        let mut host = Recorder::new(Step::First);
        host.change_state(Step::Second);
        assert!(host.is_state(Step::Second));
        assert_eq!(host.state(), Step::Second);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn entry_state_swaps_before_setup() {
        let mut host = Recorder::new(Step::EnterSecond);
        host.update();

        assert!(host.is_state(Step::Second));
        assert_eq!(host.state_during_setup, Some(Step::Second));
        assert_eq!(host.calls, vec!["setup_second"]);

        host.update();
        assert_eq!(host.calls, vec!["setup_second", "second"]);
    }

    #[test]
    fn setup_redirect_wins() {
        let mut host = Recorder::new(Step::EnterElsewhere);
        host.update();

        assert!(host.is_state(Step::First));
        assert_eq!(host.calls, vec!["redirect"]);
    }

    #[test]
    fn enter_helper_works_outside_dispatch() {
        let mut host = Recorder::new(Step::First);
        enter(&mut host, Step::Second, Recorder::setup_second);

        assert!(host.is_state(Step::Second));
        assert_eq!(host.calls, vec!["setup_second"]);
    }
}
