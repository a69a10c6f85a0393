//! Macros for declaring state sets and clocks.

/// Declare a state set and bind each state to a host method.
///
/// Each line is either `Variant => method` for an ordinary state or
/// `Variant -> Target => method` for an entry state. An entry state
/// switches to `Target` and then calls `method` once (see
/// [`host::enter`](crate::host::enter)). Method bodies are ordinary inherent
/// methods of the host and can live anywhere in the crate.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and the serde traits, and implements [`State`](crate::State) and
/// [`StateSet`](crate::StateSet). The serde derives go through this crate, so
/// callers need no direct `serde` dependency as long as the crate is
/// imported under its own name.
///
/// The enum's visibility may not be wider than the host's: the host type
/// appears in the enum's public `StateSet::Host`, so a `pub` enum over a
/// private host is rejected with E0446.
///
/// # Example
///
/// ```
/// use tickstate::{states, Machine, StateMachine};
///
/// pub struct Pump {
///     fsm: Machine<PumpState>,
///     primed: bool,
/// }
///
/// states! {
///     pub enum PumpState for Pump {
///         Off => off,
///         Running => running,
///         Prime -> Running => prime,
///     }
/// }
///
/// impl Pump {
///     fn off(&mut self) {}
///     fn running(&mut self) {}
///     fn prime(&mut self) {
///         self.primed = true;
///     }
/// }
///
/// impl StateMachine for Pump {
///     type State = PumpState;
///     type Attr = ();
///     fn machine(&self) -> &Machine<PumpState> { &self.fsm }
///     fn machine_mut(&mut self) -> &mut Machine<PumpState> { &mut self.fsm }
/// }
///
/// let mut pump = Pump { fsm: Machine::new(PumpState::Prime), primed: false };
/// pump.update();
/// assert!(pump.primed);
/// assert!(pump.is_state(PumpState::Running));
/// ```
#[macro_export]
macro_rules! states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $host:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(-> $to:ident)? => $routine:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize
        )]
        #[serde(crate = "tickstate::__serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::State for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::StateSet for $name {
            type Host = $host;

            fn routine(self) -> $crate::Routine<$host> {
                match self {
                    $(Self::$variant => $crate::__routine!($host, $name, $routine $(, $to)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __routine {
    ($host:ty, $name:ident, $routine:ident) => {
        <$host>::$routine as $crate::Routine<$host>
    };
    ($host:ty, $name:ident, $routine:ident, $to:ident) => {
        (|host: &mut $host| $crate::host::enter(host, $name::$to, <$host>::$routine))
            as $crate::Routine<$host>
    };
}

/// Bind a free function returning an integral tick count as a clock type.
///
/// ```
/// use tickstate::{clock, Clock};
///
/// fn millis() -> u32 {
///     1_234
/// }
///
/// clock!(pub Millis: u32 = millis);
///
/// assert_eq!(Millis::now(), 1_234);
/// ```
#[macro_export]
macro_rules! clock {
    ($(#[$meta:meta])* $vis:vis $name:ident: $ticks:ty = $now:path) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::Clock for $name {
            type Ticks = $ticks;

            fn now() -> $ticks {
                $now()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Machine, State};
    use crate::host::StateMachine;
    use crate::timed::{Clock, Timed};
    use std::cell::Cell;

    thread_local! {
        static TICKS: Cell<u16> = const { Cell::new(0) };
    }

    fn ticks() -> u16 {
        TICKS.with(Cell::get)
    }

    clock!(TestClock: u16 = ticks);

    struct Door {
        fsm: Machine<DoorState, Timed<TestClock>>,
        log: Vec<&'static str>,
    }

    states! {
        enum DoorState for Door {
            Closed => closed,
            Open => open,
            /// Opened by the remote.
            OpenRemote -> Open => unlock_remote,
            OpenKey -> Open => unlock_key,
        }
    }

    impl Door {
        fn new() -> Self {
            Self {
                fsm: Machine::new(DoorState::Closed),
                log: Vec::new(),
            }
        }

        fn closed(&mut self) {
            self.log.push("closed");
        }

        fn open(&mut self) {
            self.log.push("open");
            if self.state_elapsed() >= 3 {
                self.change_state(DoorState::Closed);
            }
        }

        fn unlock_remote(&mut self) {
            self.log.push("remote");
        }

        fn unlock_key(&mut self) {
            self.log.push("key");
        }
    }

    impl StateMachine for Door {
        type State = DoorState;
        type Attr = Timed<TestClock>;

        fn machine(&self) -> &Machine<DoorState, Timed<TestClock>> {
            &self.fsm
        }

        fn machine_mut(&mut self) -> &mut Machine<DoorState, Timed<TestClock>> {
            &mut self.fsm
        }
    }

    #[test]
    fn states_macro_generates_names_and_all() {
        assert_eq!(
            DoorState::ALL,
            &[
                DoorState::Closed,
                DoorState::Open,
                DoorState::OpenRemote,
                DoorState::OpenKey
            ]
        );
        assert_eq!(DoorState::OpenRemote.name(), "OpenRemote");
        assert_eq!(DoorState::from_name("Open"), Ok(DoorState::Open));
    }

    #[test]
    fn entry_states_share_a_target_with_separate_setup() {
        let mut door = Door::new();

        door.change_state(DoorState::OpenRemote);
        door.update();
        assert!(door.is_state(DoorState::Open));

        door.change_state(DoorState::OpenKey);
        door.update();
        assert!(door.is_state(DoorState::Open));

        assert_eq!(door.log, vec!["remote", "key"]);
    }

    #[test]
    fn generated_dispatch_drives_timed_host() {
        TICKS.with(|t| t.set(100));
        let mut door = Door::new();
        door.change_state(DoorState::OpenKey);
        door.update();

        TICKS.with(|t| t.set(102));
        door.update();
        assert!(door.is_state(DoorState::Open));

        TICKS.with(|t| t.set(103));
        door.update();
        assert!(door.is_state(DoorState::Closed));
        assert_eq!(door.state_elapsed(), 0);
        assert_eq!(door.log, vec!["key", "open", "open"]);
    }

    mod own_serde_path {
        // Shadows the serde crate for bare paths in this module.
        #[allow(dead_code)]
        mod serde {}

        pub struct Lamp;

        states! {
            pub enum LampState for Lamp {
                On => on,
            }
        }

        impl Lamp {
            fn on(&mut self) {}
        }
    }

    #[test]
    fn states_macro_derives_serde_through_the_crate() {
        use own_serde_path::LampState;

        assert_eq!(serde_json::to_string(&LampState::On).unwrap(), "\"On\"");
        assert_eq!(
            serde_json::from_str::<LampState>("\"On\"").unwrap(),
            LampState::On
        );
    }

    #[test]
    fn clock_macro_calls_the_bound_function() {
        TICKS.with(|t| t.set(7));
        assert_eq!(TestClock::now(), 7);
    }
}
