//! Clock sources and wraparound-safe tick values.

use std::fmt::Debug;
use std::sync::OnceLock;
use std::time::Instant;

/// Integral time value sampled from a [`Clock`].
///
/// Elapsed time is `now.elapsed_since(earlier)`, computed with modular
/// subtraction. The result is only correct if the clock wraps at the same
/// modulus as the tick type, i.e. an 8-bit counter must use `u8` ticks.
pub trait Ticks: Copy + Ord + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Ticks from `earlier` to `self`, across at most one wraparound.
    fn elapsed_since(self, earlier: Self) -> Self;

    /// Widen to `u64`.
    fn to_u64(self) -> u64;
}

macro_rules! impl_ticks {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ticks for $t {
                const ZERO: Self = 0;

                fn elapsed_since(self, earlier: Self) -> Self {
                    self.wrapping_sub(earlier)
                }

                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_ticks!(u8, u16, u32, u64, usize);

/// A monotonic (modulo wraparound) time source chosen at the type level.
///
/// `now()` must be cheap and free of side effects; it is sampled on every
/// transition and every elapsed-time query. Use [`clock!`](crate::clock) to
/// turn a free function into a clock type.
pub trait Clock: 'static {
    type Ticks: Ticks;

    /// Sample the current time.
    fn now() -> Self::Ticks;
}

fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

/// Milliseconds since the first clock read in this process, as a 32-bit
/// counter that wraps after roughly 49.7 days.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMillis;

impl Clock for SystemMillis {
    type Ticks = u32;

    fn now() -> u32 {
        epoch().elapsed().as_millis() as u32
    }
}

/// Microseconds since the first clock read in this process, as a 32-bit
/// counter that wraps after roughly 71.6 minutes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMicros;

impl Clock for SystemMicros {
    type Ticks = u32;

    fn now() -> u32 {
        epoch().elapsed().as_micros() as u32
    }
}
