//! Signalling a state routine from another execution context.

use std::sync::atomic::{AtomicBool, Ordering};

/// A one-bit mailbox from an interrupt handler or another thread to a state
/// routine.
///
/// All accesses are single-word atomics with `Relaxed` ordering: a raised
/// flag becomes visible eventually, and nothing else is synchronised with it.
///
/// ```rust
/// use tickstate::host::Flag;
///
/// static BUTTON: Flag = Flag::new();
///
/// BUTTON.raise();
/// assert!(BUTTON.take());
/// assert!(!BUTTON.take());
/// ```
#[derive(Debug, Default)]
pub struct Flag(AtomicBool);

impl Flag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Test and clear in one step.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}
