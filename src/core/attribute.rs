//! The single extension slot of a machine.
//!
//! A machine carries exactly one attribute. The attribute observes every
//! transition just before the identity swap. `()` is the plain attribute and
//! does nothing; [`Timed`](crate::timed::Timed) records the transition time.
//! Combining several attributes in one machine is not supported.

/// Per-machine extension notified on every state change.
pub trait Attribute: Sized {
    /// Create the attribute for a freshly constructed machine.
    fn attach() -> Self;

    /// Called at the start of every `change_state`, before the new identity
    /// is stored.
    fn on_change(&mut self);

    /// Ticks spent in the current state, if this attribute keeps time.
    fn elapsed_ticks(&self) -> Option<u64> {
        None
    }
}

impl Attribute for () {
    fn attach() -> Self {}

    fn on_change(&mut self) {}
}
