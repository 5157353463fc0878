//! Single-slot scheduling primitives for event coalescing.
//!
//! The engine never owns timers or frame callbacks itself; it records
//! intent in these slots and the host fires them by calling
//! [`crate::SidebarEngine::on_frame`] and [`crate::SidebarEngine::tick`].
//! Deadlines are absolute and compared against a caller-supplied instant,
//! which keeps the coalescing behavior testable on a simulated clock.

use std::mem;
use std::time::{Duration, Instant};

/// Interface for the single pending debounce slot.
///
/// Arming an already-armed slot replaces its deadline, giving
/// last-signal-wins semantics for bursts of resize events.
pub trait Timeout: Default {
    /// Arm (or re-arm) the slot to expire `delay` after `now`.
    fn set_timeout(&mut self, now: Instant, delay: Duration);

    /// Disarm the slot.
    fn clear_timeout(&mut self);

    /// Returns whether the slot is currently armed.
    fn pending_timeout(&self) -> bool;

    /// Deadline of the armed slot, if any.
    fn deadline(&self) -> Option<Instant>;
}

/// Debounce slot backed by a plain [`Instant`] deadline.
#[derive(Debug, Default)]
pub struct DebounceHandler {
    deadline: Option<Instant>,
}

impl Timeout for DebounceHandler {
    #[inline]
    fn set_timeout(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    #[inline]
    fn clear_timeout(&mut self) {
        self.deadline = None;
    }

    #[inline]
    fn pending_timeout(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Coalesces scroll bursts into at most one pending frame evaluation.
///
/// A new request while one is pending is absorbed, never queued, so each
/// rendered frame runs at most one state-machine evaluation.
#[derive(Debug, Default)]
pub struct FrameGate {
    requested: bool,
}

impl FrameGate {
    /// Request a frame evaluation.
    ///
    /// Returns `true` when the request was newly scheduled and the host
    /// should arrange a frame callback; `false` when one is already
    /// pending.
    #[inline]
    pub fn request(&mut self) -> bool {
        !mem::replace(&mut self.requested, true)
    }

    /// Consume the pending request, if any.
    #[inline]
    pub fn take(&mut self) -> bool {
        mem::take(&mut self.requested)
    }

    /// Returns whether a frame request is pending.
    #[inline]
    pub fn pending(&self) -> bool {
        self.requested
    }

    /// Drop any pending request without running it.
    #[inline]
    pub fn clear(&mut self) {
        self.requested = false;
    }
}
