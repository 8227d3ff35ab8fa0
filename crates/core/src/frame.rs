//! Animation-frame coalescing.
//!
//! High-frequency sources request a visual update through a
//! [`DebouncedEffect`]. Each request cancels the pending frame callback before
//! scheduling a new one, so only the latest value is flushed and at most one
//! flush happens per frame.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Opaque id of a scheduled frame callback (the browser's
/// `requestAnimationFrame` id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameHandle(pub i32);

/// Schedules and cancels frame callbacks.
pub trait FrameScheduler {
    /// Request a callback on the next frame. `None` if the runtime refused.
    fn schedule(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously scheduled callback. Unknown handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Result of [`DebouncedEffect::request`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request<T> {
    /// Deferred to the next frame.
    Scheduled(FrameHandle),
    /// No frame could be scheduled; apply the value now.
    Immediate(T),
}

/// Latest-wins update deferred to the next animation frame.
#[derive(Debug, Clone)]
pub struct DebouncedEffect<T> {
    handle: Option<FrameHandle>,
    pending: Option<T>,
}

impl<T> Default for DebouncedEffect<T> {
    fn default() -> Self {
        Self {
            handle: None,
            pending: None,
        }
    }
}

impl<T> DebouncedEffect<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: None,
            pending: None,
        }
    }

    /// Replace any pending value with `value` and reschedule.
    pub fn request(&mut self, scheduler: &mut impl FrameScheduler, value: T) -> Request<T> {
        if let Some(previous) = self.handle.take() {
            scheduler.cancel(previous);
        }

        match scheduler.schedule() {
            Some(handle) => {
                self.handle = Some(handle);
                self.pending = Some(value);
                Request::Scheduled(handle)
            }
            None => {
                self.pending = None;
                Request::Immediate(value)
            }
        }
    }

    /// Take the pending value when the frame fires.
    pub fn take(&mut self) -> Option<T> {
        self.handle = None;
        self.pending.take()
    }

    /// Drop the pending value and cancel its callback.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.cancel(handle);
        }
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A scheduler driven by hand, for tests and headless replay.
///
/// Callbacks never fire on their own; the owner drains them with
/// [`ManualScheduler::take_due`] and calls the frame handler.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: i32,
    live: BTreeSet<FrameHandle>,
    scheduled: usize,
    cancelled: usize,
    refuse: bool,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler that refuses every request, like a runtime without
    /// `requestAnimationFrame`.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Remove and return every live callback, as the next frame would run them.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.live).into_iter().collect()
    }

    /// Callbacks scheduled and not yet cancelled or run.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub const fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    #[must_use]
    pub const fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.live.insert(handle);
        self.scheduled = self.scheduled.saturating_add(1);
        Some(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.live.remove(&handle) {
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }
}
