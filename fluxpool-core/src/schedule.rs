//! Cancellable single-shot timers for the cooperative tick loop.
//!
//! Nothing here sleeps or spawns. The owner of a [`TimerSlot`] is polled with
//! the current time and asks whether its timer is due. A slot holds at most one
//! pending [`OneShot`]; re-arming cancels the previous one, so chained timers
//! never overlap.
//!
//! Cancellation goes through a shared [`TimerHandle`] flag rather than through
//! the slot, so a handle given to someone else can stop the timer even after
//! the slot has moved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

/// Cancellation token for one scheduled firing.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the timer. Returns `true` only for the call that performed the
    /// cancellation; later calls are no-ops returning `false`.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A deadline paired with its cancellation token.
#[derive(Debug, Clone)]
pub struct OneShot {
    deadline: DateTime<Utc>,
    handle: TimerHandle,
}

impl OneShot {
    pub fn after(now: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            handle: TimerHandle::new(),
        }
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    /// Due means: not cancelled and `now` has reached the deadline.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.handle.is_cancelled() && now >= self.deadline
    }

    /// Time left until the deadline, floored at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.deadline - now).max(Duration::zero())
    }
}

/// Holder for at most one pending timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<OneShot>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new timer, cancelling whatever was pending. Returns its handle.
    pub fn arm(&mut self, now: DateTime<Utc>, delay: Duration) -> TimerHandle {
        self.cancel();
        let shot = OneShot::after(now, delay);
        let handle = shot.handle();
        self.pending = Some(shot);
        handle
    }

    /// Consume the pending timer if it is due. A cancelled timer is dropped
    /// without firing.
    pub fn fire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match &self.pending {
            Some(shot) if shot.handle.is_cancelled() => {
                self.pending = None;
                false
            }
            Some(shot) if shot.is_due(now) => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel and drop the pending timer. Safe when nothing is pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(shot) => shot.handle.cancel(),
            None => false,
        }
    }

    /// True while a live (uncancelled) timer is pending.
    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|shot| !shot.handle.is_cancelled())
    }

    pub fn pending(&self) -> Option<&OneShot> {
        self.pending.as_ref()
    }
}
