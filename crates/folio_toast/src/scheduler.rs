//! Toast expiry scheduler
//!
//! Owns one pending removal timer per live toast. The host calls
//! [`ExpiryScheduler::sync`] whenever the store may have changed and
//! [`ExpiryScheduler::tick`] from its frame or timer loop.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::store::ToastStore;
use crate::toast::ToastId;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

new_key_type! {
    pub struct TimerId;
}

#[derive(Clone, Copy, Debug)]
struct PendingExpiry {
    toast: ToastId,
    deadline: Instant,
}

/// Scheduler that removes toasts once their visible duration has elapsed
#[derive(Debug)]
pub struct ExpiryScheduler {
    timers: SlotMap<TimerId, PendingExpiry>,
    by_toast: FxHashMap<ToastId, TimerId>,
    duration: Duration,
    shut_down: bool,
}

impl ExpiryScheduler {
    pub fn new(duration: Duration) -> Self {
        Self {
            timers: SlotMap::with_key(),
            by_toast: FxHashMap::default(),
            duration,
            shut_down: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a timer for every toast that does not have one yet
    ///
    /// Toasts already scheduled keep their original deadline, so calling
    /// this on every state change never stacks timers. Timers whose toast
    /// has left the store are dropped. Returns the number of new timers.
    pub fn sync(&mut self, store: &ToastStore, now: Instant) -> usize {
        if self.shut_down {
            return 0;
        }

        let stale: SmallVec<[ToastId; 4]> = self
            .by_toast
            .keys()
            .filter(|id| !store.contains(**id))
            .copied()
            .collect();
        for id in stale {
            self.cancel(id);
        }

        let mut scheduled = 0;
        for toast in store.toasts() {
            if self.by_toast.contains_key(&toast.id) {
                continue;
            }
            let timer = self.timers.insert(PendingExpiry {
                toast: toast.id,
                deadline: now + self.duration,
            });
            self.by_toast.insert(toast.id, timer);
            scheduled += 1;
        }

        if scheduled > 0 {
            tracing::trace!("ExpiryScheduler: scheduled {} timer(s)", scheduled);
        }
        scheduled
    }

    /// Fire every timer due at `now`
    ///
    /// Each fired timer removes its toast (a no-op if it was already
    /// dismissed) and clears its pending record. Returns the fired ids in
    /// deadline order.
    pub fn tick(&mut self, store: &mut ToastStore, now: Instant) -> SmallVec<[ToastId; 4]> {
        let mut due: SmallVec<[(Instant, TimerId); 4]> = self
            .timers
            .iter()
            .filter(|(_, pending)| pending.deadline <= now)
            .map(|(timer, pending)| (pending.deadline, timer))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        let mut fired = SmallVec::new();
        for (_, timer) in due {
            if let Some(pending) = self.timers.remove(timer) {
                self.by_toast.remove(&pending.toast);
                if store.remove_toast(pending.toast).is_some() {
                    fired.push(pending.toast);
                }
            }
        }

        if !fired.is_empty() {
            tracing::debug!("ExpiryScheduler: expired {:?}", fired);
        }
        fired
    }

    /// Cancel the pending timer for one toast
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.by_toast.remove(&id) {
            Some(timer) => self.timers.remove(timer).is_some(),
            None => false,
        }
    }

    /// Cancel every pending timer and stop scheduling new ones
    pub fn shutdown(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!("ExpiryScheduler: cancelling {} pending timer(s)", self.timers.len());
        }
        self.timers.clear();
        self.by_toast.clear();
        self.shut_down = true;
    }

    /// Accept new timers again after `shutdown`
    pub fn restart(&mut self) {
        self.shut_down = false;
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn is_scheduled(&self, id: ToastId) -> bool {
        self.by_toast.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline, for hosts that sleep between ticks
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|pending| pending.deadline).min()
    }
}

impl Default for ExpiryScheduler {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}
