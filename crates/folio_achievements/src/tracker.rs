//! Achievement tracker
//!
//! Counts activity, grants achievements on exact threshold hits, and
//! announces new unlocks through the toast store.

use folio_toast::{Toast, ToastIdGenerator, ToastKind, ToastStore};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{threshold, AchievementCategory, AchievementId, ActivityKind, Counter};

/// A permanently unlocked achievement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: AchievementId,
    /// Unlock time in unix milliseconds
    pub date: u64,
}

/// Counters, unlocked log and notification preference
#[derive(Clone, Debug, Serialize)]
pub struct AchievementTracker {
    counters: FxHashMap<Counter, u32>,
    log: Vec<AchievementRecord>,
    #[serde(skip)]
    notifications_enabled: bool,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self {
            counters: FxHashMap::default(),
            log: Vec::new(),
            notifications_enabled: true,
        }
    }

    // ========== Counters ==========

    pub fn counter(&self, counter: Counter) -> u32 {
        self.counters.get(&counter).copied().unwrap_or(0)
    }

    /// Overwrite a counter (restoring state or resetting it)
    ///
    /// Never grants anything by itself; only an increment that lands exactly
    /// on a threshold does.
    pub fn set_counter(&mut self, counter: Counter, value: u32) {
        self.counters.insert(counter, value);
    }

    /// Count one activity and grant the matching achievement, if any
    ///
    /// Increments the activity's counter by one, looks up the exact new
    /// value in the threshold table and appends a record unless that
    /// achievement is already in the log. When a record is appended and
    /// notifications are enabled an achievement toast is pushed to `toasts`.
    ///
    /// Returns the newly appended record.
    pub fn record_activity(
        &mut self,
        kind: ActivityKind,
        now_ms: u64,
        toasts: &mut ToastStore,
        ids: &ToastIdGenerator,
    ) -> Option<AchievementRecord> {
        let counter = kind.counter();
        let value = self.counter(counter).saturating_add(1);
        self.counters.insert(counter, value);
        tracing::trace!("AchievementTracker: {:?} -> {}", counter, value);

        let id = threshold(counter, value)?;
        let record = self.unlock(id, now_ms)?;

        if self.notifications_enabled {
            let toast = Toast::new(
                toasts.issue_id(ids),
                id.toast_content(),
                ToastKind::Achievement,
                now_ms,
            );
            if !toasts.add_toast(toast) {
                tracing::warn!("AchievementTracker: no toast shown for {:?}", id);
            }
        }
        Some(record)
    }

    fn unlock(&mut self, id: AchievementId, now_ms: u64) -> Option<AchievementRecord> {
        if self.is_unlocked(id) {
            tracing::debug!("AchievementTracker: {:?} already unlocked", id);
            return None;
        }
        let record = AchievementRecord { id, date: now_ms };
        self.log.push(record);
        tracing::debug!("AchievementTracker: unlocked {:?}", id);
        Some(record)
    }

    // ========== Unlocked Log ==========

    /// Unlocked achievements in unlock order
    pub fn achievements_log(&self) -> &[AchievementRecord] {
        &self.log
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.log.iter().any(|record| record.id == id)
    }

    /// Locked/unlocked state of each achievement in `category`
    pub fn category_status(&self, category: AchievementCategory) -> Vec<(AchievementId, bool)> {
        AchievementId::in_category(category)
            .map(|id| (id, self.is_unlocked(id)))
            .collect()
    }

    // ========== Notifications ==========

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        tracker: AchievementTracker,
        toasts: ToastStore,
        ids: ToastIdGenerator,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                tracker: AchievementTracker::new(),
                toasts: ToastStore::new(),
                ids: ToastIdGenerator::new(),
            }
        }

        fn read(&mut self) -> Option<AchievementRecord> {
            self.tracker
                .record_activity(ActivityKind::BlogRead, 42, &mut self.toasts, &self.ids)
        }
    }

    #[test]
    fn test_granted_exactly_at_threshold() {
        let mut h = Harness::new();
        let granted: Vec<_> = (1..=5).map(|_| h.read().map(|r| r.id)).collect();

        assert_eq!(
            granted,
            vec![
                Some(AchievementId::FirstRead),
                None,
                None,
                None,
                Some(AchievementId::Bookworm)
            ]
        );
        assert_eq!(h.tracker.counter(Counter::BlogsRead), 5);
        assert_eq!(
            h.tracker
                .achievements_log()
                .iter()
                .filter(|r| r.id == AchievementId::Bookworm)
                .count(),
            1
        );
    }

    #[test]
    fn test_unlock_toast_survives_externally_chosen_id() {
        let mut h = Harness::new();
        h.toasts.add_toast(Toast::new(
            folio_toast::ToastId::from_raw(1),
            folio_toast::ToastContent::new("Hello", "General toast"),
            ToastKind::General,
            1,
        ));

        assert_eq!(h.read().map(|r| r.id), Some(AchievementId::FirstRead));
        let kinds: Vec<_> = h.toasts.toasts().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::General, ToastKind::Achievement]);
    }

    #[test]
    fn test_never_granted_retroactively() {
        let mut h = Harness::new();
        h.tracker.set_counter(Counter::BlogsRead, 6);
        for _ in 0..3 {
            assert_eq!(h.read(), None);
        }
        assert_eq!(h.tracker.counter(Counter::BlogsRead), 9);
        assert!(!h.tracker.is_unlocked(AchievementId::Bookworm));
        assert!(!h.tracker.is_unlocked(AchievementId::FirstRead));
        assert!(h.toasts.is_empty());
    }

    #[test]
    fn test_recrossing_threshold_does_not_duplicate() {
        let mut h = Harness::new();
        h.tracker.set_counter(Counter::BlogsRead, 4);
        assert_eq!(h.read().map(|r| r.id), Some(AchievementId::Bookworm));

        h.tracker.set_counter(Counter::BlogsRead, 4);
        assert_eq!(h.read(), None);

        assert_eq!(h.tracker.achievements_log().len(), 1);
        assert_eq!(h.toasts.len(), 1);
    }

    #[test]
    fn test_unlock_pushes_achievement_toast() {
        let mut h = Harness::new();
        let record = h.read().unwrap();
        assert_eq!(record, AchievementRecord { id: AchievementId::FirstRead, date: 42 });

        let toast = h.toasts.toasts().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Achievement);
        assert_eq!(toast.content, AchievementId::FirstRead.toast_content());
        assert_eq!(toast.created_at_ms, 42);
    }

    #[test]
    fn test_disabled_notifications_still_unlock() {
        let mut h = Harness::new();
        h.tracker.set_notifications_enabled(false);
        assert!(h.read().is_some());
        assert!(h.tracker.is_unlocked(AchievementId::FirstRead));
        assert!(h.toasts.is_empty());
    }

    #[test]
    fn test_no_threshold_only_counts() {
        let mut h = Harness::new();
        h.tracker.set_counter(Counter::BlogsRead, 1);
        assert_eq!(h.read(), None);
        assert_eq!(h.tracker.counter(Counter::BlogsRead), 2);
        assert!(h.tracker.achievements_log().is_empty());
    }

    #[test]
    fn test_counters_are_independent() {
        let mut h = Harness::new();
        let record = h.tracker.record_activity(
            ActivityKind::CustomizationOpened,
            7,
            &mut h.toasts,
            &h.ids,
        );
        assert_eq!(record.map(|r| r.id), Some(AchievementId::Tinkerer));
        assert_eq!(h.tracker.counter(Counter::BlogsRead), 0);
        assert_eq!(
            h.tracker.category_status(AchievementCategory::Meta),
            vec![(AchievementId::Tinkerer, true), (AchievementId::Curious, false)]
        );
    }
}
