//! A visitor reading through the blog, one page view at a time.

use folio_achievements::{
    AchievementCategory, AchievementId, AchievementTracker, ActivityGuard, ActivityKind,
};
use folio_toast::{ToastIdGenerator, ToastKind, ToastStore};

/// One rendered page view; re-renders reuse the same guard
fn render_post(
    guard: &mut ActivityGuard,
    renders: usize,
    tracker: &mut AchievementTracker,
    toasts: &mut ToastStore,
    ids: &ToastIdGenerator,
    now_ms: u64,
) {
    for _ in 0..renders {
        if guard.claim() {
            tracker.record_activity(ActivityKind::BlogRead, now_ms, toasts, ids);
        }
    }
}

#[test]
fn rerenders_count_once_per_page_view() {
    let mut tracker = AchievementTracker::new();
    let mut toasts = ToastStore::new();
    let ids = ToastIdGenerator::new();

    for view in 0..10u64 {
        let mut guard = ActivityGuard::new();
        render_post(&mut guard, 3, &mut tracker, &mut toasts, &ids, 1_000 + view);
    }

    assert_eq!(
        tracker.counter(folio_achievements::Counter::BlogsRead),
        10
    );
    assert_eq!(
        tracker.category_status(AchievementCategory::Blog),
        vec![
            (AchievementId::FirstRead, true),
            (AchievementId::Bookworm, true),
            (AchievementId::Bibliophile, true),
        ]
    );

    let dates: Vec<u64> = tracker.achievements_log().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![1_000, 1_004, 1_009]);

    assert_eq!(toasts.len(), 3);
    assert!(toasts.toasts().all(|t| t.kind == ToastKind::Achievement));
}

#[test]
fn log_snapshot_serializes() {
    let mut tracker = AchievementTracker::new();
    let mut toasts = ToastStore::new();
    let ids = ToastIdGenerator::new();
    tracker.record_activity(ActivityKind::AchievementsOpened, 99, &mut toasts, &ids);

    let json = serde_json::to_value(&tracker).unwrap();
    assert_eq!(json["log"][0]["id"], "curious");
    assert_eq!(json["log"][0]["date"], 99);
    assert_eq!(json["counters"]["achievements_viewed"], 1);
}
