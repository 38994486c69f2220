//! End-to-end visitor sessions through the composed app.

use std::thread;
use std::time::{Duration, Instant};

use folio_achievements::{AchievementId, ActivityGuard, Counter};
use folio_app::{AppSettings, FolioApp, ManualClock};
use folio_core::{FocusScope, ModalName, ModalPhase, TocItem};
use folio_theme::{MediaChange, StaticMedia, ThemeOption};
use folio_toast::{ToastContent, ToastKind, TOAST_DURATION};

fn mounted_app(clock: &ManualClock) -> FolioApp {
    let mut app = FolioApp::with_clock(AppSettings::default(), clock.clone());
    app.mount(&StaticMedia {
        dark: true,
        reduced_motion: false,
    });
    app
}

struct Buttons {
    count: usize,
    focused: Option<usize>,
}

impl FocusScope for Buttons {
    fn focusable_count(&self) -> usize {
        self.count
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
    }
}

#[test]
fn achievement_toast_click_opens_achievements_modal() {
    let clock = ManualClock::new(5_000);
    let mut app = mounted_app(&clock);

    let mut page = ActivityGuard::new();
    app.begin_document("Shaders", "shaders");
    let record = app.record_blog_read(&mut page).unwrap();
    assert_eq!(record.id, AchievementId::FirstRead);
    assert_eq!(record.date, 5_000);

    let toast = app.toasts().toasts().next().unwrap().clone();
    assert_eq!(toast.kind, ToastKind::Achievement);

    assert_eq!(app.click_toast(toast.id), Some(ModalName::Achievements));
    assert_eq!(
        app.modals().history(),
        &[(ModalPhase::Closed, ModalPhase::Open(ModalName::Achievements))]
    );

    let mut scope = Buttons {
        count: 3,
        focused: None,
    };
    assert!(app.apply_modal_focus(&mut scope));
    assert_eq!(scope.focused, Some(1));
}

#[test]
fn general_toast_click_is_noop() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);

    let id = app.notify(ToastContent::new("Copied", "Link copied"), ToastKind::General);
    assert_eq!(app.click_toast(id), None);
    assert!(app.modals().history().is_empty());
    assert_eq!(app.modals().phase(), ModalPhase::Closed);
}

#[test]
fn modal_name_survives_visibility_toggle() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);

    app.open_modal(ModalName::Achievements);
    app.toggle_modal(false);
    app.toggle_modal(true);

    assert_eq!(app.modals().modal_name(), Some(ModalName::Achievements));
    assert!(app.modals().is_visible());
}

#[test]
fn toasts_expire_after_duration_and_not_before() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);
    let t0 = Instant::now();

    let first = app.notify(ToastContent::new("One", "first"), ToastKind::General);
    app.tick(t0);
    let second = app.notify(ToastContent::new("Two", "second"), ToastKind::General);
    app.tick(t0 + Duration::from_millis(500));

    // Repeated ticks do not reschedule
    for ms in [600, 900, 1500] {
        assert!(app.tick(t0 + Duration::from_millis(ms)).is_empty());
    }
    assert_eq!(app.expiry().pending_count(), 2);

    assert_eq!(app.tick(t0 + TOAST_DURATION).as_slice(), &[first]);
    assert_eq!(
        app.tick(t0 + TOAST_DURATION + Duration::from_millis(500))
            .as_slice(),
        &[second]
    );
    assert!(app.toasts().is_empty());
    assert_eq!(app.next_deadline(), None);
}

#[test]
fn manual_dismiss_before_expiry_is_safe() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);
    let t0 = Instant::now();

    let id = app.notify(ToastContent::new("Bye", "soon"), ToastKind::General);
    app.tick(t0);
    assert!(app.remove_toast(id).is_some());
    assert!(app.remove_toast(id).is_none());
    assert!(app.tick(t0 + TOAST_DURATION).is_empty());
}

#[test]
fn documents_never_share_headings() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);

    app.begin_document("First", "first");
    app.add_toc_item(TocItem::new("A", "a"));
    app.add_toc_item(TocItem::new("B", "b"));
    app.end_document();

    app.begin_document("Second", "second");
    app.add_toc_item(TocItem::new("C", "c"));

    assert_eq!(app.blog().table_of_contents(), &[TocItem::new("C", "c")]);
}

#[test]
fn device_preference_changes_after_mount() {
    let clock = ManualClock::new(0);
    let mut app = mounted_app(&clock);

    app.set_theme(ThemeOption::Light);
    assert!(app.handle_media_change(MediaChange::ColorScheme(ThemeOption::Dark)));
    assert_eq!(app.theme().theme(), ThemeOption::Dark);

    assert!(app.handle_media_change(MediaChange::ReducedMotion(true)));
    assert!(!app.theme().customizations().animation.active);
}

#[test]
fn concurrent_readers_unlock_each_achievement_once() {
    let clock = ManualClock::new(0);
    let shared = mounted_app(&clock).into_shared();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    let mut page = ActivityGuard::new();
                    shared.lock().unwrap().record_blog_read(&mut page);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let app = shared.lock().unwrap();
    assert_eq!(app.achievements().counter(Counter::BlogsRead), 20);
    let ids: Vec<_> = app.achievements().achievements_log().iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec![
            AchievementId::FirstRead,
            AchievementId::Bookworm,
            AchievementId::Bibliophile
        ]
    );
    assert_eq!(app.toasts().len(), 3);
}
