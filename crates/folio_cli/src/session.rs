//! Scripted visitor session
//!
//! Drives a mounted [`FolioApp`] the way a browser would: page views arrive
//! at an interval while a frame timer ticks toast expiry in the background.

use std::time::Duration;

use anyhow::{Context, Result};
use folio_achievements::ActivityGuard;
use folio_app::FolioApp;
use folio_core::{ModalName, TocItem};
use folio_theme::MediaSource;
use folio_toast::ToastKind;
use tokio::time::{interval, sleep, Instant, MissedTickBehavior};

/// Frame interval for expiry ticks
const FRAME: Duration = Duration::from_millis(16);

/// What the session should do
#[derive(Clone, Debug)]
pub struct SessionPlan {
    /// Number of blog posts to read
    pub reads: u32,
    /// Delay between two page views
    pub read_interval: Duration,
    /// Click the first achievement toast that appears
    pub click_achievement: bool,
    /// Open the customization modal before reading
    pub customize: bool,
}

/// Run `plan` against `app`, returning once every toast has expired
pub async fn run(app: &mut FolioApp, media: &dyn MediaSource, plan: &SessionPlan) -> Result<()> {
    app.mount(media);

    if plan.customize {
        app.open_modal(ModalName::Customization);
        app.toggle_modal(false);
    }

    let mut frames = interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut clicked = false;

    for read in 1..=plan.reads {
        let slug = format!("post-{read}");
        app.begin_document(&format!("Post {read}"), &slug);
        for section in ["Introduction", "Details", "Wrap-up"] {
            app.add_toc_item(TocItem::new(section, format!("{slug}-{}", section.to_lowercase())));
        }

        let mut page = ActivityGuard::new();
        if let Some(record) = app.record_blog_read(&mut page) {
            tracing::info!("unlocked {:?} after {} read(s)", record.id, read);
        }

        if plan.click_achievement && !clicked {
            let achievement = app
                .toasts()
                .toasts()
                .find(|toast| toast.kind == ToastKind::Achievement)
                .map(|toast| toast.id);
            if let Some(id) = achievement {
                let opened = app.click_toast(id);
                tracing::info!("clicked toast {:?}, opened {:?}", id, opened);
                clicked = true;
            }
        }

        let deadline = Instant::now() + plan.read_interval;
        while Instant::now() < deadline {
            frames.tick().await;
            app.tick(Instant::now().into_std());
        }
        app.end_document();
    }

    drain(app, &mut frames).await?;
    app.unmount();
    Ok(())
}

/// Tick until the toast store is empty
async fn drain(app: &mut FolioApp, frames: &mut tokio::time::Interval) -> Result<()> {
    let limit = app.expiry().duration() * 2 + Duration::from_secs(1);
    let started = Instant::now();

    while !app.toasts().is_empty() {
        frames.tick().await;
        app.tick(Instant::now().into_std());
        if started.elapsed() > limit {
            anyhow::bail!("{} toast(s) never expired", app.toasts().len());
        }
    }

    // Let late subscribers observe the final frame
    sleep(FRAME).await;
    tracing::debug!("all toasts expired");
    Ok(())
}

/// Pretty JSON snapshot of the app
pub fn snapshot(app: &FolioApp) -> Result<String> {
    app.snapshot_json().context("Failed to serialize snapshot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_achievements::AchievementId;
    use folio_app::AppSettings;
    use folio_theme::StaticMedia;

    fn quick_app() -> FolioApp {
        FolioApp::new(AppSettings {
            toast_duration: Duration::from_millis(40),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_session_drains_every_toast() {
        let mut app = quick_app();
        let plan = SessionPlan {
            reads: 2,
            read_interval: Duration::from_millis(20),
            click_achievement: true,
            customize: true,
        };

        run(&mut app, &StaticMedia::default(), &plan).await.unwrap();

        assert!(app.toasts().is_empty());
        assert!(!app.is_mounted());
        assert_eq!(app.expiry().pending_count(), 0);
        assert!(app.blog().table_of_contents().is_empty());
        for id in [
            AchievementId::Tinkerer,
            AchievementId::FirstRead,
            AchievementId::Curious,
        ] {
            assert!(app.achievements().is_unlocked(id), "{id:?} not unlocked");
        }
    }

    #[tokio::test]
    async fn test_drain_returns_once_store_is_empty() {
        let mut app = quick_app();
        app.mount(&StaticMedia::default());
        app.notify(
            folio_toast::ToastContent::new("Saved", "Preferences updated"),
            ToastKind::General,
        );

        let mut frames = interval(FRAME);
        drain(&mut app, &mut frames).await.unwrap();
        assert!(app.toasts().is_empty());
    }
}
