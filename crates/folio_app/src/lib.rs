//! Folio Application State
//!
//! Composes every store into one explicitly owned [`FolioApp`] and wires the
//! cross-store control flow:
//!
//! - a counted page view feeds the achievement tracker, whose unlocks push
//!   achievement toasts
//! - the expiry scheduler removes toasts once their duration elapses
//! - clicking an achievement toast opens the achievements modal
//! - device preference changes feed theme and animation settings
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_app::{AppSettings, FolioApp, ManualClock};
//! use folio_achievements::ActivityGuard;
//! use folio_theme::StaticMedia;
//!
//! let mut app = FolioApp::with_clock(AppSettings::default(), ManualClock::new(0));
//! app.mount(&StaticMedia::default());
//!
//! let mut page = ActivityGuard::new();
//! app.begin_document("Hello", "hello");
//! app.record_blog_read(&mut page);
//! assert_eq!(app.toasts().len(), 1);
//!
//! let start = Instant::now();
//! app.tick(start);
//! app.tick(start + Duration::from_secs(2));
//! assert!(app.toasts().is_empty());
//! ```

pub mod app;
pub mod context;

pub use app::{AppSettings, AppSnapshot, FolioApp};
pub use context::{Clock, DirtyFlag, ManualClock, SharedApp, SystemClock};
