//! Folio Achievements
//!
//! Milestones unlocked by counted visitor activity.
//!
//! - [`catalog`]: the closed set of achievements, their categories and the
//!   threshold table that grants them
//! - [`tracker`]: counters, the unlocked log, and unlock notifications
//! - [`guard`]: once-per-page-instance counting
//!
//! Thresholds match exactly: an achievement for count 5 is granted when the
//! counter becomes 5 and at no other time.

pub mod catalog;
pub mod guard;
pub mod tracker;

pub use catalog::{
    AchievementCategory, AchievementContent, AchievementId, ActivityKind, Counter,
};
pub use guard::ActivityGuard;
pub use tracker::{AchievementRecord, AchievementTracker};
