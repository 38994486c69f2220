//! Folio Theme System
//!
//! Active theme selection plus the bag of user-adjustable display
//! preferences, and the device preference listeners that feed both.
//!
//! # Overview
//!
//! - [`ThemeState`]: active [`ThemeOption`] and [`Customizations`] with
//!   merge-style setters
//! - [`MediaListeners`]: registrations for `prefers-color-scheme` and
//!   `prefers-reduced-motion`, matched 1:1 with unregistrations
//! - [`MediaSource`]: where the current device preferences are read from
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{AnimationPatch, ThemeOption, ThemePatch, ThemeState};
//!
//! let mut theme = ThemeState::new(ThemeOption::Dark);
//! theme.set_user_theme(ThemePatch {
//!     high_contrast_blog: Some(true),
//!     ..Default::default()
//! });
//! theme.set_user_animation(AnimationPatch { active: Some(false) });
//!
//! assert!(theme.customizations().theme.high_contrast_blog);
//! assert!(!theme.customizations().animation.active);
//! ```

pub mod customization;
pub mod media;
pub mod state;

pub use customization::{
    AnimationCustomization, AnimationPatch, Customizations, FontWeights, NotificationCustomization,
    NotificationPatch, ThemeCustomization, ThemeError, ThemePatch,
};
pub use media::{ListenerId, MediaChange, MediaListeners, MediaQuery, MediaSource, StaticMedia};
pub use state::{ThemeOption, ThemeState};
