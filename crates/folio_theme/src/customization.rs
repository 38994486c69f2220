//! User display customizations
//!
//! Nested preference bag edited from the customization modal and from device
//! accessibility probes. Setters take patch structs where `None` means
//! "leave this field alone", which gives shallow-merge semantics per group.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest font weight the font stack can render
pub const MIN_FONT_WEIGHT: u16 = 100;
/// Highest font weight the font stack can render
pub const MAX_FONT_WEIGHT: u16 = 900;

/// Errors raised while loading customizations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid customization document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Font weights used by body copy
///
/// The store does not clamp these; sliders bound them to
/// [`MIN_FONT_WEIGHT`]..=[`MAX_FONT_WEIGHT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontWeights {
    pub regular: u16,
    pub bold: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            regular: 400,
            bold: 700,
        }
    }
}

impl FontWeights {
    /// Check that both weights fall inside the renderable range
    pub fn is_renderable(&self) -> bool {
        let range = MIN_FONT_WEIGHT..=MAX_FONT_WEIGHT;
        range.contains(&self.regular) && range.contains(&self.bold)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeCustomization {
    pub high_contrast_blog: bool,
    pub font_weights: FontWeights,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationCustomization {
    pub active: bool,
}

impl Default for AnimationCustomization {
    fn default() -> Self {
        Self { active: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCustomization {
    /// Show a toast when an achievement unlocks
    pub achievements: bool,
}

impl Default for NotificationCustomization {
    fn default() -> Self {
        Self { achievements: true }
    }
}

/// All user-adjustable display preferences
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customizations {
    pub theme: ThemeCustomization,
    pub animation: AnimationCustomization,
    pub notifications: NotificationCustomization,
}

impl Customizations {
    /// Parse customizations from a TOML document
    ///
    /// Missing tables and keys fall back to their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }
}

/// Partial update for [`ThemeCustomization`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub font_weights: Option<FontWeights>,
    pub high_contrast_blog: Option<bool>,
    /// Modal visibility gate; routed to the modal coordinator by the app
    pub modal: Option<bool>,
}

impl ThemePatch {
    pub(crate) fn merge_into(self, target: &mut ThemeCustomization) {
        if let Some(font_weights) = self.font_weights {
            target.font_weights = font_weights;
        }
        if let Some(high_contrast_blog) = self.high_contrast_blog {
            target.high_contrast_blog = high_contrast_blog;
        }
    }

    /// True if the patch touches a field stored in [`ThemeCustomization`]
    pub(crate) fn touches_theme(&self) -> bool {
        self.font_weights.is_some() || self.high_contrast_blog.is_some()
    }
}

/// Partial update for [`AnimationCustomization`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationPatch {
    pub active: Option<bool>,
}

impl AnimationPatch {
    pub(crate) fn merge_into(self, target: &mut AnimationCustomization) {
        if let Some(active) = self.active {
            target.active = active;
        }
    }
}

/// Partial update for [`NotificationCustomization`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub achievements: Option<bool>,
}

impl NotificationPatch {
    pub(crate) fn merge_into(self, target: &mut NotificationCustomization) {
        if let Some(achievements) = self.achievements {
            target.achievements = achievements;
        }
    }
}
