//! Theme state
//!
//! Holds the active theme and the user's customizations. Every visible
//! change raises a repaint flag that the renderer clears once it has
//! re-read the state.

use serde::{Deserialize, Serialize};

use crate::customization::{AnimationPatch, Customizations, NotificationPatch, ThemePatch};

/// Selectable color themes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeOption {
    Light,
    #[default]
    Dark,
}

impl ThemeOption {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            ThemeOption::Light => ThemeOption::Dark,
            ThemeOption::Dark => ThemeOption::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeOption::Light => "light",
            ThemeOption::Dark => "dark",
        }
    }
}

/// Active theme plus display customizations
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    theme: ThemeOption,
    customizations: Customizations,
    /// Flag indicating the renderer should re-read theme state
    needs_repaint: bool,
}

impl ThemeState {
    pub fn new(theme: ThemeOption) -> Self {
        Self::with_customizations(theme, Customizations::default())
    }

    pub fn with_customizations(theme: ThemeOption, customizations: Customizations) -> Self {
        Self {
            theme,
            customizations,
            needs_repaint: false,
        }
    }

    // ========== Theme ==========

    pub fn theme(&self) -> ThemeOption {
        self.theme
    }

    /// Replace the active theme
    ///
    /// Manual toggles and device scheme changes both land here; whichever
    /// arrives last wins.
    pub fn set_theme(&mut self, theme: ThemeOption) {
        if self.theme != theme {
            tracing::debug!(
                "ThemeState::set_theme - switching from {:?} to {:?}",
                self.theme,
                theme
            );
            self.theme = theme;
            self.needs_repaint = true;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggle());
    }

    // ========== Customizations ==========

    pub fn customizations(&self) -> &Customizations {
        &self.customizations
    }

    /// Merge into `customizations.theme`
    ///
    /// `patch.modal` is not stored here; the app routes it to the modal
    /// coordinator.
    pub fn set_user_theme(&mut self, patch: ThemePatch) {
        if !patch.touches_theme() {
            return;
        }
        let before = self.customizations.theme;
        patch.merge_into(&mut self.customizations.theme);
        self.mark_if_changed(before != self.customizations.theme);
    }

    /// Merge into `customizations.animation`
    pub fn set_user_animation(&mut self, patch: AnimationPatch) {
        let before = self.customizations.animation;
        patch.merge_into(&mut self.customizations.animation);
        self.mark_if_changed(before != self.customizations.animation);
    }

    /// Merge into `customizations.notifications`
    pub fn set_user_notifications(&mut self, patch: NotificationPatch) {
        patch.merge_into(&mut self.customizations.notifications);
    }

    // ========== Dirty Flags ==========

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }

    fn mark_if_changed(&mut self, changed: bool) {
        if changed {
            tracing::trace!("ThemeState: customizations changed, repaint requested");
            self.needs_repaint = true;
        }
    }
}
