//! Device preference listeners
//!
//! Mirrors the browser's `matchMedia` listeners for `prefers-color-scheme`
//! and `prefers-reduced-motion`. The host registers one listener per query
//! at mount and must unregister each of them at teardown; changes arriving
//! for a query nobody listens to are dropped.

use slotmap::{new_key_type, SlotMap};

use crate::customization::AnimationPatch;
use crate::state::{ThemeOption, ThemeState};

new_key_type! {
    /// Handle returned by [`MediaListeners::register`]
    pub struct ListenerId;
}

/// Media queries the site listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    /// `prefers-color-scheme: dark`
    ColorScheme,
    /// `prefers-reduced-motion: reduce`
    ReducedMotion,
}

impl MediaQuery {
    pub const ALL: [MediaQuery; 2] = [MediaQuery::ColorScheme, MediaQuery::ReducedMotion];

    pub fn as_css(&self) -> &'static str {
        match self {
            MediaQuery::ColorScheme => "(prefers-color-scheme: dark)",
            MediaQuery::ReducedMotion => "(prefers-reduced-motion: reduce)",
        }
    }
}

/// A new value reported for one media query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaChange {
    ColorScheme(ThemeOption),
    ReducedMotion(bool),
}

impl MediaChange {
    pub fn query(&self) -> MediaQuery {
        match self {
            MediaChange::ColorScheme(_) => MediaQuery::ColorScheme,
            MediaChange::ReducedMotion(_) => MediaQuery::ReducedMotion,
        }
    }

    /// Write the change into theme state
    ///
    /// Reduced motion disables animation; a scheme change replaces the
    /// active theme even if the user picked one manually.
    pub fn apply_to(self, state: &mut ThemeState) {
        match self {
            MediaChange::ColorScheme(theme) => state.set_theme(theme),
            MediaChange::ReducedMotion(reduce) => state.set_user_animation(AnimationPatch {
                active: Some(!reduce),
            }),
        }
    }
}

/// Source of the current device preferences
pub trait MediaSource {
    fn prefers_dark(&self) -> bool;

    fn prefers_reduced_motion(&self) -> bool;

    /// Current values of every query, as changes ready to apply
    fn snapshot(&self) -> [MediaChange; 2] {
        let scheme = if self.prefers_dark() {
            ThemeOption::Dark
        } else {
            ThemeOption::Light
        };
        [
            MediaChange::ColorScheme(scheme),
            MediaChange::ReducedMotion(self.prefers_reduced_motion()),
        ]
    }
}

/// Fixed preferences (headless hosts and tests)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticMedia {
    pub dark: bool,
    pub reduced_motion: bool,
}

impl MediaSource for StaticMedia {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Registered media-query listeners
#[derive(Debug, Default)]
pub struct MediaListeners {
    listeners: SlotMap<ListenerId, MediaQuery>,
}

impl MediaListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, query: MediaQuery) -> ListenerId {
        tracing::debug!("MediaListeners: listening to {}", query.as_css());
        self.listeners.insert(query)
    }

    /// Remove a listener; returns `false` if it was already gone
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        match self.listeners.remove(id) {
            Some(query) => {
                tracing::debug!("MediaListeners: stopped listening to {}", query.as_css());
                true
            }
            None => false,
        }
    }

    pub fn is_listening(&self, query: MediaQuery) -> bool {
        self.listeners.values().any(|q| *q == query)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Apply `change` if a listener for its query is registered
    ///
    /// Returns whether the change was delivered.
    pub fn dispatch(&self, change: MediaChange, state: &mut ThemeState) -> bool {
        if !self.is_listening(change.query()) {
            tracing::warn!(
                "MediaListeners: dropping {:?}, no listener for {}",
                change,
                change.query().as_css()
            );
            return false;
        }
        change.apply_to(state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_unregister_one_to_one() {
        let mut listeners = MediaListeners::new();
        let scheme = listeners.register(MediaQuery::ColorScheme);
        let motion = listeners.register(MediaQuery::ReducedMotion);
        assert_eq!(listeners.len(), 2);

        assert!(listeners.unregister(scheme));
        assert!(!listeners.unregister(scheme));
        assert!(!listeners.is_listening(MediaQuery::ColorScheme));
        assert!(listeners.is_listening(MediaQuery::ReducedMotion));

        assert!(listeners.unregister(motion));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_reduced_motion_disables_animation() {
        let mut listeners = MediaListeners::new();
        listeners.register(MediaQuery::ReducedMotion);
        let mut state = ThemeState::new(ThemeOption::Dark);

        assert!(listeners.dispatch(MediaChange::ReducedMotion(true), &mut state));
        assert!(!state.customizations().animation.active);

        assert!(listeners.dispatch(MediaChange::ReducedMotion(false), &mut state));
        assert!(state.customizations().animation.active);
    }

    #[test]
    fn test_device_scheme_overrides_manual_choice() {
        let mut listeners = MediaListeners::new();
        listeners.register(MediaQuery::ColorScheme);
        let mut state = ThemeState::new(ThemeOption::Dark);

        state.set_theme(ThemeOption::Light);
        listeners.dispatch(MediaChange::ColorScheme(ThemeOption::Dark), &mut state);
        assert_eq!(state.theme(), ThemeOption::Dark);
    }

    #[test]
    fn test_change_without_listener_is_dropped() {
        let listeners = MediaListeners::new();
        let mut state = ThemeState::new(ThemeOption::Dark);

        assert!(!listeners.dispatch(MediaChange::ColorScheme(ThemeOption::Light), &mut state));
        assert_eq!(state.theme(), ThemeOption::Dark);
    }

    #[test]
    fn test_static_snapshot() {
        let media = StaticMedia {
            dark: false,
            reduced_motion: true,
        };
        assert_eq!(
            media.snapshot(),
            [
                MediaChange::ColorScheme(ThemeOption::Light),
                MediaChange::ReducedMotion(true)
            ]
        );
    }
}
