//! The composed application state
//!
//! `FolioApp` owns one instance of every store. UI collaborators call the
//! methods here instead of mutating stores directly so that cross-store
//! effects (unlock toasts, toast click routing, modal meta achievements)
//! always happen.

use std::time::{Duration, Instant};

use folio_achievements::{AchievementRecord, AchievementTracker, ActivityGuard, ActivityKind};
use folio_core::{
    BlogNavState, FocusScope, InputKey, InputState, ModalCoordinator, ModalName, ModalPhase,
    TocItem,
};
use folio_theme::{
    AnimationPatch, Customizations, ListenerId, MediaChange, MediaListeners, MediaQuery,
    MediaSource, NotificationPatch, ThemeOption, ThemePatch, ThemeState,
};
use folio_toast::{
    ExpiryScheduler, Toast, ToastContent, ToastId, ToastIdGenerator, ToastKind, ToastPatch,
    ToastStore, TOAST_DURATION,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::context::{Clock, DirtyFlag, SharedApp, SystemClock};

/// Startup settings
#[derive(Clone, Debug)]
pub struct AppSettings {
    /// Visible lifetime of each toast
    pub toast_duration: Duration,
    /// Theme used until a device preference or the user says otherwise
    pub initial_theme: ThemeOption,
    pub customizations: Customizations,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            toast_duration: TOAST_DURATION,
            initial_theme: ThemeOption::default(),
            customizations: Customizations::default(),
        }
    }
}

/// Serializable view of the whole app, for debugging and tooling
#[derive(Debug, Serialize)]
pub struct AppSnapshot<'a> {
    pub theme: ThemeOption,
    pub customizations: &'a Customizations,
    pub modal: ModalPhase,
    pub modal_visible: bool,
    pub blog: &'a BlogNavState,
    pub toasts: Vec<Toast>,
    pub achievements: &'a AchievementTracker,
}

pub struct FolioApp {
    input: InputState,
    blog: BlogNavState,
    modals: ModalCoordinator,
    theme: ThemeState,
    media: MediaListeners,
    media_listeners: SmallVec<[ListenerId; 2]>,
    toasts: ToastStore,
    toast_ids: ToastIdGenerator,
    expiry: ExpiryScheduler,
    achievements: AchievementTracker,
    dirty: DirtyFlag,
    clock: Box<dyn Clock>,
    mounted: bool,
}

impl FolioApp {
    pub fn new(settings: AppSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }

    pub fn with_clock(settings: AppSettings, clock: impl Clock + 'static) -> Self {
        let mut achievements = AchievementTracker::new();
        achievements.set_notifications_enabled(settings.customizations.notifications.achievements);

        Self {
            input: InputState::new(),
            blog: BlogNavState::new(),
            modals: ModalCoordinator::new(),
            theme: ThemeState::with_customizations(settings.initial_theme, settings.customizations),
            media: MediaListeners::new(),
            media_listeners: SmallVec::new(),
            toasts: ToastStore::new(),
            toast_ids: ToastIdGenerator::new(),
            expiry: ExpiryScheduler::new(settings.toast_duration),
            achievements,
            dirty: DirtyFlag::new(),
            clock: Box::new(clock),
            mounted: false,
        }
    }

    /// Wrap in a lock for hosts that touch the app from several threads
    pub fn into_shared(self) -> SharedApp {
        std::sync::Arc::new(std::sync::Mutex::new(self))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to the host environment
    ///
    /// Registers the color-scheme and reduced-motion listeners and applies
    /// the current device preferences once, so the initial state is honored
    /// and not just later changes.
    pub fn mount(&mut self, source: &dyn MediaSource) {
        if self.mounted {
            tracing::warn!("FolioApp::mount called while already mounted");
            return;
        }
        for query in MediaQuery::ALL {
            let id = self.media.register(query);
            self.media_listeners.push(id);
        }
        for change in source.snapshot() {
            self.media.dispatch(change, &mut self.theme);
        }
        self.expiry.restart();
        self.mounted = true;
        self.dirty.request_rebuild();
        tracing::debug!("FolioApp mounted with theme {:?}", self.theme.theme());
    }

    /// Detach from the host environment
    ///
    /// Unregisters every listener registered by `mount` and cancels all
    /// pending toast timers.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for id in self.media_listeners.drain(..) {
            self.media.unregister(id);
        }
        self.expiry.shutdown();
        self.mounted = false;
        tracing::debug!("FolioApp unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Deliver a device preference change
    pub fn handle_media_change(&mut self, change: MediaChange) -> bool {
        let delivered = self.media.dispatch(change, &mut self.theme);
        if delivered {
            self.dirty.request_rebuild();
        }
        delivered
    }

    /// Advance timers
    ///
    /// Starts expiry timers for toasts added since the last tick, then fires
    /// the ones that are due. Returns the expired toast ids.
    pub fn tick(&mut self, now: Instant) -> SmallVec<[ToastId; 4]> {
        self.expiry.sync(&self.toasts, now);
        let expired = self.expiry.tick(&mut self.toasts, now);
        if !expired.is_empty() {
            self.dirty.request_rebuild();
        }
        expired
    }

    /// Earliest moment `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.expiry.next_deadline()
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn set_input(&mut self, key: InputKey, pressed: bool) {
        self.input.set_input(key, pressed);
    }

    // =========================================================================
    // Blog Navigation
    // =========================================================================

    /// Reset the table of contents and switch to a new document
    pub fn begin_document(&mut self, title: &str, slug: &str) {
        self.blog.begin_document(title, slug);
        self.dirty.request_rebuild();
    }

    pub fn add_toc_item(&mut self, item: TocItem) -> bool {
        let added = self.blog.add_toc_item(item);
        if added {
            self.dirty.request_rebuild();
        }
        added
    }

    /// Document view went away
    pub fn end_document(&mut self) {
        self.blog.reset_table_of_contents();
        self.dirty.request_rebuild();
    }

    /// Count a blog post view, once per page instance
    pub fn record_blog_read(&mut self, page: &mut ActivityGuard) -> Option<AchievementRecord> {
        if !page.claim() {
            return None;
        }
        self.record_activity(ActivityKind::BlogRead)
    }

    /// Count one activity; see [`AchievementTracker::record_activity`]
    pub fn record_activity(&mut self, kind: ActivityKind) -> Option<AchievementRecord> {
        let now_ms = self.clock.now_ms();
        let record = self
            .achievements
            .record_activity(kind, now_ms, &mut self.toasts, &self.toast_ids);
        if record.is_some() {
            self.dirty.request_rebuild();
        }
        record
    }

    // =========================================================================
    // Modals
    // =========================================================================

    /// Select and show a modal
    ///
    /// Opening a modal also counts as activity for the meta achievements.
    pub fn open_modal(&mut self, name: ModalName) {
        self.modals.open_modal(name);
        self.dirty.request_rebuild();
        let activity = match name {
            ModalName::Customization => ActivityKind::CustomizationOpened,
            ModalName::Achievements => ActivityKind::AchievementsOpened,
        };
        self.record_activity(activity);
    }

    /// Show or hide the last selected modal
    pub fn toggle_modal(&mut self, open: bool) {
        self.modals.toggle_modal(open);
        self.dirty.request_rebuild();
    }

    /// Move focus into a freshly opened modal
    pub fn apply_modal_focus(&mut self, scope: &mut dyn FocusScope) -> bool {
        self.modals.apply_focus(scope)
    }

    // =========================================================================
    // Theme & Customizations
    // =========================================================================

    pub fn set_theme(&mut self, theme: ThemeOption) {
        self.theme.set_theme(theme);
        self.dirty.request_rebuild();
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
        self.dirty.request_rebuild();
    }

    /// Merge into the theme customizations
    ///
    /// A `modal` field in the patch drives the modal visibility gate.
    pub fn set_user_theme(&mut self, patch: ThemePatch) {
        self.theme.set_user_theme(patch);
        if let Some(open) = patch.modal {
            self.modals.toggle_modal(open);
        }
        self.dirty.request_rebuild();
    }

    pub fn set_user_animation(&mut self, patch: AnimationPatch) {
        self.theme.set_user_animation(patch);
        self.dirty.request_rebuild();
    }

    pub fn set_user_notifications(&mut self, patch: NotificationPatch) {
        self.theme.set_user_notifications(patch);
        self.achievements
            .set_notifications_enabled(self.theme.customizations().notifications.achievements);
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Show a toast built by the caller
    ///
    /// Generated ids skip past the caller's id from here on.
    pub fn add_toast(&mut self, toast: Toast) -> bool {
        self.toast_ids.observe(toast.id);
        let added = self.toasts.add_toast(toast);
        if added {
            self.dirty.request_rebuild();
        }
        added
    }

    /// Build a toast with a fresh id and the current time, and show it
    pub fn notify(&mut self, content: ToastContent, kind: ToastKind) -> ToastId {
        let id = self.toasts.issue_id(&self.toast_ids);
        let toast = Toast::new(id, content, kind, self.clock.now_ms());
        self.add_toast(toast);
        id
    }

    /// Dismiss a toast; the pending timer is dropped with it
    pub fn remove_toast(&mut self, id: ToastId) -> Option<Toast> {
        self.expiry.cancel(id);
        let removed = self.toasts.remove_toast(id);
        if removed.is_some() {
            self.dirty.request_rebuild();
        }
        removed
    }

    pub fn update_toast(&mut self, id: ToastId, patch: ToastPatch) -> bool {
        let updated = self.toasts.update_toast(id, patch);
        if updated {
            self.dirty.request_rebuild();
        }
        updated
    }

    /// Route a toast click
    ///
    /// Achievement toasts open the achievements modal; other kinds do
    /// nothing. Returns the modal opened, if any.
    pub fn click_toast(&mut self, id: ToastId) -> Option<ModalName> {
        let target = self.toasts.get(id)?.kind.click_target()?;
        self.open_modal(target);
        Some(target)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn blog(&self) -> &BlogNavState {
        &self.blog
    }

    pub fn modals(&self) -> &ModalCoordinator {
        &self.modals
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn media_listeners(&self) -> &MediaListeners {
        &self.media
    }

    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    pub fn expiry(&self) -> &ExpiryScheduler {
        &self.expiry
    }

    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    /// Flag shared with the renderer
    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty
    }

    pub fn snapshot(&self) -> AppSnapshot<'_> {
        AppSnapshot {
            theme: self.theme.theme(),
            customizations: self.theme.customizations(),
            modal: self.modals.phase(),
            modal_visible: self.modals.is_visible(),
            blog: &self.blog,
            toasts: self.toasts.snapshot(),
            achievements: &self.achievements,
        }
    }

    /// Snapshot rendered as pretty JSON
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.unmount();
    }
}
