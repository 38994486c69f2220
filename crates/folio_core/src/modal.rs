//! Modal coordinator
//!
//! A two-state machine (`Closed`, `Open(name)`) built from two independent
//! pieces of state:
//!
//! - the visibility gate, toggled by close buttons and overlay clicks
//! - the selected modal, chosen by whoever opened it last
//!
//! Closing only drops the gate, so reopening without a name brings back the
//! last selected modal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::focus::{focus_first_content, FocusScope};

/// Identifiers of the singleton modals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalName {
    Customization,
    Achievements,
}

impl ModalName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalName::Customization => "customization",
            ModalName::Achievements => "achievements",
        }
    }
}

/// Observable phase of the coordinator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ModalPhase {
    Closed,
    Open(ModalName),
}

/// Owner of the single "current modal" slot
#[derive(Debug, Default)]
pub struct ModalCoordinator {
    visible: bool,
    selected: Option<ModalName>,
    /// Set when the phase enters `Open`, consumed by `apply_focus`
    pending_focus: bool,
    /// History of phase changes (for debugging and tests)
    history: SmallVec<[(ModalPhase, ModalPhase); 8]>,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase: `Open` only when the gate is up and a modal is selected
    pub fn phase(&self) -> ModalPhase {
        match (self.visible, self.selected) {
            (true, Some(name)) => ModalPhase::Open(name),
            _ => ModalPhase::Closed,
        }
    }

    /// The visibility gate
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The last selected modal, regardless of visibility
    pub fn modal_name(&self) -> Option<ModalName> {
        self.selected
    }

    /// Check whether `name` is the modal currently displayed
    pub fn is_open(&self, name: ModalName) -> bool {
        self.phase() == ModalPhase::Open(name)
    }

    /// Select `name` and raise the visibility gate
    pub fn open_modal(&mut self, name: ModalName) {
        self.apply(|this| {
            this.selected = Some(name);
            this.visible = true;
        });
    }

    /// Set the visibility gate without touching the selection
    pub fn toggle_modal(&mut self, open: bool) {
        self.apply(|this| this.visible = open);
    }

    /// Move focus into a freshly opened modal
    ///
    /// Called by the renderer once the modal's content exists. Focus moves
    /// at most once per entry into `Open`; returns whether it moved.
    pub fn apply_focus(&mut self, scope: &mut dyn FocusScope) -> bool {
        if !self.pending_focus || self.phase() == ModalPhase::Closed {
            return false;
        }
        self.pending_focus = false;
        focus_first_content(scope)
    }

    /// History of phase changes as `(from, to)` pairs
    pub fn history(&self) -> &[(ModalPhase, ModalPhase)] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut Self)) {
        let from = self.phase();
        mutate(self);
        let to = self.phase();
        if from == to {
            return;
        }

        tracing::debug!("ModalCoordinator: {:?} -> {:?}", from, to);
        self.history.push((from, to));
        // Entering Open (or switching modals while open) requests focus
        self.pending_focus = matches!(to, ModalPhase::Open(_));
    }
}
