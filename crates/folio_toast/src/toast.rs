//! Toast records

use std::sync::atomic::{AtomicU64, Ordering};

use folio_core::ModalName;
use serde::{Deserialize, Serialize};

/// Identity of a toast within the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    /// Wrap an identifier issued elsewhere
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Monotonic toast id source
///
/// Two toasts created in the same millisecond still get distinct ids.
#[derive(Debug)]
pub struct ToastIdGenerator {
    next: AtomicU64,
}

impl ToastIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> ToastId {
        ToastId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Move past an id that was chosen outside this generator
    pub fn observe(&self, id: ToastId) {
        self.next.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for ToastIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Icons a toast can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Info,
    Trophy,
    Book,
    Books,
    Palette,
    Eye,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastContent {
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconId>,
}

impl ToastContent {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Visibility status used by enter/exit transitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastStatus {
    #[default]
    Show,
    Hide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    General,
    Achievement,
}

impl ToastKind {
    /// Modal opened when a toast of this kind is clicked
    pub fn click_target(&self) -> Option<ModalName> {
        match self {
            ToastKind::General => None,
            ToastKind::Achievement => Some(ModalName::Achievements),
        }
    }
}

/// A notification record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    /// Creation time in unix milliseconds
    pub created_at_ms: u64,
    pub content: ToastContent,
    pub status: ToastStatus,
    pub kind: ToastKind,
}

impl Toast {
    /// Create a visible toast
    pub fn new(id: ToastId, content: ToastContent, kind: ToastKind, created_at_ms: u64) -> Self {
        Self {
            id,
            created_at_ms,
            content,
            status: ToastStatus::Show,
            kind,
        }
    }
}

/// Partial update for a stored toast
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastPatch {
    pub content: Option<ToastContent>,
    pub status: Option<ToastStatus>,
    pub kind: Option<ToastKind>,
}

impl ToastPatch {
    pub fn status(status: ToastStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub(crate) fn merge_into(self, toast: &mut Toast) {
        if let Some(content) = self.content {
            toast.content = content;
        }
        if let Some(status) = self.status {
            toast.status = status;
        }
        if let Some(kind) = self.kind {
            toast.kind = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_monotonic() {
        let ids = ToastIdGenerator::starting_at(1000);
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a, ToastId::from_raw(1000));
        assert!(b > a);
    }

    #[test]
    fn test_observe_skips_external_ids() {
        let ids = ToastIdGenerator::new();
        ids.observe(ToastId::from_raw(1));
        assert_eq!(ids.next_id(), ToastId::from_raw(2));

        // Lower ids never move the generator back
        ids.observe(ToastId::from_raw(1));
        assert_eq!(ids.next_id(), ToastId::from_raw(3));
    }

    #[test]
    fn test_click_targets() {
        assert_eq!(ToastKind::General.click_target(), None);
        assert_eq!(
            ToastKind::Achievement.click_target(),
            Some(ModalName::Achievements)
        );
    }

    #[test]
    fn test_serialized_shape() {
        let toast = Toast::new(
            ToastId::from_raw(7),
            ToastContent::new("Hi", "there").with_icon(IconId::Trophy),
            ToastKind::Achievement,
            1_700_000_000_000,
        );
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "show");
        assert_eq!(json["kind"], "achievement");
        assert_eq!(json["content"]["icon"], "trophy");
    }
}
