//! Toast store
//!
//! Insertion-ordered collection of live toasts. Every mutation that targets
//! a missing id is a silent no-op so that a manual dismissal and an expiry
//! timer can race freely.

use indexmap::IndexMap;

use crate::toast::{Toast, ToastId, ToastIdGenerator, ToastPatch};

#[derive(Clone, Debug, Default)]
pub struct ToastStore {
    toasts: IndexMap<ToastId, Toast>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast
    ///
    /// Content is never deduplicated. A toast whose id is already live is
    /// ignored; returns whether the toast was added.
    pub fn add_toast(&mut self, toast: Toast) -> bool {
        if self.toasts.contains_key(&toast.id) {
            tracing::warn!("ToastStore: id {:?} already live, ignoring", toast.id);
            return false;
        }
        tracing::debug!("ToastStore: add {:?} {:?}", toast.id, toast.content.title);
        self.toasts.insert(toast.id, toast);
        true
    }

    /// Issue an id from `ids` that is not live in this store
    pub fn issue_id(&self, ids: &ToastIdGenerator) -> ToastId {
        loop {
            let id = ids.next_id();
            if !self.toasts.contains_key(&id) {
                return id;
            }
            tracing::trace!("ToastStore: skipping live id {:?}", id);
        }
    }

    /// Remove a toast, keeping the order of the rest
    pub fn remove_toast(&mut self, id: ToastId) -> Option<Toast> {
        let removed = self.toasts.shift_remove(&id);
        if removed.is_some() {
            tracing::debug!("ToastStore: removed {:?}", id);
        }
        removed
    }

    /// Shallow-merge `patch` into the toast with `id`
    pub fn update_toast(&mut self, id: ToastId, patch: ToastPatch) -> bool {
        match self.toasts.get_mut(&id) {
            Some(toast) => {
                patch.merge_into(toast);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.contains_key(&id)
    }

    /// Toasts oldest first
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }

    /// Owned snapshot for renderers, oldest first
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
