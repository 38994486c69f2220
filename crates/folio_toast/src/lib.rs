//! Folio Toast Notifications
//!
//! Ephemeral notifications shown in the corner of the site.
//!
//! # Features
//!
//! - **Ordered store**: toasts render oldest first, in insertion order
//! - **Explicit identity**: ids come from a monotonic generator, never the clock
//! - **Expiry scheduling**: one pending timer per toast, cancellable as a whole
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use folio_toast::{
//!     ExpiryScheduler, Toast, ToastContent, ToastIdGenerator, ToastKind, ToastStore,
//! };
//!
//! let ids = ToastIdGenerator::new();
//! let mut store = ToastStore::new();
//! let mut expiry = ExpiryScheduler::default();
//!
//! let content = ToastContent::new("Saved", "Preferences updated");
//! store.add_toast(Toast::new(ids.next_id(), content, ToastKind::General, 0));
//!
//! let start = Instant::now();
//! expiry.sync(&store, start);
//! expiry.tick(&mut store, start + Duration::from_secs(3));
//! assert!(store.is_empty());
//! ```

pub mod scheduler;
pub mod store;
pub mod toast;

pub use scheduler::{ExpiryScheduler, TimerId, TOAST_DURATION};
pub use store::ToastStore;
pub use toast::{
    IconId, Toast, ToastContent, ToastId, ToastIdGenerator, ToastKind, ToastPatch, ToastStatus,
};
