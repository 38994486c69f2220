//! Folio Core State
//!
//! The leaf state containers shared by every part of the site:
//!
//! - **Input State**: raw directional key flags written by input capture
//! - **Blog Navigation**: current document title/slug and its table of contents
//! - **Modal Coordination**: the single open modal and focus transfer into it
//!
//! None of these containers is global. They are owned by whoever composes
//! the application (see `folio_app`) and handed to collaborators explicitly.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ModalCoordinator, ModalName, ModalPhase};
//!
//! let mut modals = ModalCoordinator::new();
//! modals.open_modal(ModalName::Achievements);
//! modals.toggle_modal(false);
//! assert_eq!(modals.phase(), ModalPhase::Closed);
//!
//! // The selection survives the visibility toggle
//! modals.toggle_modal(true);
//! assert_eq!(modals.phase(), ModalPhase::Open(ModalName::Achievements));
//! ```

pub mod blog;
pub mod focus;
pub mod input;
pub mod modal;

pub use blog::{BlogNavState, TocItem};
pub use focus::FocusScope;
pub use input::{InputKey, InputState};
pub use modal::{ModalCoordinator, ModalName, ModalPhase};
