//! Action Center Checklist
//!
//! Manual-review checklist for a business-account application.
//!
//! # Core Concepts
//!
//! - [`Taxonomy`]: ordered status table per item (`status -> StatusSpec`)
//! - [`ChecklistItem`]: one verification requirement, optionally scoped to a
//!   beneficial owner
//! - [`state_machine`]: the transition policy (taxonomy membership, locked
//!   statuses, automatic/manual class lock)
//! - [`ChecklistStore`]: session-owned items with status/notes writes and
//!   derived progress queries
//! - [`ChecklistDefinition`]: declarative seed, loadable from YAML, TOML or JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use ac_checklist::ChecklistStore;
//!
//! let mut store = ChecklistStore::sample()?;
//! store.set_status("selfie-verification-bruce", "Persona – manual");
//! assert!(store.get("selfie-verification-bruce").unwrap().is_notes_required());
//! println!("{:?}", store.overall_progress());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod definition;
mod error;
mod item;
mod sample;
mod store;
mod taxonomy;

pub mod state_machine;

pub use definition::{ChecklistDefinition, ItemDefinition, StatusDefinition};
pub use error::{ChecklistError, DefinitionError, TransitionError};
pub use item::{ChecklistItem, ItemId, SectionRef};
pub use sample::{AUTOMATIC_SOURCES, SAMPLE_OWNERS};
pub use state_machine::{allowed_statuses, can_transition, validate_transition};
pub use store::{ChecklistStore, OwnerGroups, Progress, Readiness, StatusChange};
pub use taxonomy::{Outcome, StatusClass, StatusSpec, Taxonomy};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the checklist
    pub use crate::{
        ChecklistDefinition, ChecklistError, ChecklistItem, ChecklistStore, Progress, Readiness,
        StatusClass,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
