//! Action Center Dashboard
//!
//! Review-session state around the [`ac_checklist`] store: application header,
//! score indicators, tabs, action items, document previews and the
//! collapsible owner groups.
//!
//! # Architecture
//!
//! ```text
//! ReviewSession
//!   ├── ApplicationSummary ──► ScoreIndicator (tone, icon)
//!   ├── TabBar (Action Center + placeholder tabs)
//!   ├── ChecklistStore ──► ActionItems ──► SectionNavigator
//!   ├── DocumentSet / ApplicantProfile
//!   └── ViewState (hover, tooltip, expanded groups)
//! ```
//!
//! Rendering lives in [`render`] as `Display` views; [`ChecklistSnapshot`]
//! is the serializable form.
//!
//! # Example
//!
//! ```rust,ignore
//! use ac_dashboard::{render::SessionView, ReviewSession};
//!
//! let mut session = ReviewSession::sample()?;
//! session.set_status("ein", "Verified manually");
//! println!("{}", SessionView(&session));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod action_items;
mod applicant;
mod application;
mod documents;
mod error;
mod navigation;
mod report;
mod score;
mod session;
mod tabs;
mod view_state;

pub mod render;

pub use action_items::{ActionIcon, ActionItem, ActionItems};
pub use applicant::{ActivityRow, ApplicantProfile, Field, Volume};
pub use application::ApplicationSummary;
pub use documents::{Badge, DocumentCheck, DocumentSet, FormationDocument, HistoryEntry};
pub use error::DashboardError;
pub use navigation::{RecordingNavigator, SectionNavigator};
pub use report::{ChecklistSnapshot, GroupSnapshot, ItemSnapshot};
pub use score::{ScoreIcon, ScoreIndicator, ScoreKind, ScoreTone};
pub use session::{ReviewSession, SessionConfig};
pub use tabs::{Placeholder, TabBar, TabId};
pub use view_state::{GroupKey, ViewState};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a review session
    pub use crate::{
        ChecklistSnapshot, DashboardError, ReviewSession, SectionNavigator, SessionConfig, TabId,
    };
    pub use ac_checklist::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
