//! Error types for the dashboard model

use ac_checklist::{ChecklistError, DefinitionError};

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Tab id not in the tab bar
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// Action id not in the action items summary
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Preview id not attached to any document
    #[error("unknown document preview: {0}")]
    UnknownDocument(String),

    /// Checklist write failed
    #[error("checklist error: {0}")]
    Checklist(#[from] ChecklistError),

    /// Checklist definition could not be seeded
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),
}

impl DashboardError {
    /// Lookup misses and rejected checklist writes leave the session usable;
    /// a bad definition means there is no session.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Definition(_))
    }
}
