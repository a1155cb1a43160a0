//! Error types for the checklist core
//!
//! - Rejected status transitions (which policy gate refused the change)
//! - Writes addressed to items that do not exist
//! - Invalid or unreadable checklist definitions

use crate::taxonomy::StatusClass;
use std::path::PathBuf;

/// Main checklist error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// No item with this id was seeded
    #[error("unknown checklist item: {0}")]
    UnknownItem(String),

    /// The transition policy refused the status change
    #[error("illegal transition on {item}: {source}")]
    IllegalTransition {
        /// Item the change was addressed to
        item: String,
        /// Gate that rejected it
        #[source]
        source: TransitionError,
    },
}

impl ChecklistError {
    /// Both variants leave the collection untouched, so a caller can always
    /// carry on with the session.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Whether the error came from the transition policy
    #[inline]
    #[must_use]
    pub fn is_policy_rejection(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}

/// Reasons the transition policy rejects a proposed status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Proposed status is not part of the item's taxonomy
    #[error("status {status:?} is not in the item's taxonomy")]
    UnknownStatus { status: String },

    /// Current status is non-modifiable
    #[error("status {current:?} is locked")]
    Locked { current: String },

    /// Automatic and manual statuses cannot replace each other
    #[error("cannot move from {from} status {current:?} to {to} status {proposed:?}")]
    ClassMismatch {
        current: String,
        proposed: String,
        from: StatusClass,
        to: StatusClass,
    },
}

/// Checklist definition errors
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// Definition file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("unsupported definition format: {0}")]
    UnsupportedFormat(String),

    /// Document failed to parse
    #[error("invalid {format} definition: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Item id is blank
    #[error("item #{index} has an empty id")]
    EmptyId { index: usize },

    /// Item id appears twice
    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    /// Attribute label is blank
    #[error("item {0} has an empty attribute")]
    EmptyAttribute(String),

    /// Owner name given but blank
    #[error("item {0} has an empty owner name")]
    EmptyOwner(String),

    /// No statuses declared
    #[error("item {0} declares no statuses")]
    EmptyTaxonomy(String),

    /// Status listed more than once, which would put it in both partitions
    #[error("item {item} lists status {status:?} more than once")]
    DuplicateStatus { item: String, status: String },

    /// Status label is blank
    #[error("item {0} declares an empty status label")]
    EmptyStatus(String),

    /// There must be an unverified status to start from
    #[error("item {0} has no unverified status to use as baseline")]
    NoBaseline(String),

    /// Explicit initial status is not part of the taxonomy
    #[error("item {item} starts at {status:?}, which is not in its taxonomy")]
    UnknownInitialStatus { item: String, status: String },
}

impl DefinitionError {
    /// Whether the document was readable but semantically invalid
    #[inline]
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        !matches!(
            self,
            Self::Io { .. } | Self::UnsupportedFormat(_) | Self::Parse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_errors_are_recoverable() {
        let unknown = ChecklistError::UnknownItem("missing".to_string());
        assert!(unknown.is_recoverable());
        assert!(!unknown.is_policy_rejection());

        let rejected = ChecklistError::IllegalTransition {
            item: "formation-doc".to_string(),
            source: TransitionError::Locked {
                current: "Automatically".to_string(),
            },
        };
        assert!(rejected.is_recoverable());
        assert!(rejected.is_policy_rejection());
    }

    #[test]
    fn class_mismatch_message_names_both_classes() {
        let err = TransitionError::ClassMismatch {
            current: "Not verified".to_string(),
            proposed: "Middesk".to_string(),
            from: StatusClass::Manual,
            to: StatusClass::Automatic,
        };
        assert_eq!(
            err.to_string(),
            "cannot move from manual status \"Not verified\" to automatic status \"Middesk\""
        );
    }

    #[test]
    fn definition_error_classification() {
        assert!(!DefinitionError::UnsupportedFormat("ini".to_string()).is_validation_error());
        assert!(DefinitionError::DuplicateId("ein".to_string()).is_validation_error());
    }
}
