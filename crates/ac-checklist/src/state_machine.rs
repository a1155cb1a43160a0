//! Transition policy
//!
//! Decides whether a checklist item may move from its current status to a
//! proposed one. Pure: nothing here mutates the item.
//!
//! Gates, all of which must pass:
//! 1. the proposed status is in the item's taxonomy;
//! 2. re-selecting the current status is always allowed;
//! 3. a locked current status cannot be left;
//! 4. automatic and manual statuses never replace each other.

use crate::error::TransitionError;
use crate::item::ChecklistItem;

/// Validates a status transition on `item`.
pub fn validate_transition(item: &ChecklistItem, proposed: &str) -> Result<(), TransitionError> {
    let taxonomy = item.taxonomy();
    let Some(target) = taxonomy.get(proposed) else {
        return Err(TransitionError::UnknownStatus {
            status: proposed.to_string(),
        });
    };

    let current_status = item.current_status();
    if proposed == current_status {
        return Ok(());
    }

    let Some(current) = taxonomy.get(current_status) else {
        // Unreachable through the store; treat an out-of-taxonomy status as
        // unknown rather than guessing its class.
        return Err(TransitionError::UnknownStatus {
            status: current_status.to_string(),
        });
    };

    if current.locked {
        return Err(TransitionError::Locked {
            current: current_status.to_string(),
        });
    }

    if current.class != target.class {
        return Err(TransitionError::ClassMismatch {
            current: current_status.to_string(),
            proposed: proposed.to_string(),
            from: current.class,
            to: target.class,
        });
    }

    Ok(())
}

/// Boolean form of [`validate_transition`]
#[inline]
#[must_use]
pub fn can_transition(item: &ChecklistItem, proposed: &str) -> bool {
    validate_transition(item, proposed).is_ok()
}

/// Statuses the policy accepts from the item's current status, in taxonomy
/// order. Always includes the current status.
///
/// This is the closed option list a selection control should offer.
#[must_use]
pub fn allowed_statuses(item: &ChecklistItem) -> Vec<&str> {
    item.taxonomy()
        .statuses()
        .filter(|status| can_transition(item, status))
        .collect()
}
