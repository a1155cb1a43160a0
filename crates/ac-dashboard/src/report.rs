//! Serializable checklist snapshot
//!
//! Read-only copy of the store's derived state, grouped the way the Action
//! Center lays it out. Used for JSON output.

use ac_checklist::{allowed_statuses, ChecklistItem, ChecklistStore, Progress, Readiness};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSnapshot {
    pub id: String,
    pub attribute: String,
    pub status: String,
    pub verified: bool,
    pub locked: bool,
    pub automatic: bool,
    pub notes_required: bool,
    pub notes: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl From<&ChecklistItem> for ItemSnapshot {
    fn from(item: &ChecklistItem) -> Self {
        Self {
            id: item.id().to_string(),
            attribute: item.attribute().to_string(),
            status: item.current_status().to_string(),
            verified: item.is_verified(),
            locked: item.is_locked(),
            automatic: item.is_automatic(),
            notes_required: item.is_notes_required(),
            notes: item.notes().to_string(),
            options: allowed_statuses(item).into_iter().map(str::to_string).collect(),
            section: item.section_ref().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSnapshot {
    /// `None` for business-level items
    pub owner: Option<String>,
    pub progress: Progress,
    pub items: Vec<ItemSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSnapshot {
    pub progress: Progress,
    pub readiness: Readiness,
    pub all_approved: bool,
    pub missing_notes: Vec<String>,
    pub groups: Vec<GroupSnapshot>,
}

impl ChecklistSnapshot {
    #[must_use]
    pub fn capture(store: &ChecklistStore) -> Self {
        let grouped = store.group_by_owner();
        let mut groups = Vec::with_capacity(grouped.owners.len() + 1);
        if !grouped.unscoped.is_empty() {
            groups.push(GroupSnapshot {
                owner: None,
                progress: Progress::tally(grouped.unscoped.iter().copied()),
                items: grouped.unscoped.iter().map(|&i| i.into()).collect(),
            });
        }
        for (owner, items) in &grouped.owners {
            groups.push(GroupSnapshot {
                owner: Some((*owner).to_string()),
                progress: Progress::tally(items.iter().copied()),
                items: items.iter().map(|&i| i.into()).collect(),
            });
        }

        Self {
            progress: store.overall_progress(),
            readiness: store.readiness(),
            all_approved: store.all_approved(),
            missing_notes: store
                .missing_notes()
                .iter()
                .map(|i| i.id().to_string())
                .collect(),
            groups,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
