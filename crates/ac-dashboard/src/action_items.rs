//! "Action Items Required" summary
//!
//! Each item links to a section of the Action Center. The UBO identity item
//! counts owners whose sub-checklist is still incomplete.

use crate::error::DashboardError;
use crate::navigation::SectionNavigator;
use ac_checklist::{ChecklistStore, SectionRef};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Users,
    FileText,
    Building,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    /// Stable action id, e.g. `verify-identity`
    pub action: &'static str,
    pub label: &'static str,
    pub detail: String,
    pub section: SectionRef,
    pub icon: ActionIcon,
}

/// Ordered action items for the current checklist state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItems {
    items: Vec<ActionItem>,
}

impl ActionItems {
    #[must_use]
    pub fn from_store(store: &ChecklistStore) -> Self {
        let pending = store.pending_owners().len();
        let items = vec![
            ActionItem {
                action: "verify-identity",
                label: "Verify UBO Identity Documents",
                detail: format!("{pending} pending"),
                section: SectionRef::new("applicant-info"),
                icon: ActionIcon::Users,
            },
            ActionItem {
                action: "review-financials",
                label: "Review Financial Statements",
                detail: "Q4 2024 missing".to_string(),
                section: SectionRef::new("financial-info"),
                icon: ActionIcon::FileText,
            },
            ActionItem {
                action: "compliance-check",
                label: "Complete Compliance Screening",
                detail: "AML pending".to_string(),
                section: SectionRef::new("compliance"),
                icon: ActionIcon::Building,
            },
        ];
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Badge count on the summary header
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, action: &str) -> Option<&ActionItem> {
        self.items.iter().find(|item| item.action == action)
    }

    /// An action button was clicked: log it and navigate to its section
    pub fn activate(
        &self,
        action: &str,
        navigator: &mut impl SectionNavigator,
    ) -> Result<&ActionItem, DashboardError> {
        let item = self
            .get(action)
            .ok_or_else(|| DashboardError::UnknownAction(action.to_string()))?;
        tracing::info!("Action clicked: {}", item.action);
        navigator.navigate(&item.section);
        Ok(item)
    }
}
