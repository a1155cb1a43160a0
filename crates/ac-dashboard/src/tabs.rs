//! Tab bar
//!
//! Only the Action Center tab has content; the others are placeholders for
//! workflows that are not built yet.

use crate::error::DashboardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    #[default]
    ActionCenter,
    Rfi,
    Risk,
    BusinessOpportunity,
    Decisioning,
}

/// Heading and body of a tab that has no content yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub heading: &'static str,
    pub description: &'static str,
}

const PENDING_NOTE: &str = "Content to be populated in next iteration.";

impl TabId {
    /// Display order
    pub const ALL: [TabId; 5] = [
        TabId::ActionCenter,
        TabId::Rfi,
        TabId::Risk,
        TabId::BusinessOpportunity,
        TabId::Decisioning,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActionCenter => "action-center",
            Self::Rfi => "rfi",
            Self::Risk => "risk",
            Self::BusinessOpportunity => "business-opportunity",
            Self::Decisioning => "decisioning",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ActionCenter => "Action Center",
            Self::Rfi => "RFI",
            Self::Risk => "Risk",
            Self::BusinessOpportunity => "Business Opportunity",
            Self::Decisioning => "Decisioning",
        }
    }

    /// Placeholder content, `None` for the Action Center
    #[must_use]
    pub fn placeholder(self) -> Option<Placeholder> {
        let (heading, description) = match self {
            Self::ActionCenter => return None,
            Self::Rfi => (
                "Request for Information (RFI)",
                "RFI management and communication tools will be displayed here.",
            ),
            Self::Risk => (
                "Risk Assessment",
                "Risk analysis and scoring details will be displayed here.",
            ),
            Self::BusinessOpportunity => (
                "Business Opportunity",
                "Business opportunity analysis and scoring will be displayed here.",
            ),
            Self::Decisioning => (
                "Application Decisioning",
                "Final approval/rejection controls and decision tools will be displayed here.",
            ),
        };
        Some(Placeholder {
            heading,
            description,
        })
    }

    /// Footnote under every placeholder
    #[must_use]
    pub fn pending_note() -> &'static str {
        PENDING_NOTE
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}

/// Which tab is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabBar {
    active: TabId,
}

impl TabBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn select(&mut self, tab: TabId) {
        self.active = tab;
    }

    /// Select by id; an unknown id leaves the active tab unchanged
    pub fn select_id(&mut self, id: &str) -> Result<TabId, DashboardError> {
        let tab = id.parse()?;
        self.select(tab);
        Ok(tab)
    }

    /// Tabs in display order with their active flag
    pub fn tabs(&self) -> impl Iterator<Item = (TabId, bool)> + '_ {
        TabId::ALL.into_iter().map(move |tab| (tab, tab == self.active))
    }
}
