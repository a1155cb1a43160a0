//! Formation document and its upload history
//!
//! Document storage and PDF rendering live elsewhere; this is the metadata the
//! dashboard shows next to each preview thumbnail.

use crate::error::DashboardError;
use serde::Serialize;

/// Result badge shown for a document check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Verified,
    Maybe,
    Unverified,
    NotVerified,
}

impl Badge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Maybe => "Maybe",
            Self::Unverified => "Unverified",
            Self::NotVerified => "Not Verified",
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Self::Verified
    }
}

/// One check on a document, with the tooltip explaining it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCheck {
    pub badge: Badge,
    pub tooltip_id: Option<&'static str>,
    pub tooltip: Option<&'static str>,
}

impl DocumentCheck {
    fn plain(badge: Badge) -> Self {
        Self {
            badge,
            tooltip_id: None,
            tooltip: None,
        }
    }

    fn explained(badge: Badge, tooltip_id: &'static str, tooltip: &'static str) -> Self {
        Self {
            badge,
            tooltip_id: Some(tooltip_id),
            tooltip: Some(tooltip),
        }
    }
}

/// Current formation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationDocument {
    pub preview_id: &'static str,
    pub file_name: &'static str,
    pub title: &'static str,
    pub business_name: DocumentCheck,
    pub legitimacy: DocumentCheck,
    pub assessment: &'static str,
    pub uploaded_at: &'static str,
    pub uploaded_by: &'static str,
}

/// Earlier upload of the same document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub preview_id: &'static str,
    pub upload_date: &'static str,
    pub business_name: DocumentCheck,
    pub legitimacy: DocumentCheck,
    pub uploaded_by: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSet {
    pub current: FormationDocument,
    pub history: Vec<HistoryEntry>,
}

impl DocumentSet {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            current: FormationDocument {
                preview_id: "main",
                file_name: "Certificate_of_Formation_TechFlow_LLC.pdf",
                title: "Certificate of Formation",
                business_name: DocumentCheck::plain(Badge::Verified),
                legitimacy: DocumentCheck::plain(Badge::Verified),
                assessment: "Document appears authentic with proper state seals, signatures, \
                    and formatting. All required fields are complete and consistent with \
                    Delaware formation requirements.",
                uploaded_at: "July 12, 2025 at 2:34 PM",
                uploaded_by: "Bruce Wayne",
            },
            history: vec![
                HistoryEntry {
                    preview_id: "history-1",
                    upload_date: "July 10, 2025",
                    business_name: DocumentCheck::explained(
                        Badge::Maybe,
                        "business-maybe",
                        "Business name partially matches",
                    ),
                    legitimacy: DocumentCheck::explained(
                        Badge::Verified,
                        "legitimacy-verified",
                        "Document appears authentic",
                    ),
                    uploaded_by: "Clark Kent",
                },
                HistoryEntry {
                    preview_id: "history-2",
                    upload_date: "July 8, 2025",
                    business_name: DocumentCheck::explained(
                        Badge::Unverified,
                        "business-unverified",
                        "Business name does not match",
                    ),
                    legitimacy: DocumentCheck::explained(
                        Badge::NotVerified,
                        "legitimacy-unverified",
                        "Document could not be authenticated",
                    ),
                    uploaded_by: "Admin",
                },
            ],
        }
    }

    /// Every preview id, current document first
    pub fn preview_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.current.preview_id).chain(self.history.iter().map(|h| h.preview_id))
    }

    /// Tooltip text for a tooltip id
    #[must_use]
    pub fn tooltip(&self, tooltip_id: &str) -> Option<&'static str> {
        let current = [&self.current.business_name, &self.current.legitimacy];
        current
            .into_iter()
            .chain(self.history.iter().flat_map(|h| [&h.business_name, &h.legitimacy]))
            .find(|check| check.tooltip_id == Some(tooltip_id))
            .and_then(|check| check.tooltip)
    }

    /// History row by preview id
    pub fn history_entry(&self, preview_id: &str) -> Result<&HistoryEntry, DashboardError> {
        self.history
            .iter()
            .find(|h| h.preview_id == preview_id)
            .ok_or_else(|| DashboardError::UnknownDocument(preview_id.to_string()))
    }

    /// A history row was clicked
    pub fn open_history_entry(&self, preview_id: &str) -> Result<&HistoryEntry, DashboardError> {
        let entry = self.history_entry(preview_id)?;
        tracing::info!(
            document = preview_id,
            uploaded = entry.upload_date,
            "View document details"
        );
        Ok(entry)
    }
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::sample()
    }
}
