//! Application header data

use serde::{Deserialize, Serialize};

/// Summary shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub business_name: String,
    pub business_structure: String,
    pub business_score: u8,
    pub risk_score: u8,
    pub submission_date: String,
    pub business_vertical: String,
    pub application_id: String,
}

impl ApplicationSummary {
    /// Sample application under review
    #[must_use]
    pub fn sample() -> Self {
        Self {
            business_name: "TechFlow Solutions LLC".to_string(),
            business_structure: "LLC".to_string(),
            business_score: 78,
            risk_score: 34,
            submission_date: "14 JUL 2025 (TODAY)".to_string(),
            business_vertical: "Technology Services".to_string(),
            application_id: "app_384b5g8t0djyer".to_string(),
        }
    }
}

impl Default for ApplicationSummary {
    fn default() -> Self {
        Self::sample()
    }
}
