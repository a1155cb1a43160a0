//! Applicant information: entity details, questionnaire answers and expected
//! account activity.

use serde::Serialize;

/// Labelled value in a details grid. `None` renders as "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: Option<&'static str>,
}

impl Field {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value: Some(value),
        }
    }

    const fn missing(label: &'static str) -> Self {
        Self { label, value: None }
    }

    #[must_use]
    pub fn display_value(&self) -> &'static str {
        self.value.unwrap_or("N/A")
    }
}

/// Expected volume on one payment rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Volume {
    pub transactions: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRow {
    pub rail: &'static str,
    pub incoming: Option<Volume>,
    pub outgoing: Option<Volume>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantProfile {
    pub entity_details: Vec<Field>,
    pub website: &'static str,
    /// Long-form questionnaire answers
    pub questionnaire: Vec<Field>,
    /// Short questionnaire answers
    pub facts: Vec<Field>,
    pub account_uses: Vec<&'static str>,
    pub activity: Vec<ActivityRow>,
}

const fn volume(transactions: &'static str, amount: &'static str) -> Option<Volume> {
    Some(Volume {
        transactions,
        amount,
    })
}

impl ApplicantProfile {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            entity_details: vec![
                Field::new("Legal Name", "TechFlow Solutions LLC"),
                Field::new("Industry", "Technology Services"),
                Field::new("Business Phone", "(555) 123-4567"),
                Field::new("EIN", "12-3456789"),
                Field::new("Website", "techflowsolutions.com"),
                Field::new("Date of Formation", "March 15, 2019"),
                Field::new("Incorporation State", "Delaware"),
                Field::new("Secretary of State Status", "Active"),
                Field::new("Team Size", "47 employees"),
                Field::missing("DBA Name"),
            ],
            website: "https://techflowsolutions.com",
            questionnaire: vec![
                Field::new(
                    "Please tell us what your business does",
                    "TechFlow Solutions provides enterprise software consulting and custom \
                     application development services. We specialize in cloud migration, API \
                     integration, and digital transformation projects for mid-market companies.",
                ),
                Field::new(
                    "How did you hear about Slash?",
                    "Recommended by our CFO's network at a FinTech conference.",
                ),
                Field::new(
                    "Business Source of Funds",
                    "Primary funding from Series B venture capital round, supplemented by \
                     recurring revenue from existing client contracts and retained earnings.",
                ),
            ],
            facts: vec![
                Field::new("Team size", "47 employees"),
                Field::new("Estimated customers served", "~150 active clients"),
                Field::new("Customer type", "Businesses"),
                Field::new("Countries of operation", "Canada, United Kingdom"),
                Field::new("Cash on balance sheet", "$2,400,000"),
                Field::new("Estimated annual revenue", "$8,500,000"),
            ],
            account_uses: vec!["Accounts Payable", "Accounts Receivable", "Treasury Management"],
            activity: vec![
                ActivityRow {
                    rail: "Card",
                    incoming: None,
                    outgoing: volume("101-500 transactions", "$1-100k vol."),
                },
                ActivityRow {
                    rail: "ACH",
                    incoming: volume("1-100 transactions", "$1-100k vol."),
                    outgoing: volume("1-100 transactions", "$1-100k vol."),
                },
                ActivityRow {
                    rail: "Domestic Wire",
                    incoming: volume("1-100 transactions", "$101k-500k vol."),
                    outgoing: volume("1-100 transactions", "$101k-500k vol."),
                },
                ActivityRow {
                    rail: "International Wire",
                    incoming: volume("1-100 transactions", "$101k-500k vol."),
                    outgoing: volume("1-100 transactions", "$101k-500k vol."),
                },
                ActivityRow {
                    rail: "USDC/USDT",
                    incoming: volume("1-100 transactions", "$1-100k vol."),
                    outgoing: volume("1-100 transactions", "$1-100k vol."),
                },
            ],
        }
    }
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        Self::sample()
    }
}
