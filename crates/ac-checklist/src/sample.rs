//! Built-in sample checklist for the TechFlow Solutions LLC application
//!
//! Ten business-level items plus five items for each of the two beneficial
//! owners. Every item starts at "Not verified".

use crate::definition::{ChecklistDefinition, ItemDefinition, StatusDefinition};
use crate::taxonomy::Outcome;

/// Provider labels that appear as automatic statuses in the sample taxonomies
pub const AUTOMATIC_SOURCES: &[&str] = &[
    "Middesk",
    "Automatically",
    "Persona – verified",
    "Persona – failed",
    "Clear – automatic",
    "Potential match – automatic",
];

/// Beneficial owners in the sample application
pub const SAMPLE_OWNERS: &[(&str, &str)] = &[("Bruce Wayne", "bruce"), ("Clark Kent", "clark")];

const NOT_VERIFIED: &str = "Not verified";

fn baseline() -> StatusDefinition {
    StatusDefinition::new(NOT_VERIFIED, Outcome::Unverified)
}

/// Secretary of State / business registry lookups
fn registry_statuses() -> Vec<StatusDefinition> {
    vec![
        baseline(),
        StatusDefinition::new("Middesk", Outcome::Verified)
            .automatic()
            .locked(),
        StatusDefinition::new("Verified manually", Outcome::Verified).with_notes(),
        StatusDefinition::new("Does not match", Outcome::Unverified).with_notes(),
    ]
}

/// Uploaded documents reviewed by the document checker or a reviewer
fn document_statuses() -> Vec<StatusDefinition> {
    vec![
        baseline(),
        StatusDefinition::new("Automatically", Outcome::Verified)
            .automatic()
            .locked(),
        StatusDefinition::new("Verified manually", Outcome::Verified).with_notes(),
        StatusDefinition::new("Rejected", Outcome::Unverified).with_notes(),
    ]
}

/// Identity checks for beneficial owners
fn persona_statuses() -> Vec<StatusDefinition> {
    vec![
        baseline(),
        StatusDefinition::new("Persona – verified", Outcome::Verified)
            .automatic()
            .locked(),
        StatusDefinition::new("Persona – failed", Outcome::Unverified)
            .automatic()
            .locked(),
        StatusDefinition::new("Persona – manual", Outcome::Verified).with_notes(),
        StatusDefinition::new("Document expired", Outcome::Unverified).with_notes(),
    ]
}

/// Watchlist, PEP and adverse-media screening
fn screening_statuses() -> Vec<StatusDefinition> {
    vec![
        baseline(),
        StatusDefinition::new("Clear – automatic", Outcome::Verified).automatic(),
        StatusDefinition::new("Potential match – automatic", Outcome::Unverified).automatic(),
        StatusDefinition::new("Cleared after review", Outcome::Verified).with_notes(),
        StatusDefinition::new("Escalated to compliance", Outcome::Unverified)
            .locked()
            .with_notes(),
    ]
}

/// Reviewer judgment only
fn manual_statuses() -> Vec<StatusDefinition> {
    vec![
        baseline(),
        StatusDefinition::new("Verified", Outcome::Verified),
        StatusDefinition::new("Needs follow-up", Outcome::Unverified).with_notes(),
    ]
}

fn item(
    id: &str,
    attribute: &str,
    section: &str,
    instructions: &str,
    statuses: Vec<StatusDefinition>,
) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        attribute: attribute.to_string(),
        owner: None,
        instructions: instructions.to_string(),
        section: Some(section.to_string()),
        initial: None,
        statuses,
    }
}

fn owner_items(owner: &str, key: &str) -> Vec<ItemDefinition> {
    let scoped = |id: &str, attribute: &str, section: &str, instructions: &str, statuses| {
        ItemDefinition {
            owner: Some(owner.to_string()),
            ..item(&format!("{id}-{key}"), attribute, section, instructions, statuses)
        }
    };
    vec![
        scoped(
            "identity-document",
            "Government ID",
            "applicant-info",
            "Check the ID is unexpired and the name and date of birth match the application.",
            persona_statuses(),
        ),
        scoped(
            "selfie-verification",
            "Selfie Verification",
            "applicant-info",
            "Compare the selfie against the ID photo.",
            persona_statuses(),
        ),
        scoped(
            "ubo-database",
            "Identity Database Match",
            "applicant-info",
            "Name, date of birth and SSN must match a consumer identity record.",
            persona_statuses(),
        ),
        scoped(
            "pep-screening",
            "PEP & Sanctions Screening",
            "compliance",
            "Review any hits against the owner's date of birth and country.",
            screening_statuses(),
        ),
        scoped(
            "residential-address",
            "Residential Address",
            "applicant-info",
            "Address must be residential; PO boxes and registered agents are not accepted.",
            manual_statuses(),
        ),
    ]
}

impl ChecklistDefinition {
    /// Checklist used when no definition file is supplied
    #[must_use]
    pub fn sample() -> Self {
        let mut items = vec![
            item(
                "legal-name",
                "Legal Name of Business",
                "applicant-info",
                "Legal name must match the Secretary of State record exactly.",
                registry_statuses(),
            ),
            item(
                "ein",
                "EIN",
                "applicant-info",
                "EIN must be registered to the legal name.",
                registry_statuses(),
            ),
            item(
                "formation-doc",
                "Formation Document",
                "applicant-info",
                "Certificate must show the legal name, state seal and filing date.",
                document_statuses(),
            ),
            item(
                "sos-status",
                "Secretary of State Status",
                "applicant-info",
                "Entity must be active and in good standing.",
                registry_statuses(),
            ),
            item(
                "business-address",
                "Business Address",
                "applicant-info",
                "Operating address must be a physical location in a supported country.",
                manual_statuses(),
            ),
            item(
                "website",
                "Website",
                "applicant-info",
                "Website should describe the stated business and be owned by the applicant.",
                manual_statuses(),
            ),
            item(
                "industry",
                "Industry",
                "applicant-info",
                "Stated vertical must be consistent with the website and questionnaire.",
                manual_statuses(),
            ),
            item(
                "source-of-funds",
                "Source of Funds",
                "financial-info",
                "Source of funds must be plausible for the company's size and stage.",
                document_statuses(),
            ),
            item(
                "business-watchlist",
                "Business Watchlist Screening",
                "compliance",
                "Review OFAC and global sanctions hits for the business.",
                screening_statuses(),
            ),
            item(
                "adverse-media-business",
                "Adverse Media",
                "compliance",
                "Review negative news mentioning the business or its officers.",
                screening_statuses(),
            ),
        ];
        for (owner, key) in SAMPLE_OWNERS {
            items.extend(owner_items(owner, key));
        }
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_definition_is_valid() {
        let def = ChecklistDefinition::sample();
        assert!(def.validate().is_ok());
        assert_eq!(def.items.len(), 20);
    }

    #[test]
    fn sample_starts_unverified() {
        for item in ChecklistDefinition::sample().seed().unwrap() {
            assert_eq!(item.current_status(), NOT_VERIFIED);
            assert!(!item.is_verified());
            assert!(item.notes().is_empty());
        }
    }

    #[test]
    fn sample_automatic_statuses_are_known_sources() {
        for item in ChecklistDefinition::sample().seed().unwrap() {
            for status in item.taxonomy().automatic_sources() {
                assert!(AUTOMATIC_SOURCES.contains(&status), "{status}");
            }
        }
    }
}
