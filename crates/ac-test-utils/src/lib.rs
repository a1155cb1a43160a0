//! Testing utilities for the Action Center workspace
//!
//! Shared fixtures: the sample store, a small mixed-class checklist and the
//! write candidates used by the property tests.

#![allow(missing_docs)]

use ac_checklist::{ChecklistDefinition, ChecklistStore};
use ac_dashboard::{ReviewSession, SessionConfig};

/// Small checklist whose items start in every class/lock combination.
///
/// Owner-scoped items are interleaved with business items so grouping has to
/// preserve relative order.
pub const MIXED_YAML: &str = r"
items:
  - id: auto-locked
    attribute: Identity Database Match
    initial: Persona – verified
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Persona – verified, outcome: verified, class: automatic, locked: true }
      - { status: Persona – failed, outcome: unverified, class: automatic, locked: true }
      - { status: Persona – manual, outcome: verified, notes_required: true }
  - id: id-bruce
    attribute: Government ID
    owner: Bruce Wayne
    section: applicant-info
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Persona – verified, outcome: verified, class: automatic, locked: true }
      - { status: Persona – manual, outcome: verified, notes_required: true }
      - { status: Document expired, outcome: unverified, notes_required: true }
  - id: auto-open
    attribute: Business Watchlist Screening
    section: compliance
    initial: Clear – automatic
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Clear – automatic, outcome: verified, class: automatic }
      - { status: Potential match – automatic, outcome: unverified, class: automatic }
      - { status: Cleared after review, outcome: verified, notes_required: true }
      - { status: Escalated to compliance, outcome: unverified, locked: true, notes_required: true }
  - id: address-clark
    attribute: Residential Address
    owner: Clark Kent
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Verified, outcome: verified }
      - { status: Needs follow-up, outcome: unverified, notes_required: true }
  - id: manual-locked
    attribute: Adverse Media
    initial: Escalated to compliance
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Cleared after review, outcome: verified, notes_required: true }
      - { status: Escalated to compliance, outcome: unverified, locked: true, notes_required: true }
  - id: manual-open
    attribute: Website
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Verified, outcome: verified }
      - { status: Needs follow-up, outcome: unverified, notes_required: true }
  - id: pep-bruce
    attribute: PEP & Sanctions Screening
    owner: Bruce Wayne
    initial: Potential match – automatic
    statuses:
      - { status: Not verified, outcome: unverified }
      - { status: Clear – automatic, outcome: verified, class: automatic }
      - { status: Potential match – automatic, outcome: unverified, class: automatic }
      - { status: Cleared after review, outcome: verified, notes_required: true }
";

/// Id that is in no fixture
pub const UNKNOWN_ITEM: &str = "no-such-item";

/// Status label that is in no fixture taxonomy
pub const UNKNOWN_STATUS: &str = "Approved by magic";

pub fn sample_store() -> ChecklistStore {
    ChecklistStore::sample().unwrap()
}

pub fn mixed_definition() -> ChecklistDefinition {
    ChecklistDefinition::from_yaml_str(MIXED_YAML).unwrap()
}

pub fn mixed_store() -> ChecklistStore {
    ChecklistStore::from_definition(&mixed_definition()).unwrap()
}

/// Every `(item, status)` write worth trying against `store`: each status
/// of each item's taxonomy, an unknown status per item and an unknown item.
pub fn candidate_writes(store: &ChecklistStore) -> Vec<(String, String)> {
    let mut writes = Vec::new();
    for item in store.items() {
        let id = item.id().to_string();
        for status in item.taxonomy().statuses() {
            writes.push((id.clone(), status.to_string()));
        }
        writes.push((id, UNKNOWN_STATUS.to_string()));
    }
    writes.push((UNKNOWN_ITEM.to_string(), "Not verified".to_string()));
    writes
}

pub fn sample_session() -> ReviewSession {
    ReviewSession::sample().unwrap()
}

pub fn mixed_session() -> ReviewSession {
    ReviewSession::new(SessionConfig::new().with_definition(mixed_definition())).unwrap()
}
