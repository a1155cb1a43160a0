//! End-to-end review session: navigation, edits, rendering and snapshots.

use ac_checklist::{Progress, Readiness, SectionRef};
use ac_dashboard::render::{ChecklistView, SessionView};
use ac_dashboard::{ChecklistSnapshot, GroupKey, RecordingNavigator, TabId};
use ac_test_utils::{mixed_session, sample_session};
use pretty_assertions::assert_eq;

#[test]
fn reviewer_clears_one_owner() {
    let mut session = sample_session();
    assert_eq!(session.action_items().get("verify-identity").unwrap().detail, "2 pending");

    let edits = [
        ("identity-document-bruce", "Persona – manual"),
        ("selfie-verification-bruce", "Persona – manual"),
        ("ubo-database-bruce", "Persona – manual"),
        ("pep-screening-bruce", "Cleared after review"),
        ("residential-address-bruce", "Verified"),
    ];
    for (item, status) in edits {
        session.apply_status(item, status).unwrap();
    }

    assert_eq!(
        session.checklist().owner_progress("Bruce Wayne"),
        Progress::new(5, 5)
    );
    assert_eq!(session.checklist().pending_owners(), vec!["Clark Kent"]);
    assert_eq!(session.action_items().get("verify-identity").unwrap().detail, "1 pending");
    assert_eq!(session.checklist().missing_notes().len(), 4);

    for (item, _) in &edits[..4] {
        session.set_notes(item, "Reviewed against source documents");
    }
    assert!(session.checklist().missing_notes().is_empty());
    assert_eq!(
        session.checklist().readiness(),
        Readiness::Pending { remaining: 15 }
    );
}

#[test]
fn lenient_writes_never_fail_the_session() {
    let mut session = sample_session();
    session.set_status("formation-doc", "Automatically");
    session.set_status("missing-item", "Verified");
    session.set_notes("missing-item", "ignored");
    assert_eq!(session.checklist().overall_progress(), Progress::new(0, 20));
}

#[test]
fn action_clicks_navigate() {
    let session = sample_session();
    let mut nav = RecordingNavigator::new();
    session.activate_action("compliance-check", &mut nav).unwrap();
    session.focus_item("source-of-funds", &mut nav).unwrap();
    assert_eq!(
        nav.visited,
        vec![SectionRef::new("compliance"), SectionRef::new("financial-info")]
    );
    assert!(session.activate_action("approve", &mut nav).is_err());
    assert_eq!(nav.visited.len(), 2);
}

#[test]
fn full_page_follows_active_tab() {
    let mut session = sample_session();
    let page = SessionView(&session).to_string();
    assert!(page.contains("[Action Center]"));
    assert!(page.contains("Manual Review Checklist: 0/20 verified"));
    assert!(page.contains("Formation Document: Certificate_of_Formation_TechFlow_LLC.pdf"));

    session.select_tab("business-opportunity").unwrap();
    assert_eq!(session.tabs().active(), TabId::BusinessOpportunity);
    let page = SessionView(&session).to_string();
    assert!(page.contains("[Business Opportunity]"));
    assert!(page.contains("Business opportunity analysis and scoring will be displayed here."));
    assert!(!page.contains("Manual Review Checklist"));
}

#[test]
fn mixed_checklist_renders_flags_and_groups() {
    let mut session = mixed_session();
    session.view_mut().set_expanded(GroupKey::Business, true);
    let text = ChecklistView {
        store: session.checklist(),
        view: session.view(),
        expand_all: false,
    }
    .to_string();

    assert!(text.contains("v Business (2/4 verified)"));
    assert!(text.contains("Persona – verified (locked, automatic)"));
    assert!(text.contains("Escalated to compliance (locked, notes required)"));
    assert!(text.contains("> UBO: Bruce Wayne (0/2 verified)"));
    assert!(text.contains("> UBO: Clark Kent (0/1 verified)"));
}

#[test]
fn snapshot_of_mixed_session() {
    let session = mixed_session();
    let snapshot = ChecklistSnapshot::capture(session.checklist());
    let owners: Vec<Option<&str>> = snapshot.groups.iter().map(|g| g.owner.as_deref()).collect();
    assert_eq!(owners, vec![None, Some("Bruce Wayne"), Some("Clark Kent")]);

    let auto_open = snapshot.groups[0]
        .items
        .iter()
        .find(|item| item.id == "auto-open")
        .unwrap();
    assert!(auto_open.automatic);
    assert!(!auto_open.locked);
    assert_eq!(
        auto_open.options,
        vec!["Clear – automatic", "Potential match – automatic"]
    );
    assert_eq!(snapshot.missing_notes, vec!["manual-locked"]);
}
