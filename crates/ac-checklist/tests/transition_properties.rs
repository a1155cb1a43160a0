//! Property tests for the checklist state machine.
//!
//! Random sequences of status writes (including unknown ids and labels that
//! are in no taxonomy) are applied through the lenient write surface; after
//! every write the store must still satisfy its invariants.

use ac_checklist::{can_transition, ChecklistItem, ChecklistStore, StatusClass};
use ac_test_utils::{candidate_writes, mixed_store, sample_store};
use proptest::prelude::*;
use std::collections::HashMap;

fn snapshot(store: &ChecklistStore) -> HashMap<String, ChecklistItem> {
    store
        .items()
        .iter()
        .map(|item| (item.id().to_string(), item.clone()))
        .collect()
}

fn class_of(item: &ChecklistItem) -> StatusClass {
    item.current_spec().map(|spec| spec.class).unwrap_or_default()
}

fn check_invariants(store: &ChecklistStore) {
    for item in store.items() {
        // closure
        assert!(
            item.taxonomy().contains(item.current_status()),
            "{} left its taxonomy: {}",
            item.id(),
            item.current_status()
        );
        // notes-required has no hysteresis
        let expected = item
            .taxonomy()
            .notes_required_statuses()
            .any(|s| s == item.current_status());
        assert_eq!(item.is_notes_required(), expected);
    }

    let verified = store.items().iter().filter(|i| i.is_verified()).count();
    assert_eq!(store.overall_progress().verified, verified);
    assert_eq!(store.overall_progress().total, store.len());
    assert_eq!(store.all_approved(), verified == store.len());

    let groups = store.group_by_owner();
    assert_eq!(groups.len(), store.len());
    let mut regrouped: Vec<&str> = groups.unscoped.iter().map(|i| i.id().as_str()).collect();
    for (owner, items) in &groups.owners {
        assert!(items.iter().all(|i| i.owner_name() == Some(*owner)));
        assert_eq!(groups.owner_progress(owner), store.owner_progress(owner));
        regrouped.extend(items.iter().map(|i| i.id().as_str()));
    }
    assert!(groups.unscoped.iter().all(|i| i.owner_name().is_none()));
    regrouped.sort_unstable();
    let mut all: Vec<&str> = store.items().iter().map(|i| i.id().as_str()).collect();
    all.sort_unstable();
    assert_eq!(regrouped, all);
}

fn check_order_preserved(store: &ChecklistStore) {
    let position: HashMap<&str, usize> = store
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id().as_str(), i))
        .collect();
    let groups = store.group_by_owner();
    let partitions = std::iter::once(&groups.unscoped).chain(groups.owners.values());
    for partition in partitions {
        let positions: Vec<usize> = partition.iter().map(|i| position[i.id().as_str()]).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

fn run_writes(mut store: ChecklistStore, picks: &[usize]) {
    let writes = candidate_writes(&store);
    for &pick in picks {
        let (id, status) = &writes[pick % writes.len()];
        let before = snapshot(&store);
        let allowed = store.get(id).is_some_and(|item| can_transition(item, status));

        store.set_status(id, status);

        let after = snapshot(&store);
        for (item_id, old) in &before {
            let new = &after[item_id];
            if item_id == id && allowed {
                assert_eq!(new.current_status(), status.as_str());
            } else {
                assert_eq!(new.current_status(), old.current_status());
            }
            // automatic and manual never replace each other
            assert_eq!(class_of(new), class_of(old));
            // locked statuses are never left
            if old.is_locked() {
                assert_eq!(new.current_status(), old.current_status());
            }
            assert_eq!(new.notes(), old.notes());
        }
        check_invariants(&store);
    }
    check_order_preserved(&store);
}

proptest! {
    #[test]
    fn prop_sample_store_invariants(picks in prop::collection::vec(any::<usize>(), 0..64)) {
        run_writes(sample_store(), &picks);
    }

    #[test]
    fn prop_mixed_store_invariants(picks in prop::collection::vec(any::<usize>(), 0..64)) {
        run_writes(mixed_store(), &picks);
    }

    #[test]
    fn prop_notes_writes_never_touch_status(
        picks in prop::collection::vec((any::<usize>(), ".{0,16}"), 0..32)
    ) {
        let mut store = mixed_store();
        let statuses: Vec<String> = store.items().iter().map(|i| i.current_status().to_string()).collect();
        let ids: Vec<String> = store.items().iter().map(|i| i.id().to_string()).collect();
        for (pick, text) in picks {
            let id = &ids[pick % ids.len()];
            store.set_notes(id, text.clone());
            prop_assert_eq!(store.get(id).unwrap().notes(), text.as_str());
        }
        let after: Vec<String> = store.items().iter().map(|i| i.current_status().to_string()).collect();
        prop_assert_eq!(statuses, after);
    }
}
