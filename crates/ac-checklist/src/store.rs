//! Checklist item store
//!
//! Owns the session's items. Items are fixed at seeding; the only writes are
//! status changes (gated by [`crate::state_machine`]) and note edits.
//!
//! Two write surfaces are offered:
//! - strict: [`ChecklistStore::apply_status`] / [`ChecklistStore::apply_notes`]
//!   return a `Result` describing what happened;
//! - lenient: [`ChecklistStore::set_status`] / [`ChecklistStore::set_notes`]
//!   swallow unknown ids and rejected transitions, leaving the store as it was.

use crate::definition::ChecklistDefinition;
use crate::error::{ChecklistError, DefinitionError};
use crate::item::{ChecklistItem, ItemId};
use crate::state_machine::validate_transition;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Verified/total counts over a set of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub verified: usize,
    pub total: usize,
}

impl Progress {
    #[inline]
    #[must_use]
    pub fn new(verified: usize, total: usize) -> Self {
        Self { verified, total }
    }

    /// Count over an iterator of items
    pub fn tally<'a>(items: impl IntoIterator<Item = &'a ChecklistItem>) -> Self {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            verified: acc.verified + usize::from(item.is_verified()),
            total: acc.total + 1,
        })
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.verified
    }

    /// Every counted item is verified (vacuously true for zero items)
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.verified == self.total
    }
}

impl From<Progress> for (usize, usize) {
    fn from(value: Progress) -> Self {
        (value.verified, value.total)
    }
}

/// Whole-checklist approval state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Readiness {
    /// Every item verified
    Ready,
    /// Some items still unverified
    Pending { remaining: usize },
    /// Nothing to approve
    NotApplicable,
}

/// Result of an accepted status write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub item: ItemId,
    pub previous: String,
    pub current: String,
}

impl StatusChange {
    /// Whether the write re-selected the current status
    #[inline]
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Items partitioned by beneficial-owner scope, order preserved
#[derive(Debug, Clone, Default)]
pub struct OwnerGroups<'a> {
    /// Items about the business entity itself
    pub unscoped: Vec<&'a ChecklistItem>,
    /// Owner name to that owner's items, owners in first-appearance order
    pub owners: IndexMap<&'a str, Vec<&'a ChecklistItem>>,
}

impl<'a> OwnerGroups<'a> {
    /// Total number of items across all partitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.unscoped.len() + self.owners.values().map(Vec::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Progress for one owner's partition
    #[must_use]
    pub fn owner_progress(&self, owner: &str) -> Progress {
        self.owners
            .get(owner)
            .map(|items| Progress::tally(items.iter().copied()))
            .unwrap_or_default()
    }
}

/// Authoritative collection of checklist items for one review session
#[derive(Debug, Clone, Default)]
pub struct ChecklistStore {
    items: Vec<ChecklistItem>,
    index: HashMap<ItemId, usize>,
}

impl ChecklistStore {
    /// Seed a store from a validated definition
    pub fn from_definition(definition: &ChecklistDefinition) -> Result<Self, DefinitionError> {
        let items = definition.seed()?;
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id().clone(), i))
            .collect();
        tracing::debug!("Seeded checklist with {} items", items.len());
        Ok(Self { items, index })
    }

    /// Seed the built-in sample checklist
    pub fn sample() -> Result<Self, DefinitionError> {
        Self::from_definition(&ChecklistDefinition::sample())
    }

    /// All items in seeding order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChecklistItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Change an item's status, reporting unknown ids and rejected transitions
    pub fn apply_status(&mut self, id: &str, proposed: &str) -> Result<StatusChange, ChecklistError> {
        let item = self.item_mut(id)?;
        validate_transition(item, proposed).map_err(|source| ChecklistError::IllegalTransition {
            item: id.to_string(),
            source,
        })?;

        let previous = item.replace_status(proposed.to_string());
        tracing::debug!(item = id, from = %previous, to = proposed, "Status changed");
        Ok(StatusChange {
            item: item.id().clone(),
            previous,
            current: proposed.to_string(),
        })
    }

    /// Change an item's status; unknown ids and rejected transitions are no-ops
    pub fn set_status(&mut self, id: &str, proposed: &str) {
        if let Err(e) = self.apply_status(id, proposed) {
            tracing::warn!("Ignoring status change: {}", e);
        }
    }

    /// Overwrite an item's notes, reporting unknown ids
    ///
    /// No validation: whether notes are required is a read-time concern.
    pub fn apply_notes(&mut self, id: &str, text: impl Into<String>) -> Result<(), ChecklistError> {
        let item = self.item_mut(id)?;
        item.replace_notes(text.into());
        tracing::debug!(item = id, "Notes updated");
        Ok(())
    }

    /// Overwrite an item's notes; unknown ids are a no-op
    pub fn set_notes(&mut self, id: &str, text: impl Into<String>) {
        if let Err(e) = self.apply_notes(id, text) {
            tracing::warn!("Ignoring notes change: {}", e);
        }
    }

    /// Partition items into business-level and per-owner groups
    #[must_use]
    pub fn group_by_owner(&self) -> OwnerGroups<'_> {
        let mut groups = OwnerGroups::default();
        for item in &self.items {
            match item.owner_name() {
                Some(owner) => groups.owners.entry(owner).or_default().push(item),
                None => groups.unscoped.push(item),
            }
        }
        groups
    }

    /// Distinct owner names in first-appearance order
    #[must_use]
    pub fn owners(&self) -> Vec<&str> {
        let mut owners: Vec<&str> = Vec::new();
        for owner in self.items.iter().filter_map(ChecklistItem::owner_name) {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
        owners
    }

    /// Progress over the items scoped to `owner`
    #[must_use]
    pub fn owner_progress(&self, owner: &str) -> Progress {
        Progress::tally(
            self.items
                .iter()
                .filter(|item| item.owner_name() == Some(owner)),
        )
    }

    /// Progress over every item
    #[must_use]
    pub fn overall_progress(&self) -> Progress {
        Progress::tally(&self.items)
    }

    /// Every item verified; vacuously true for an empty checklist
    #[must_use]
    pub fn all_approved(&self) -> bool {
        self.overall_progress().is_complete()
    }

    /// Approval state with the empty checklist called out explicitly
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        let progress = self.overall_progress();
        if progress.total == 0 {
            Readiness::NotApplicable
        } else if progress.is_complete() {
            Readiness::Ready
        } else {
            Readiness::Pending {
                remaining: progress.remaining(),
            }
        }
    }

    /// Items whose current status requires notes that are still blank
    #[must_use]
    pub fn missing_notes(&self) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|item| item.is_missing_notes())
            .collect()
    }

    /// Owners whose sub-checklist is not fully verified
    #[must_use]
    pub fn pending_owners(&self) -> Vec<&str> {
        self.owners()
            .into_iter()
            .filter(|owner| !self.owner_progress(owner).is_complete())
            .collect()
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut ChecklistItem, ChecklistError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.items[i]),
            None => Err(ChecklistError::UnknownItem(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{ItemDefinition, StatusDefinition};
    use crate::taxonomy::{Outcome, StatusClass};
    use crate::TransitionError;
    use pretty_assertions::assert_eq;

    fn manual_item(id: &str, owner: Option<&str>) -> ItemDefinition {
        ItemDefinition {
            id: id.to_string(),
            attribute: id.to_uppercase(),
            owner: owner.map(str::to_string),
            instructions: String::new(),
            section: None,
            initial: None,
            statuses: vec![
                StatusDefinition::new("Not verified", Outcome::Unverified),
                StatusDefinition::new("Verified", Outcome::Verified),
                StatusDefinition::new("Needs follow-up", Outcome::Unverified).with_notes(),
            ],
        }
    }

    fn store() -> ChecklistStore {
        let definition = ChecklistDefinition {
            items: vec![
                manual_item("a", None),
                manual_item("b", Some("Bruce Wayne")),
                manual_item("c", None),
                manual_item("d", Some("Clark Kent")),
                manual_item("e", Some("Bruce Wayne")),
            ],
        };
        ChecklistStore::from_definition(&definition).unwrap()
    }

    #[test]
    fn apply_status_reports_change() {
        let mut store = store();
        let change = store.apply_status("a", "Verified").unwrap();
        assert_eq!(change.previous, "Not verified");
        assert_eq!(change.current, "Verified");
        assert!(!change.is_noop());
        assert_eq!(store.get("a").unwrap().current_status(), "Verified");
    }

    #[test]
    fn reselecting_is_a_noop_change() {
        let mut store = store();
        let change = store.apply_status("a", "Not verified").unwrap();
        assert!(change.is_noop());
    }

    #[test]
    fn unknown_item_is_reported_and_ignored() {
        let mut store = store();
        let before = store.items().to_vec();
        assert_eq!(
            store.apply_status("missing", "Verified"),
            Err(ChecklistError::UnknownItem("missing".to_string()))
        );
        store.set_status("missing", "Verified");
        store.set_notes("missing", "text");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn rejected_transition_leaves_item_untouched() {
        let mut store = store();
        let err = store.apply_status("a", "Approved").unwrap_err();
        assert_eq!(
            err,
            ChecklistError::IllegalTransition {
                item: "a".to_string(),
                source: TransitionError::UnknownStatus {
                    status: "Approved".to_string()
                },
            }
        );
        assert_eq!(store.get("a").unwrap().current_status(), "Not verified");
    }

    #[test]
    fn status_change_touches_one_item() {
        let mut store = store();
        store.set_status("b", "Verified");
        for item in store.items() {
            let expected = if item.id().as_str() == "b" { "Verified" } else { "Not verified" };
            assert_eq!(item.current_status(), expected);
        }
    }

    #[test]
    fn notes_are_overwritten_without_validation() {
        let mut store = store();
        store.set_notes("c", "first");
        store.set_notes("c", "");
        assert_eq!(store.get("c").unwrap().notes(), "");
        store.apply_notes("c", "x".repeat(10_000)).unwrap();
        assert_eq!(store.get("c").unwrap().notes().len(), 10_000);
    }

    #[test]
    fn group_by_owner_preserves_order() {
        let store = store();
        let groups = store.group_by_owner();
        let ids = |items: &[&ChecklistItem]| {
            items.iter().map(|i| i.id().as_str().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&groups.unscoped), vec!["a", "c"]);
        assert_eq!(groups.owners.keys().copied().collect::<Vec<_>>(), vec!["Bruce Wayne", "Clark Kent"]);
        assert_eq!(ids(&groups.owners["Bruce Wayne"]), vec!["b", "e"]);
        assert_eq!(ids(&groups.owners["Clark Kent"]), vec!["d"]);
        assert_eq!(groups.len(), store.len());
    }

    #[test]
    fn owner_progress_counts_only_that_owner() {
        let mut store = store();
        store.set_status("b", "Verified");
        store.set_status("a", "Verified");
        assert_eq!(store.owner_progress("Bruce Wayne"), Progress::new(1, 2));
        assert_eq!(store.owner_progress("Clark Kent"), Progress::new(0, 1));
        assert_eq!(store.owner_progress("Nobody"), Progress::new(0, 0));
        assert_eq!(store.group_by_owner().owner_progress("Bruce Wayne"), Progress::new(1, 2));
    }

    #[test]
    fn overall_progress_and_readiness() {
        let mut store = store();
        assert_eq!(<(usize, usize)>::from(store.overall_progress()), (0, 5));
        assert!(!store.all_approved());
        assert_eq!(store.readiness(), Readiness::Pending { remaining: 5 });

        for id in ["a", "b", "c", "d", "e"] {
            store.set_status(id, "Verified");
        }
        assert!(store.all_approved());
        assert_eq!(store.readiness(), Readiness::Ready);
    }

    #[test]
    fn empty_checklist_is_vacuously_approved() {
        let store = ChecklistStore::default();
        assert!(store.all_approved());
        assert_eq!(store.readiness(), Readiness::NotApplicable);
        assert!(store.group_by_owner().is_empty());
    }

    #[test]
    fn missing_notes_and_pending_owners() {
        let mut store = store();
        store.set_status("d", "Verified");
        store.set_status("a", "Needs follow-up");
        assert_eq!(
            store.missing_notes().iter().map(|i| i.id().as_str()).collect::<Vec<_>>(),
            vec!["a"]
        );
        store.set_notes("a", "Asked for a utility bill");
        assert!(store.missing_notes().is_empty());

        assert_eq!(store.pending_owners(), vec!["Bruce Wayne"]);
    }

    #[test]
    fn automatic_class_is_reported_on_rejection() {
        let definition = ChecklistDefinition {
            items: vec![ItemDefinition {
                statuses: vec![
                    StatusDefinition::new("Not verified", Outcome::Unverified),
                    StatusDefinition::new("Middesk", Outcome::Verified).automatic(),
                ],
                ..manual_item("ein", None)
            }],
        };
        let mut store = ChecklistStore::from_definition(&definition).unwrap();
        let err = store.apply_status("ein", "Middesk").unwrap_err();
        assert!(matches!(
            err,
            ChecklistError::IllegalTransition {
                source: TransitionError::ClassMismatch { to: StatusClass::Automatic, .. },
                ..
            }
        ));
    }
}
