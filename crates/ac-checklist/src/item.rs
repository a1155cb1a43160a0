//! Checklist items
//!
//! An item is seeded once from its definition. Afterwards only its current
//! status and notes change, and only through [`crate::ChecklistStore`].

use crate::taxonomy::{StatusSpec, Taxonomy};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable item identifier (e.g. `formation-doc`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opaque navigation target handed back to the view layer
///
/// The core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionRef(String);

impl SectionRef {
    #[inline]
    #[must_use]
    pub fn new(section: impl Into<String>) -> Self {
        Self(section.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One verification requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    id: ItemId,
    attribute: String,
    current_status: String,
    taxonomy: Taxonomy,
    notes: String,
    owner_name: Option<String>,
    instructions: String,
    section_ref: Option<SectionRef>,
}

impl ChecklistItem {
    /// Build an item positioned at `initial_status`.
    ///
    /// Callers guarantee `initial_status` is in `taxonomy`; definitions check
    /// this during validation.
    pub(crate) fn seeded(
        id: ItemId,
        attribute: String,
        taxonomy: Taxonomy,
        initial_status: String,
        owner_name: Option<String>,
        instructions: String,
        section_ref: Option<SectionRef>,
    ) -> Self {
        debug_assert!(taxonomy.contains(&initial_status));
        Self {
            id,
            attribute,
            current_status: initial_status,
            taxonomy,
            notes: String::new(),
            owner_name,
            instructions,
            section_ref,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[inline]
    #[must_use]
    pub fn current_status(&self) -> &str {
        &self.current_status
    }

    #[inline]
    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    #[inline]
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Beneficial owner this item is scoped to, if any
    #[inline]
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[inline]
    #[must_use]
    pub fn section_ref(&self) -> Option<&SectionRef> {
        self.section_ref.as_ref()
    }

    /// Spec of the current status
    ///
    /// Always present: the store only ever writes statuses that are in the
    /// taxonomy.
    #[must_use]
    pub fn current_spec(&self) -> Option<&StatusSpec> {
        self.taxonomy.get(&self.current_status)
    }

    /// Current status is in the `verified` partition
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.current_spec().is_some_and(StatusSpec::is_verified)
    }

    /// Current status is non-modifiable
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.current_spec().is_some_and(|spec| spec.locked)
    }

    /// Current status asks for reviewer notes
    #[must_use]
    pub fn is_notes_required(&self) -> bool {
        self.current_spec().is_some_and(|spec| spec.notes_required)
    }

    /// Current status was asserted by an automatic provider
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.current_spec().is_some_and(StatusSpec::is_automatic)
    }

    /// Notes are required but still blank
    #[must_use]
    pub fn is_missing_notes(&self) -> bool {
        self.is_notes_required() && self.notes.trim().is_empty()
    }

    pub(crate) fn replace_status(&mut self, status: String) -> String {
        std::mem::replace(&mut self.current_status, status)
    }

    pub(crate) fn replace_notes(&mut self, notes: String) {
        self.notes = notes;
    }
}
