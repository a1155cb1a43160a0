//! Status taxonomy
//!
//! Each checklist item owns one ordered table mapping a status label to its
//! [`StatusSpec`]: whether selecting it counts as verified, whether it was
//! asserted by an automatic provider, whether it is locked once reached, and
//! whether it requires reviewer notes.
//!
//! Because every label maps to exactly one [`Outcome`], the verified and
//! unverified partitions can never overlap.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pass/fail contribution of a status to every aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Verified,
    Unverified,
}

/// Who asserted a status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Asserted by an external verification provider
    Automatic,
    /// Entered by a human reviewer
    #[default]
    Manual,
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => f.write_str("automatic"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// Properties attached to one status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSpec {
    pub outcome: Outcome,
    pub class: StatusClass,
    pub locked: bool,
    pub notes_required: bool,
}

impl StatusSpec {
    /// Manual status with the given outcome, unlocked, notes optional
    #[inline]
    #[must_use]
    pub fn manual(outcome: Outcome) -> Self {
        Self {
            outcome,
            class: StatusClass::Manual,
            locked: false,
            notes_required: false,
        }
    }

    /// Automatic status with the given outcome, unlocked
    #[inline]
    #[must_use]
    pub fn automatic(outcome: Outcome) -> Self {
        Self {
            class: StatusClass::Automatic,
            ..Self::manual(outcome)
        }
    }

    #[inline]
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_notes(mut self) -> Self {
        self.notes_required = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.outcome == Outcome::Verified
    }

    #[inline]
    #[must_use]
    pub fn is_automatic(&self) -> bool {
        self.class == StatusClass::Automatic
    }
}

/// Ordered status table for one item
///
/// Insertion order is the order options are offered to the reviewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    entries: IndexMap<String, StatusSpec>,
}

impl Taxonomy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a status, returning the previous spec if the label was already present
    pub fn insert(&mut self, status: impl Into<String>, spec: StatusSpec) -> Option<StatusSpec> {
        self.entries.insert(status.into(), spec)
    }

    /// Builder form of [`Taxonomy::insert`]
    #[must_use]
    pub fn with(mut self, status: impl Into<String>, spec: StatusSpec) -> Self {
        self.insert(status, spec);
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, status: &str) -> Option<&StatusSpec> {
        self.entries.get(status)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, status: &str) -> bool {
        self.entries.contains_key(status)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All status labels in declaration order
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The `verified` partition
    pub fn verified(&self) -> impl Iterator<Item = &str> {
        self.select(StatusSpec::is_verified)
    }

    /// The `unverified` partition
    pub fn unverified(&self) -> impl Iterator<Item = &str> {
        self.select(|spec| !spec.is_verified())
    }

    /// Statuses asserted by automatic providers
    pub fn automatic_sources(&self) -> impl Iterator<Item = &str> {
        self.select(StatusSpec::is_automatic)
    }

    pub fn notes_required_statuses(&self) -> impl Iterator<Item = &str> {
        self.select(|spec| spec.notes_required)
    }

    pub fn non_modifiable_statuses(&self) -> impl Iterator<Item = &str> {
        self.select(|spec| spec.locked)
    }

    /// First unverified status, used as the seed value
    #[must_use]
    pub fn baseline(&self) -> Option<&str> {
        self.unverified().next()
    }

    fn select<'a>(
        &'a self,
        pred: impl Fn(&StatusSpec) -> bool + 'a,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |&(_, spec)| pred(spec))
            .map(|(k, _)| k.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, StatusSpec)> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = (S, StatusSpec)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
