//! View-local UI state
//!
//! Hover previews, tooltips and expanded checklist groups belong to the view.
//! Nothing in the checklist core reads them.

use std::collections::HashMap;

/// A collapsible checklist group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Business-level items
    Business,
    /// One beneficial owner's items
    Owner(String),
}

impl GroupKey {
    #[must_use]
    pub fn owner(name: impl Into<String>) -> Self {
        Self::Owner(name.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    hovered_document: Option<String>,
    tooltip: Option<String>,
    expanded_groups: HashMap<GroupKey, bool>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a document thumbnail
    pub fn hover_document(&mut self, preview_id: impl Into<String>) {
        self.hovered_document = Some(preview_id.into());
    }

    /// Pointer left a document thumbnail
    pub fn leave_document(&mut self) {
        self.hovered_document = None;
    }

    #[must_use]
    pub fn hovered_document(&self) -> Option<&str> {
        self.hovered_document.as_deref()
    }

    #[must_use]
    pub fn is_previewing(&self, preview_id: &str) -> bool {
        self.hovered_document.as_deref() == Some(preview_id)
    }

    pub fn show_tooltip(&mut self, tooltip_id: impl Into<String>) {
        self.tooltip = Some(tooltip_id.into());
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Groups start collapsed
    #[must_use]
    pub fn is_expanded(&self, group: &GroupKey) -> bool {
        self.expanded_groups.get(group).copied().unwrap_or(false)
    }

    /// Flip a group, returning its new state
    pub fn toggle_group(&mut self, group: GroupKey) -> bool {
        let expanded = self.expanded_groups.entry(group).or_insert(false);
        *expanded = !*expanded;
        *expanded
    }

    pub fn set_expanded(&mut self, group: GroupKey, expanded: bool) {
        self.expanded_groups.insert(group, expanded);
    }
}
