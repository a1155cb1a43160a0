//! Review session
//!
//! One session per opened application: the header data, the checklist store,
//! the tab bar and view-local state. Nothing is persisted; dropping the
//! session discards every edit.

use crate::action_items::ActionItems;
use crate::applicant::ApplicantProfile;
use crate::application::ApplicationSummary;
use crate::documents::DocumentSet;
use crate::error::DashboardError;
use crate::navigation::SectionNavigator;
use crate::score::ScoreIndicator;
use crate::tabs::{TabBar, TabId};
use crate::view_state::ViewState;
use ac_checklist::{ChecklistDefinition, ChecklistStore, StatusChange};

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Checklist to seed; the built-in sample when unset
    pub definition: Option<ChecklistDefinition>,
    /// Application header data
    pub application: ApplicationSummary,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom checklist definition
    #[inline]
    #[must_use]
    pub fn with_definition(mut self, definition: ChecklistDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// With different header data
    #[inline]
    #[must_use]
    pub fn with_application(mut self, application: ApplicationSummary) -> Self {
        self.application = application;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    application: ApplicationSummary,
    applicant: ApplicantProfile,
    documents: DocumentSet,
    checklist: ChecklistStore,
    tabs: TabBar,
    view: ViewState,
}

impl ReviewSession {
    /// Seed a new session
    pub fn new(config: SessionConfig) -> Result<Self, DashboardError> {
        let checklist = match &config.definition {
            Some(definition) => ChecklistStore::from_definition(definition)?,
            None => ChecklistStore::sample()?,
        };
        tracing::info!(
            application = %config.application.application_id,
            items = checklist.len(),
            "Opened review session"
        );
        Ok(Self {
            application: config.application,
            applicant: ApplicantProfile::sample(),
            documents: DocumentSet::sample(),
            checklist,
            tabs: TabBar::new(),
            view: ViewState::new(),
        })
    }

    /// Session over the built-in sample data
    pub fn sample() -> Result<Self, DashboardError> {
        Self::new(SessionConfig::new())
    }

    #[inline]
    #[must_use]
    pub fn application(&self) -> &ApplicationSummary {
        &self.application
    }

    #[inline]
    #[must_use]
    pub fn applicant(&self) -> &ApplicantProfile {
        &self.applicant
    }

    #[inline]
    #[must_use]
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    #[inline]
    #[must_use]
    pub fn checklist(&self) -> &ChecklistStore {
        &self.checklist
    }

    #[inline]
    #[must_use]
    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[inline]
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    #[must_use]
    pub fn scores(&self) -> [ScoreIndicator; 2] {
        [
            ScoreIndicator::business(self.application.business_score),
            ScoreIndicator::risk(self.application.risk_score),
        ]
    }

    /// Action items derived from the current checklist state
    #[must_use]
    pub fn action_items(&self) -> ActionItems {
        ActionItems::from_store(&self.checklist)
    }

    pub fn select_tab(&mut self, id: &str) -> Result<TabId, DashboardError> {
        self.tabs.select_id(id)
    }

    /// Click on an action item
    pub fn activate_action(
        &self,
        action: &str,
        navigator: &mut impl SectionNavigator,
    ) -> Result<(), DashboardError> {
        self.action_items().activate(action, navigator).map(|_| ())
    }

    /// Jump to the section an item points at; items without one are ignored
    pub fn focus_item(
        &self,
        item_id: &str,
        navigator: &mut impl SectionNavigator,
    ) -> Result<bool, DashboardError> {
        let item = self
            .checklist
            .get(item_id)
            .ok_or_else(|| ac_checklist::ChecklistError::UnknownItem(item_id.to_string()))?;
        match item.section_ref() {
            Some(section) => {
                navigator.navigate(section);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Selection-control change; illegal or unknown writes are ignored
    pub fn set_status(&mut self, item_id: &str, status: &str) {
        self.checklist.set_status(item_id, status);
    }

    /// Notes keystroke; unknown items are ignored
    pub fn set_notes(&mut self, item_id: &str, text: impl Into<String>) {
        self.checklist.set_notes(item_id, text);
    }

    /// Strict status write for scripted callers
    pub fn apply_status(&mut self, item_id: &str, status: &str) -> Result<StatusChange, DashboardError> {
        Ok(self.checklist.apply_status(item_id, status)?)
    }

    /// Strict notes write for scripted callers
    pub fn apply_notes(&mut self, item_id: &str, text: impl Into<String>) -> Result<(), DashboardError> {
        Ok(self.checklist.apply_notes(item_id, text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use ac_checklist::{ItemDefinition, Outcome, SectionRef, StatusDefinition};

    #[test]
    fn sample_session_defaults() {
        let session = ReviewSession::sample().unwrap();
        assert_eq!(session.tabs().active(), TabId::ActionCenter);
        assert_eq!(session.checklist().len(), 20);
        assert_eq!(session.application().business_name, "TechFlow Solutions LLC");
        assert_eq!(session.view().hovered_document(), None);
    }

    #[test]
    fn custom_definition_replaces_sample() {
        let definition = ChecklistDefinition {
            items: vec![ItemDefinition {
                id: "ein".to_string(),
                attribute: "EIN".to_string(),
                owner: None,
                instructions: String::new(),
                section: None,
                initial: None,
                statuses: vec![StatusDefinition::new("Not verified", Outcome::Unverified)],
            }],
        };
        let session = ReviewSession::new(SessionConfig::new().with_definition(definition)).unwrap();
        assert_eq!(session.checklist().len(), 1);

        let mut nav = RecordingNavigator::new();
        assert!(!session.focus_item("ein", &mut nav).unwrap());
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn invalid_definition_fails_to_open() {
        let definition = ChecklistDefinition {
            items: vec![ItemDefinition {
                id: "ein".to_string(),
                attribute: String::new(),
                owner: None,
                instructions: String::new(),
                section: None,
                initial: None,
                statuses: vec![StatusDefinition::new("Not verified", Outcome::Unverified)],
            }],
        };
        let err = ReviewSession::new(SessionConfig::new().with_definition(definition)).unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn focus_item_uses_section_ref() {
        let session = ReviewSession::sample().unwrap();
        let mut nav = RecordingNavigator::new();
        assert!(session.focus_item("business-watchlist", &mut nav).unwrap());
        assert_eq!(nav.last(), Some(&SectionRef::new("compliance")));
        assert!(matches!(
            session.focus_item("missing", &mut nav),
            Err(DashboardError::Checklist(_))
        ));
    }

    #[test]
    fn strict_writes_surface_errors() {
        let mut session = ReviewSession::sample().unwrap();
        let err = session.apply_status("formation-doc", "Automatically").unwrap_err();
        assert!(err.is_recoverable());
        assert!(session.apply_notes("formation-doc", "checked seal").is_ok());
        assert_eq!(session.checklist().get("formation-doc").unwrap().notes(), "checked seal");
    }
}
