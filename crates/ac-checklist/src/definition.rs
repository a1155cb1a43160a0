//! Checklist definitions
//!
//! A definition is the fixed, declarative description a session is seeded
//! from: items, their taxonomy tables, owner scoping and instructions.
//! Definitions can be written in YAML, TOML or JSON:
//!
//! ```yaml
//! items:
//!   - id: formation-doc
//!     attribute: Formation Document
//!     section: applicant-info
//!     statuses:
//!       - { status: Not verified, outcome: unverified }
//!       - { status: Automatically, outcome: verified, class: automatic, locked: true }
//!       - { status: Verified manually, outcome: verified, notes_required: true }
//! ```

use crate::error::DefinitionError;
use crate::item::{ChecklistItem, ItemId, SectionRef};
use crate::taxonomy::{Outcome, StatusClass, StatusSpec, Taxonomy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One row of an item's taxonomy table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDefinition {
    pub status: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub class: StatusClass,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub notes_required: bool,
}

impl StatusDefinition {
    /// Manual, unlocked status with optional notes
    #[must_use]
    pub fn new(status: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            status: status.into(),
            outcome,
            class: StatusClass::Manual,
            locked: false,
            notes_required: false,
        }
    }

    #[must_use]
    pub fn automatic(mut self) -> Self {
        self.class = StatusClass::Automatic;
        self
    }

    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    #[must_use]
    pub fn with_notes(mut self) -> Self {
        self.notes_required = true;
        self
    }

    fn spec(&self) -> StatusSpec {
        StatusSpec {
            outcome: self.outcome,
            class: self.class,
            locked: self.locked,
            notes_required: self.notes_required,
        }
    }
}

/// Declarative description of one checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub attribute: String,
    /// Beneficial owner the item is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub instructions: String,
    /// Opaque navigation target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Starting status; defaults to the first unverified status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    pub statuses: Vec<StatusDefinition>,
}

impl ItemDefinition {
    fn taxonomy(&self) -> Result<Taxonomy, DefinitionError> {
        let mut taxonomy = Taxonomy::new();
        for row in &self.statuses {
            if row.status.trim().is_empty() {
                return Err(DefinitionError::EmptyStatus(self.id.clone()));
            }
            if taxonomy.insert(row.status.clone(), row.spec()).is_some() {
                return Err(DefinitionError::DuplicateStatus {
                    item: self.id.clone(),
                    status: row.status.clone(),
                });
            }
        }
        if taxonomy.is_empty() {
            return Err(DefinitionError::EmptyTaxonomy(self.id.clone()));
        }
        Ok(taxonomy)
    }

    fn initial_status(&self, taxonomy: &Taxonomy) -> Result<String, DefinitionError> {
        let baseline = taxonomy
            .baseline()
            .ok_or_else(|| DefinitionError::NoBaseline(self.id.clone()))?;
        match &self.initial {
            Some(status) if taxonomy.contains(status) => Ok(status.clone()),
            Some(status) => Err(DefinitionError::UnknownInitialStatus {
                item: self.id.clone(),
                status: status.clone(),
            }),
            None => Ok(baseline.to_string()),
        }
    }

    fn build(&self) -> Result<ChecklistItem, DefinitionError> {
        if self.attribute.trim().is_empty() {
            return Err(DefinitionError::EmptyAttribute(self.id.clone()));
        }
        if self.owner.as_deref().is_some_and(|o| o.trim().is_empty()) {
            return Err(DefinitionError::EmptyOwner(self.id.clone()));
        }
        let taxonomy = self.taxonomy()?;
        let initial = self.initial_status(&taxonomy)?;
        Ok(ChecklistItem::seeded(
            ItemId::new(self.id.clone()),
            self.attribute.clone(),
            taxonomy,
            initial,
            self.owner.clone(),
            self.instructions.clone(),
            self.section.as_deref().map(SectionRef::new),
        ))
    }
}

/// Full checklist definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDefinition {
    pub items: Vec<ItemDefinition>,
}

impl ChecklistDefinition {
    pub fn from_yaml_str(source: &str) -> Result<Self, DefinitionError> {
        serde_yaml::from_str(source).map_err(|e| DefinitionError::Parse {
            format: "yaml",
            message: e.to_string(),
        })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DefinitionError> {
        toml::from_str(source).map_err(|e| DefinitionError::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }

    pub fn from_json_str(source: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(source).map_err(|e| DefinitionError::Parse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Load a definition file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, DefinitionError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            other => return Err(DefinitionError::UnsupportedFormat(other.to_string())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definition = parse(&source)?;
        tracing::debug!(
            "Loaded checklist definition with {} items from {}",
            definition.items.len(),
            path.display()
        );
        Ok(definition)
    }

    /// Check the definition without seeding
    pub fn validate(&self) -> Result<(), DefinitionError> {
        self.seed().map(|_| ())
    }

    /// Build the session's items in definition order
    pub fn seed(&self) -> Result<Vec<ChecklistItem>, DefinitionError> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .enumerate()
            .map(|(index, def)| {
                if def.id.trim().is_empty() {
                    return Err(DefinitionError::EmptyId { index });
                }
                if !seen.insert(def.id.as_str()) {
                    return Err(DefinitionError::DuplicateId(def.id.clone()));
                }
                def.build()
            })
            .collect()
    }
}
