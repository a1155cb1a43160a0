//! Scripted edits
//!
//! A replay script is a YAML or JSON list of edits applied in order to a
//! fresh session through the strict write surface:
//!
//! ```yaml
//! - { item: selfie-verification-bruce, status: Persona – manual }
//! - { item: selfie-verification-bruce, notes: Face match confirmed }
//! ```

use ac_checklist::{Progress, Readiness};
use ac_dashboard::ReviewSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported script format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid script: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatusEdit {
    pub item: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotesEdit {
    pub item: String,
    pub notes: String,
}

/// One scripted edit, told apart by its fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Edit {
    Status(StatusEdit),
    Notes(NotesEdit),
}

impl Edit {
    #[must_use]
    pub fn status(item: impl Into<String>, status: impl Into<String>) -> Self {
        Self::Status(StatusEdit {
            item: item.into(),
            status: status.into(),
        })
    }

    #[must_use]
    pub fn notes(item: impl Into<String>, notes: impl Into<String>) -> Self {
        Self::Notes(NotesEdit {
            item: item.into(),
            notes: notes.into(),
        })
    }

    #[must_use]
    pub fn item(&self) -> &str {
        match self {
            Self::Status(edit) => &edit.item,
            Self::Notes(edit) => &edit.item,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayScript {
    pub edits: Vec<Edit>,
}

impl ReplayScript {
    pub fn from_yaml_str(source: &str) -> Result<Self, ScriptError> {
        let edits = serde_yaml::from_str(source).map_err(|e| ScriptError::Parse(e.to_string()))?;
        Ok(Self { edits })
    }

    pub fn from_json_str(source: &str) -> Result<Self, ScriptError> {
        let edits = serde_json::from_str(source).map_err(|e| ScriptError::Parse(e.to_string()))?;
        Ok(Self { edits })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ScriptError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// What happened to one edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EditResult {
    Changed { previous: String, current: String },
    Unchanged,
    NotesUpdated,
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub step: usize,
    pub item: String,
    #[serde(flatten)]
    pub result: EditResult,
}

impl EditOutcome {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.result, EditResult::Rejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub outcomes: Vec<EditOutcome>,
    pub progress: Progress,
    pub readiness: Readiness,
    pub missing_notes: Vec<String>,
}

impl ReplayReport {
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rejected()).count()
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            write!(f, "{:>3}. {}: ", outcome.step, outcome.item)?;
            match &outcome.result {
                EditResult::Changed { previous, current } => {
                    writeln!(f, "{previous} -> {current}")?;
                }
                EditResult::Unchanged => writeln!(f, "unchanged")?,
                EditResult::NotesUpdated => writeln!(f, "notes updated")?,
                EditResult::Rejected { reason } => writeln!(f, "REJECTED ({reason})")?,
            }
        }
        writeln!(
            f,
            "Progress: {}/{} verified",
            self.progress.verified, self.progress.total
        )?;
        match self.readiness {
            Readiness::Ready => writeln!(f, "Ready for approval")?,
            Readiness::Pending { remaining } => writeln!(f, "{remaining} item(s) remaining")?,
            Readiness::NotApplicable => writeln!(f, "Nothing to approve")?,
        }
        if !self.missing_notes.is_empty() {
            writeln!(f, "Notes required: {}", self.missing_notes.join(", "))?;
        }
        Ok(())
    }
}

/// Apply every edit in order; rejected edits are recorded and skipped
pub fn replay(session: &mut ReviewSession, script: &ReplayScript) -> ReplayReport {
    let outcomes = script
        .edits
        .iter()
        .enumerate()
        .map(|(i, edit)| {
            let result = match edit {
                Edit::Status(StatusEdit { item, status }) => match session.apply_status(item, status) {
                    Ok(change) if change.is_noop() => EditResult::Unchanged,
                    Ok(change) => EditResult::Changed {
                        previous: change.previous,
                        current: change.current,
                    },
                    Err(e) => EditResult::Rejected {
                        reason: e.to_string(),
                    },
                },
                Edit::Notes(NotesEdit { item, notes }) => match session.apply_notes(item, notes.clone()) {
                    Ok(()) => EditResult::NotesUpdated,
                    Err(e) => EditResult::Rejected {
                        reason: e.to_string(),
                    },
                },
            };
            EditOutcome {
                step: i + 1,
                item: edit.item().to_string(),
                result,
            }
        })
        .collect();

    let store = session.checklist();
    ReplayReport {
        outcomes,
        progress: store.overall_progress(),
        readiness: store.readiness(),
        missing_notes: store
            .missing_notes()
            .iter()
            .map(|item| item.id().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_parse_by_shape() {
        let script = ReplayScript::from_yaml_str(
            "- { item: ein, status: Verified manually }\n- { item: ein, notes: IRS letter }\n",
        )
        .unwrap();
        assert_eq!(
            script.edits,
            vec![
                Edit::status("ein", "Verified manually"),
                Edit::notes("ein", "IRS letter"),
            ]
        );
    }

    #[test]
    fn ambiguous_edit_is_rejected() {
        let err = ReplayScript::from_json_str(r#"[{"item":"ein","status":"Verified","notes":"x"}]"#)
            .unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn unknown_extension() {
        assert!(matches!(
            ReplayScript::load("edits.txt"),
            Err(ScriptError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn report_counts_rejections() {
        let mut session = ReviewSession::sample().unwrap();
        let script = ReplayScript::from_json_str(
            r#"[
                {"item": "formation-doc", "status": "Automatically"},
                {"item": "formation-doc", "status": "Not verified"},
                {"item": "website", "status": "Verified"},
                {"item": "nope", "notes": "x"}
            ]"#,
        )
        .unwrap();
        let report = replay(&mut session, &script);
        assert_eq!(report.rejected(), 2);
        assert_eq!(report.outcomes[1].result, EditResult::Unchanged);
        assert_eq!(
            report.outcomes[2].result,
            EditResult::Changed {
                previous: "Not verified".to_string(),
                current: "Verified".to_string()
            }
        );
        assert_eq!(report.progress, Progress::new(1, 20));
        assert!(report.to_string().contains("REJECTED (checklist error: unknown checklist item: nope)"));
    }
}
