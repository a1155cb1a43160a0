//! Subcommand bodies
//!
//! Each command returns the text to print so the binary stays a thin
//! argument parser.

use crate::replay::{replay, ReplayReport, ReplayScript};
use ac_checklist::ChecklistDefinition;
use ac_dashboard::render::{ActionItemsView, ChecklistView, HeaderView, TabView};
use ac_dashboard::{ChecklistSnapshot, ReviewSession, SessionConfig, TabId};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Open a session over `definition`, or the built-in sample
pub fn open_session(definition: Option<&Path>) -> Result<ReviewSession> {
    let mut config = SessionConfig::new();
    if let Some(path) = definition {
        let loaded = ChecklistDefinition::load(path)
            .with_context(|| format!("Failed to load definition {}", path.display()))?;
        config = config.with_definition(loaded);
    }
    ReviewSession::new(config).context("Failed to open review session")
}

pub fn summary(session: &ReviewSession) -> String {
    let mut out = HeaderView(session).to_string();
    out.push('\n');
    out.push_str(&ActionItemsView(&session.action_items()).to_string());
    out
}

pub fn checklist(session: &ReviewSession, json: bool) -> Result<String> {
    if json {
        return ChecklistSnapshot::capture(session.checklist())
            .to_json_pretty()
            .context("Failed to serialize checklist");
    }
    Ok(ChecklistView::expanded(session.checklist(), session.view()).to_string())
}

pub fn tab(session: &mut ReviewSession, id: &str) -> Result<String> {
    let tab: TabId = session
        .select_tab(id)
        .with_context(|| format!("Cannot open tab {id:?}"))?;
    Ok(TabView {
        session: &*session,
        tab,
    }
    .to_string())
}

pub fn run_replay(session: &mut ReviewSession, script: &Path) -> Result<ReplayReport> {
    let script = ReplayScript::load(script)
        .with_context(|| format!("Failed to load replay script {}", script.display()))?;
    tracing::info!(edits = script.edits.len(), "Replaying edits");
    Ok(replay(session, &script))
}

pub fn validate(path: &Path) -> Result<String> {
    let definition = ChecklistDefinition::load(path)
        .with_context(|| format!("Failed to load definition {}", path.display()))?;
    definition
        .validate()
        .with_context(|| format!("Invalid definition {}", path.display()))?;
    let owners = definition
        .items
        .iter()
        .filter_map(|item| item.owner.as_deref())
        .collect::<HashSet<_>>()
        .len();
    Ok(format!(
        "{}: {} item(s), {} owner(s), OK",
        path.display(),
        definition.items.len(),
        owners
    ))
}
