//! Plain-text rendering
//!
//! Each view borrows what it shows and implements [`Display`], so callers
//! render with `to_string()` or `write!`.

use crate::action_items::ActionItems;
use crate::documents::{DocumentCheck, DocumentSet};
use crate::score::{ScoreIndicator, ScoreTone};
use crate::session::ReviewSession;
use crate::tabs::{TabBar, TabId};
use crate::view_state::{GroupKey, ViewState};
use ac_checklist::{ChecklistItem, ChecklistStore, Progress};
use std::fmt::{self, Display, Formatter};

fn tone_marker(tone: ScoreTone) -> &'static str {
    match tone {
        ScoreTone::Good => "+",
        ScoreTone::Caution => "~",
        ScoreTone::Alert => "!",
    }
}

fn check_mark(check: &DocumentCheck) -> String {
    let mark = if check.badge.is_pass() { "✓" } else { "✗" };
    format!("{mark} {}", check.badge.label())
}

/// Header bar: business name, ids, scores and submission date
pub struct HeaderView<'a>(pub &'a ReviewSession);

impl Display for HeaderView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let app = self.0.application();
        writeln!(f, "{} ({})", app.business_name, app.business_structure)?;
        writeln!(
            f,
            "ID: {}  Vertical: {}  Submitted {}",
            app.application_id, app.business_vertical, app.submission_date
        )?;
        let scores: Vec<String> = self
            .0
            .scores()
            .iter()
            .map(|s: &ScoreIndicator| {
                format!("[{}] {}/100 {}", tone_marker(s.tone()), s.score, s.label)
            })
            .collect();
        writeln!(f, "{}", scores.join("   "))
    }
}

pub struct TabBarView<'a>(pub &'a TabBar);

impl Display for TabBarView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self
            .0
            .tabs()
            .map(|(tab, active)| {
                if active {
                    format!("[{}]", tab.name())
                } else {
                    tab.name().to_string()
                }
            })
            .collect();
        writeln!(f, "{}", labels.join(" | "))
    }
}

pub struct ActionItemsView<'a>(pub &'a ActionItems);

impl Display for ActionItemsView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Action Items Required ({})", self.0.count())?;
        for item in self.0.items() {
            writeln!(f, "  - {:<36} {}  -> #{}", item.label, item.detail, item.section)?;
        }
        Ok(())
    }
}

/// Checklist grouped by owner; collapsed groups show only their summary line
pub struct ChecklistView<'a> {
    pub store: &'a ChecklistStore,
    pub view: &'a ViewState,
    pub expand_all: bool,
}

impl<'a> ChecklistView<'a> {
    #[must_use]
    pub fn expanded(store: &'a ChecklistStore, view: &'a ViewState) -> Self {
        Self {
            store,
            view,
            expand_all: true,
        }
    }

    fn group(
        &self,
        f: &mut Formatter<'_>,
        title: &str,
        key: &GroupKey,
        items: &[&ChecklistItem],
    ) -> fmt::Result {
        let progress = Progress::tally(items.iter().copied());
        let open = self.expand_all || self.view.is_expanded(key);
        writeln!(
            f,
            "{} {} ({}/{} verified)",
            if open { "v" } else { ">" },
            title,
            progress.verified,
            progress.total
        )?;
        if open {
            for item in items {
                item_line(f, item)?;
            }
        }
        Ok(())
    }
}

fn item_line(f: &mut Formatter<'_>, item: &ChecklistItem) -> fmt::Result {
    let mut flags = Vec::new();
    if item.is_locked() {
        flags.push("locked");
    }
    if item.is_automatic() {
        flags.push("automatic");
    }
    if item.is_missing_notes() {
        flags.push("notes required");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" ({})", flags.join(", "))
    };
    writeln!(
        f,
        "    [{}] {:<30} {}{}",
        if item.is_verified() { "x" } else { " " },
        item.attribute(),
        item.current_status(),
        flags
    )?;
    if !item.notes().is_empty() {
        writeln!(f, "        notes: {}", item.notes())?;
    }
    Ok(())
}

impl Display for ChecklistView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let overall = self.store.overall_progress();
        writeln!(
            f,
            "Manual Review Checklist: {}/{} verified{}",
            overall.verified,
            overall.total,
            if self.store.all_approved() && !self.store.is_empty() {
                ", ready for approval"
            } else {
                ""
            }
        )?;
        let groups = self.store.group_by_owner();
        if !groups.unscoped.is_empty() {
            self.group(f, "Business", &GroupKey::Business, &groups.unscoped)?;
        }
        for (owner, items) in &groups.owners {
            self.group(f, &format!("UBO: {owner}"), &GroupKey::owner(*owner), items)?;
        }
        Ok(())
    }
}

/// Formation document and upload history; a hovered thumbnail shows its preview
pub struct DocumentsView<'a> {
    pub documents: &'a DocumentSet,
    pub view: &'a ViewState,
}

impl Display for DocumentsView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc = &self.documents.current;
        writeln!(f, "Formation Document: {}", doc.file_name)?;
        if self.view.is_previewing(doc.preview_id) {
            writeln!(f, "  [PDF Preview: {}]", doc.title)?;
        }
        writeln!(
            f,
            "  Business Name: {}  Legitimacy: {}",
            check_mark(&doc.business_name),
            check_mark(&doc.legitimacy)
        )?;
        writeln!(f, "  {}", doc.assessment)?;
        writeln!(f, "  Uploaded: {} By: {}", doc.uploaded_at, doc.uploaded_by)?;

        writeln!(f, "Document History")?;
        for entry in &self.documents.history {
            writeln!(
                f,
                "  {:<14} {:<16} {:<16} {}",
                entry.upload_date,
                check_mark(&entry.business_name),
                check_mark(&entry.legitimacy),
                entry.uploaded_by
            )?;
            if self.view.is_previewing(entry.preview_id) {
                writeln!(f, "    [PDF Preview]")?;
            }
            for check in [&entry.business_name, &entry.legitimacy] {
                if let (Some(id), Some(text)) = (check.tooltip_id, check.tooltip) {
                    if self.view.tooltip() == Some(id) {
                        writeln!(f, "    ({text})")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Applicant details and questionnaire
pub struct ApplicantView<'a>(pub &'a ReviewSession);

impl Display for ApplicantView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let profile = self.0.applicant();
        writeln!(f, "Applicant Information")?;
        for field in &profile.entity_details {
            writeln!(f, "  {}: {}", field.label, field.display_value())?;
        }
        writeln!(f, "Basic Questionnaire")?;
        for field in profile.questionnaire.iter().chain(&profile.facts) {
            writeln!(f, "  {}: {}", field.label, field.display_value())?;
        }
        writeln!(f, "  Account use: {}", profile.account_uses.join(", "))?;
        writeln!(f, "Company activity")?;
        for row in &profile.activity {
            let volume = |v: &Option<crate::applicant::Volume>| match v {
                Some(v) => format!("{} / {}", v.transactions, v.amount),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "  {:<20} in: {:<36} out: {}",
                row.rail,
                volume(&row.incoming),
                volume(&row.outgoing)
            )?;
        }
        Ok(())
    }
}

/// Content of one tab
pub struct TabView<'a> {
    pub session: &'a ReviewSession,
    pub tab: TabId,
}

impl Display for TabView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(placeholder) = self.tab.placeholder() {
            writeln!(f, "{}", placeholder.heading)?;
            writeln!(f, "  {}", placeholder.description)?;
            return writeln!(f, "  {}", TabId::pending_note());
        }
        let session = self.session;
        write!(f, "{}", ActionItemsView(&session.action_items()))?;
        writeln!(f)?;
        write!(f, "{}", ApplicantView(session))?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            DocumentsView {
                documents: session.documents(),
                view: session.view(),
            }
        )?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            ChecklistView {
                store: session.checklist(),
                view: session.view(),
                expand_all: false,
            }
        )
    }
}

/// Whole page: header, tab bar and the active tab
pub struct SessionView<'a>(pub &'a ReviewSession);

impl Display for SessionView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HeaderView(self.0))?;
        write!(f, "{}", TabBarView(self.0.tabs()))?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            TabView {
                session: self.0,
                tab: self.0.tabs().active(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_scores() {
        let session = ReviewSession::sample().unwrap();
        let text = HeaderView(&session).to_string();
        assert!(text.starts_with("TechFlow Solutions LLC (LLC)"));
        assert!(text.contains("[+] 78/100 Business Score"));
        assert!(text.contains("[+] 34/100 Risk Score"));
    }

    #[test]
    fn tab_bar_marks_active_tab() {
        let mut session = ReviewSession::sample().unwrap();
        session.select_tab("decisioning").unwrap();
        let text = TabBarView(session.tabs()).to_string();
        assert!(text.contains("[Decisioning]"));
        assert!(text.contains("Action Center |"));
    }

    #[test]
    fn collapsed_groups_hide_items() {
        let mut session = ReviewSession::sample().unwrap();
        let collapsed = ChecklistView {
            store: session.checklist(),
            view: session.view(),
            expand_all: false,
        }
        .to_string();
        assert!(collapsed.contains("> UBO: Bruce Wayne (0/5 verified)"));
        assert!(!collapsed.contains("Selfie Verification"));

        session.view_mut().toggle_group(GroupKey::owner("Bruce Wayne"));
        let opened = ChecklistView {
            store: session.checklist(),
            view: session.view(),
            expand_all: false,
        }
        .to_string();
        assert!(opened.contains("v UBO: Bruce Wayne (0/5 verified)"));
        assert!(opened.contains("Selfie Verification"));
        assert!(opened.contains("> UBO: Clark Kent"));
    }

    #[test]
    fn item_flags_are_rendered() {
        let mut session = ReviewSession::sample().unwrap();
        session.set_status("business-watchlist", "Escalated to compliance");
        let text = ChecklistView::expanded(session.checklist(), session.view()).to_string();
        assert!(text.contains("Escalated to compliance (locked, notes required)"));
    }

    #[test]
    fn placeholder_tab() {
        let session = ReviewSession::sample().unwrap();
        let text = TabView {
            session: &session,
            tab: TabId::Risk,
        }
        .to_string();
        assert!(text.starts_with("Risk Assessment"));
        assert!(text.contains("Content to be populated in next iteration."));
    }

    #[test]
    fn hovered_document_shows_preview() {
        let mut session = ReviewSession::sample().unwrap();
        session.view_mut().hover_document("main");
        session.view_mut().show_tooltip("business-unverified");
        let text = DocumentsView {
            documents: session.documents(),
            view: session.view(),
        }
        .to_string();
        assert!(text.contains("[PDF Preview: Certificate of Formation]"));
        assert!(text.contains("(Business name does not match)"));
    }
}
