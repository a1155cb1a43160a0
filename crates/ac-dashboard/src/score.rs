//! Score indicators
//!
//! Business and risk scores share the 70/50 thresholds but read in opposite
//! directions: a high business score is good, a high risk score is not.

use serde::Serialize;

const HIGH: u8 = 70;
const MEDIUM: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Business,
    Risk,
}

/// Color band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTone {
    Good,
    Caution,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreIcon {
    TrendingUp,
    AlertTriangle,
    CheckCircle,
}

/// A score with its label and derived presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreIndicator {
    pub score: u8,
    pub label: &'static str,
    pub kind: ScoreKind,
}

impl ScoreIndicator {
    #[must_use]
    pub fn business(score: u8) -> Self {
        Self {
            score,
            label: "Business Score",
            kind: ScoreKind::Business,
        }
    }

    #[must_use]
    pub fn risk(score: u8) -> Self {
        Self {
            score,
            label: "Risk Score",
            kind: ScoreKind::Risk,
        }
    }

    #[must_use]
    pub fn tone(&self) -> ScoreTone {
        let band = if self.score >= HIGH {
            2
        } else if self.score >= MEDIUM {
            1
        } else {
            0
        };
        match (self.kind, band) {
            (_, 1) => ScoreTone::Caution,
            (ScoreKind::Business, 2) | (ScoreKind::Risk, 0) => ScoreTone::Good,
            _ => ScoreTone::Alert,
        }
    }

    #[must_use]
    pub fn icon(&self) -> ScoreIcon {
        match (self.kind, self.score >= HIGH) {
            (ScoreKind::Business, true) => ScoreIcon::TrendingUp,
            (ScoreKind::Business, false) | (ScoreKind::Risk, true) => ScoreIcon::AlertTriangle,
            (ScoreKind::Risk, false) => ScoreIcon::CheckCircle,
        }
    }
}
