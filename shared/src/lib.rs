use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod knowledge;

/// External map search opened from the "Find a Specialist" view.
pub const SPECIALIST_SEARCH_URL: &str =
    "https://www.google.com/maps/search/dermatologist+near+me";

/// Sensitivity threshold (percent) applied when the client does not send one.
pub const DEFAULT_THRESHOLD_PCT: f32 = 30.0;

/// Coarse urgency attached to each condition record. Drives display styling only.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    High,
    Critical,
    Unknown,
}

/// Visual tier the frontend maps a severity onto.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Routine,
    Elevated,
    Urgent,
}

impl Severity {
    pub fn tier(self) -> Tier {
        match self {
            Severity::Critical => Tier::Urgent,
            Severity::High => Tier::Elevated,
            Severity::Low | Severity::Unknown => Tier::Routine,
        }
    }
}

/// One ranked candidate from the classifier, score in [0, 1].
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ConditionRecord {
    pub severity: Severity,
    pub description: String,
    pub causes: String,
    pub treatment: String,
    pub action: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ChartEntry {
    pub label: String,
    pub pct: f32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct DiagnosisReport {
    pub condition: String,
    /// False when the label had no knowledge-base entry and the fallback
    /// record was substituted.
    pub matched: bool,
    pub confidence_pct: f32,
    pub record: ConditionRecord,
    pub chart: Vec<ChartEntry>,
}

/// Outcome of one analysis: either the confidence cleared the threshold and a
/// full report is available, or it did not.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Assessment {
    Inconclusive {
        confidence_pct: f32,
        threshold_pct: f32,
        shortfall_pct: f32,
        guidance: String,
    },
    Report(DiagnosisReport),
}
