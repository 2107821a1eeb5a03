//! Per-attribute mapping report printed by `colmap suggest`.

use colmap_map::{MappingSession, similarity};
use colmap_model::{AttributeType, MappingSummary};
use serde::Serialize;

/// One template attribute and the column chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub target: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub source_column: Option<String>,
    /// Similarity of target and chosen column names.
    pub score: Option<f64>,
    /// Sample cells of the chosen column.
    pub samples: Vec<String>,
}

/// Outcome of the completeness check, in the order a user resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every attribute has a column.
    Ready,
    /// Only optional attributes are unmapped.
    NeedsConfirmation,
    /// A required attribute is unmapped.
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestReport {
    pub rows: Vec<ReportRow>,
    pub summary: MappingSummary,
    pub missing_required: Vec<String>,
    pub unmapped_optional: Vec<String>,
    pub verdict: Verdict,
}

impl SuggestReport {
    /// Snapshot the current state of a session, in template order.
    pub fn from_session(session: &MappingSession) -> Self {
        let assignment = session.assignment();
        let rows = session
            .targets()
            .iter()
            .map(|target| {
                let source = assignment.get(&target.name);
                let samples = source
                    .and_then(|name| session.sources().iter().find(|c| c.name == name))
                    .map(|column| column.sample_values.clone())
                    .unwrap_or_default();
                ReportRow {
                    target: target.name.clone(),
                    required: target.required,
                    attribute_type: target.attribute_type,
                    source_column: source.map(String::from),
                    score: source.map(|name| similarity(&target.name, name)),
                    samples,
                }
            })
            .collect();

        let check = session.check();
        let verdict = if check.is_blocked() {
            Verdict::Blocked
        } else if check.needs_confirmation() {
            Verdict::NeedsConfirmation
        } else {
            Verdict::Ready
        };
        Self {
            rows,
            summary: session.summary(),
            missing_required: check.missing_required,
            unmapped_optional: check.unmapped_optional,
            verdict,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.verdict == Verdict::Blocked
    }

    /// Plain-text counts and verdict shown below the table.
    pub fn summary_text(&self) -> String {
        let s = &self.summary;
        let mut lines = vec![format!(
            "Mapped {} of {} attributes ({} of {} required)",
            s.mapped, s.total, s.required_mapped, s.required_total
        )];
        if !self.missing_required.is_empty() {
            lines.push(format!("Missing required: {}", self.missing_required.join(", ")));
        }
        if !self.unmapped_optional.is_empty() {
            lines.push(format!("Unmapped optional: {}", self.unmapped_optional.join(", ")));
        }
        let status = match self.verdict {
            Verdict::Ready => "ready to save",
            Verdict::NeedsConfirmation => {
                "ready to save once unmapped optional attributes are confirmed"
            }
            Verdict::Blocked => "blocked until every required attribute is mapped",
        };
        lines.push(format!("Status: {status}"));
        lines.join("\n")
    }
}

/// Exit code of `colmap suggest`: non-zero when the report could not be
/// printed or a required attribute is unmapped.
pub fn suggest_exit_code(report: &SuggestReport, printed: bool) -> i32 {
    if printed && !report.is_blocked() { 0 } else { 1 }
}
