//! Mapping counts and the required-field gate applied before saving.

use colmap_model::{Assignment, MappingSummary, TargetField};
use serde::{Deserialize, Serialize};

/// Count mapped and required fields for display.
///
/// Only fields of the template are counted; stray entries in `assignment`
/// for names not in `targets` are ignored.
pub fn summarize(targets: &[TargetField], assignment: &Assignment) -> MappingSummary {
    let mut summary = MappingSummary {
        total: targets.len(),
        ..MappingSummary::default()
    };
    for target in targets {
        let mapped = assignment.is_mapped(&target.name);
        if mapped {
            summary.mapped += 1;
        }
        if target.required {
            summary.required_total += 1;
            if mapped {
                summary.required_mapped += 1;
            }
        }
    }
    summary
}

/// Unmapped template fields, split by whether they block saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Required fields without a column, in template order.
    pub missing_required: Vec<String>,
    /// Optional fields without a column, in template order.
    pub unmapped_optional: Vec<String>,
}

impl CompletenessReport {
    /// Saving must be refused.
    pub fn is_blocked(&self) -> bool {
        !self.missing_required.is_empty()
    }

    /// Saving is allowed, but the user should confirm leaving optional
    /// fields empty.
    pub fn needs_confirmation(&self) -> bool {
        !self.is_blocked() && !self.unmapped_optional.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required.is_empty() && self.unmapped_optional.is_empty()
    }
}

pub fn check_completeness(targets: &[TargetField], assignment: &Assignment) -> CompletenessReport {
    let mut report = CompletenessReport::default();
    for target in targets {
        if assignment.is_mapped(&target.name) {
            continue;
        }
        if target.required {
            report.missing_required.push(target.name.clone());
        } else {
            report.unmapped_optional.push(target.name.clone());
        }
    }
    report
}
