use serde::{Deserialize, Serialize};

/// Counts shown next to the mapping selectors.
///
/// A required field only counts as mapped when its current assignment is
/// non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary {
    /// Number of target fields in the template.
    pub total: usize,
    /// Target fields with a non-empty assignment.
    pub mapped: usize,
    /// Target fields flagged as required.
    pub required_total: usize,
    /// Required target fields with a non-empty assignment.
    pub required_mapped: usize,
}

impl MappingSummary {
    pub fn all_required_mapped(&self) -> bool {
        self.required_mapped == self.required_total
    }
}
