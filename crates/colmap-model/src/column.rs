use serde::{Deserialize, Serialize};

/// A column header discovered in an uploaded seller product file.
///
/// `sample_values` holds a handful of non-empty cells for display; the
/// matcher ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceColumn {
    pub name: String,
    #[serde(default, rename = "sampleData")]
    pub sample_values: Vec<String>,
}

impl SourceColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sample_values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_samples(mut self, samples: Vec<String>) -> Self {
        self.sample_values = samples;
        self
    }
}

/// Columns and row count of a parsed seller product file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerFile {
    pub columns: Vec<SourceColumn>,
    pub row_count: usize,
}

impl SellerFile {
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
