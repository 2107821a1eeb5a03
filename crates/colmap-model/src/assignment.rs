//! Target-to-source assignments and their persisted, inverted form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from target field name to the source column chosen for it.
///
/// An empty value means "unmapped"; it is kept so that a caller can record
/// an explicit clear. [`Assignment::is_mapped`] and
/// [`Assignment::mapped_count`] only count non-empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    entries: BTreeMap<String, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source column for `target`, or `None` when absent or empty.
    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries
            .get(target)
            .map(String::as_str)
            .filter(|source| !source.is_empty())
    }

    pub fn set(&mut self, target: impl Into<String>, source: impl Into<String>) {
        self.entries.insert(target.into(), source.into());
    }

    /// Mark `target` as explicitly unmapped.
    pub fn clear(&mut self, target: &str) {
        if let Some(source) = self.entries.get_mut(target) {
            source.clear();
        }
    }

    pub fn is_mapped(&self, target: &str) -> bool {
        self.get(target).is_some()
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.values().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.mapped_count() == 0
    }

    /// Mapped entries in target-name order, skipping empty values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, source)| !source.is_empty())
            .map(|(target, source)| (target.as_str(), source.as_str()))
    }

    /// Invert into the `source -> target` direction used for storage.
    pub fn to_column_mapping(&self) -> ColumnMapping {
        let mut entries = BTreeMap::new();
        for (target, source) in self.iter() {
            entries.insert(source.to_string(), target.to_string());
        }
        ColumnMapping { entries }
    }
}

impl FromIterator<(String, String)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Mapping from seller column name to marketplace attribute name.
///
/// This is the direction the mapping store keys on. It only ever contains
/// non-empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    /// Turn a stored mapping back into an editable [`Assignment`].
    ///
    /// Entries with an empty side are dropped.
    pub fn to_assignment(&self) -> Assignment {
        self.iter()
            .filter(|(source, target)| !source.is_empty() && !target.is_empty())
            .map(|(source, target)| (target.to_string(), source.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .filter(|(source, target)| !source.is_empty() && !target.is_empty())
                .collect(),
        }
    }
}

/// Payload handed to the mapping store once the user confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub marketplace_id: String,
    pub seller_file_id: String,
    pub column_mapping: ColumnMapping,
}

impl MappingRecord {
    pub fn mapping_count(&self) -> usize {
        self.column_mapping.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_unmapped() {
        let mut assignment = Assignment::new();
        assignment.set("sku", "SKU");
        assignment.set("title", "");
        assert!(assignment.is_mapped("sku"));
        assert!(!assignment.is_mapped("title"));
        assert_eq!(assignment.get("title"), None);
        assert_eq!(assignment.mapped_count(), 1);
    }

    #[test]
    fn clear_keeps_explicit_empty_entry() {
        let mut assignment = Assignment::new();
        assignment.set("sku", "SKU");
        assignment.clear("sku");
        assert!(!assignment.is_mapped("sku"));
        assert!(assignment.is_empty());
        assert_eq!(assignment.iter().count(), 0);
    }

    #[test]
    fn column_mapping_inverts_and_drops_empty() {
        let mut assignment = Assignment::new();
        assignment.set("sku", "SKU");
        assignment.set("title", "Product Title");
        assignment.set("brand", "");

        let mapping = assignment.to_column_mapping();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("SKU"), Some("sku"));
        assert_eq!(mapping.get("Product Title"), Some("title"));

        assert_eq!(mapping.to_assignment(), {
            let mut expected = Assignment::new();
            expected.set("sku", "SKU");
            expected.set("title", "Product Title");
            expected
        });
    }
}
