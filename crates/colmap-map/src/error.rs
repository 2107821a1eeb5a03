//! Error types for mapping sessions.

use thiserror::Error;

/// Errors from editing or finalizing a mapping.
///
/// The matcher itself never fails; these only come from
/// [`MappingSession`](crate::MappingSession) commands and exports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Target field is not part of the loaded template.
    #[error("unknown target field: {0}")]
    UnknownTarget(String),

    /// Column is not part of the loaded seller file.
    #[error("unknown source column: {0}")]
    UnknownSource(String),

    /// Required target fields are still unmapped.
    #[error("required fields are not mapped: {}", .fields.join(", "))]
    RequiredUnmapped { fields: Vec<String> },

    /// One column feeds several target fields, which the stored
    /// source-to-target form cannot hold.
    #[error("column {column} is mapped to several fields: {}", .targets.join(", "))]
    SharedColumn { column: String, targets: Vec<String> },

    /// Nothing is mapped, so there is nothing to save.
    #[error("no columns are mapped")]
    NoMappedColumns,
}

pub type Result<T> = std::result::Result<T, MappingError>;
