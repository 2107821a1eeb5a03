//! Error types for template and seller file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading templates or seller files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File does not have a `.csv` extension.
    #[error("not a CSV file: {path}")]
    NotCsv { path: PathBuf },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}, expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no usable column names.
    #[error("no valid column headers found")]
    NoHeaders,

    /// File has a header but no data rows.
    #[error("CSV file must have a header row and at least one data row")]
    NoDataRows,

    // === Template Errors ===
    /// Template header lacks a mandatory column.
    #[error("template header has no '{column}' column")]
    MissingColumn { column: &'static str },

    /// Template cell could not be interpreted.
    #[error("invalid {field} value '{value}' on line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        line: u64,
    },

    /// Template has no usable attribute rows.
    #[error("no valid attributes found in template")]
    NoAttributes,

    // === Name Checks ===
    /// The same attribute or column name appears twice.
    #[error("duplicate name '{name}'")]
    DuplicateName { name: String },

    /// Wraps any of the above with the file it came from.
    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<IngestError>,
    },
}

impl IngestError {
    /// Attach the originating file, unless already attached.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ (Self::InFile { .. }
            | Self::FileNotFound { .. }
            | Self::FileRead { .. }
            | Self::NotCsv { .. }
            | Self::FileTooLarge { .. }
            | Self::UnsupportedEncoding { .. }) => already,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/uploads/products.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /uploads/products.csv");
    }

    #[test]
    fn in_file_wraps_parse_errors_once() {
        let err = IngestError::NoAttributes.in_file("t.csv").in_file("other.csv");
        assert_eq!(err.to_string(), "t.csv: no valid attributes found in template");
    }

    #[test]
    fn in_file_leaves_file_errors_alone() {
        let err = IngestError::NotCsv {
            path: PathBuf::from("a.txt"),
        }
        .in_file("a.txt");
        assert!(matches!(err, IngestError::NotCsv { .. }));
    }
}
