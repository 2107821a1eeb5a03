//! Ingestion of marketplace templates and seller product files.
//!
//! This crate is the boundary between uploaded CSV files and the matcher:
//!
//! - **Templates**: one row per marketplace attribute, read into
//!   [`TargetField`](colmap_model::TargetField)s
//! - **Seller files**: the header row becomes
//!   [`SourceColumn`](colmap_model::SourceColumn)s, the first data rows
//!   provide sample values
//!
//! Duplicate names are rejected here so the matcher can assume unique
//! inputs.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use colmap_ingest::{read_seller_file, read_template};
//!
//! let targets = read_template(Path::new("templates/amazon.csv"))?;
//! let seller = read_seller_file(Path::new("uploads/products.csv"))?;
//! ```

#![deny(unsafe_code)]

mod csv;
mod error;

pub use crate::csv::{
    MAX_CSV_FILE_SIZE, MAX_SAMPLE_ROWS, check_csv_file, check_csv_file_with_limit,
    parse_seller_file, parse_template, read_seller_file, read_template,
};
pub use error::{IngestError, Result};
