//! Value types shared by the column mapping crates.
//!
//! Everything here is plain data: marketplace template attributes
//! ([`TargetField`]), seller file columns ([`SourceColumn`]) and the
//! assignments built between them. None of these types own storage.

#![deny(unsafe_code)]

pub mod assignment;
pub mod column;
pub mod error;
pub mod field;
pub mod summary;

pub use assignment::{Assignment, ColumnMapping, MappingRecord};
pub use column::{SellerFile, SourceColumn};
pub use error::ModelError;
pub use field::{AttributeType, TargetField};
pub use summary::MappingSummary;
