//! Seller product file parsing.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use colmap_model::{SellerFile, SourceColumn};
use tracing::{info, warn};

use super::{file, header_names, reader};
use crate::error::{IngestError, Result};

/// Data rows scanned for sample values.
pub const MAX_SAMPLE_ROWS: usize = 3;

/// Read a seller product file from disk.
pub fn read_seller_file(path: &Path) -> Result<SellerFile> {
    let input = file::open(path)?;
    let seller = parse_seller_file(input).map_err(|e| e.in_file(path))?;
    info!(
        path = %path.display(),
        columns = seller.columns.len(),
        rows = seller.row_count,
        "seller file loaded"
    );
    Ok(seller)
}

/// Parse seller CSV content.
///
/// The header row names the columns; blank header cells are dropped.
/// Each column collects the non-empty cells of the first
/// [`MAX_SAMPLE_ROWS`] data rows as samples.
pub fn parse_seller_file<R: Read>(input: R) -> Result<SellerFile> {
    let mut rdr = reader(input);
    let headers = header_names(&mut rdr)?;

    let mut seen = HashSet::new();
    let mut slots = Vec::new();
    for (idx, name) in headers.into_iter().enumerate() {
        if name.is_empty() {
            warn!(position = idx + 1, "skipping column without header");
            continue;
        }
        if !seen.insert(name.clone()) {
            return Err(IngestError::DuplicateName { name });
        }
        slots.push((idx, SourceColumn::new(name)));
    }
    if slots.is_empty() {
        return Err(IngestError::NoHeaders);
    }

    let mut row_count = 0;
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if row_count < MAX_SAMPLE_ROWS {
            for (idx, column) in &mut slots {
                if let Some(value) = record.get(*idx).filter(|v| !v.is_empty()) {
                    column.sample_values.push(value.to_string());
                }
            }
        }
        row_count += 1;
    }
    if row_count == 0 {
        return Err(IngestError::NoDataRows);
    }

    Ok(SellerFile {
        columns: slots.into_iter().map(|(_, column)| column).collect(),
        row_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_columns_rows_and_samples() {
        let csv = "SKU, Product Title ,Price\nA-1,Mug,9.99\nA-2,,4.50\nA-3,Plate,\nA-4,Bowl,3\n";
        let seller = parse_seller_file(csv.as_bytes()).unwrap();

        assert_eq!(
            seller.column_names().collect::<Vec<_>>(),
            vec!["SKU", "Product Title", "Price"]
        );
        assert_eq!(seller.row_count, 4);
        assert_eq!(seller.columns[0].sample_values, vec!["A-1", "A-2", "A-3"]);
        assert_eq!(seller.columns[1].sample_values, vec!["Mug", "Plate"]);
        assert_eq!(seller.columns[2].sample_values, vec!["9.99", "4.50"]);
    }

    #[test]
    fn header_only_file() {
        let err = parse_seller_file("SKU,Title\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::NoDataRows));
    }

    #[test]
    fn blank_headers() {
        let err = parse_seller_file(" , \n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::NoHeaders));
    }

    #[test]
    fn blank_header_cell_is_dropped() {
        let seller = parse_seller_file("SKU,,Title\n1,x,Mug\n".as_bytes()).unwrap();
        assert_eq!(seller.column_names().collect::<Vec<_>>(), vec!["SKU", "Title"]);
        assert_eq!(seller.columns[1].sample_values, vec!["Mug"]);
    }

    #[test]
    fn duplicate_column() {
        let err = parse_seller_file("SKU,Title,SKU\n1,2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "duplicate name 'SKU'");
    }

    #[test]
    fn short_rows_are_tolerated() {
        let seller = parse_seller_file("SKU,Title,Brand\n1\n2,Mug\n".as_bytes()).unwrap();
        assert_eq!(seller.row_count, 2);
        assert_eq!(seller.columns[2].sample_values, Vec::<String>::new());
    }
}
