//! CSV readers for templates and seller files.

mod file;
mod seller;
mod template;

pub use file::{MAX_CSV_FILE_SIZE, check_csv_file, check_csv_file_with_limit};
pub use seller::{MAX_SAMPLE_ROWS, parse_seller_file, read_seller_file};
pub use template::{parse_template, read_template};

use std::io::Read;

/// Reader shared by both file kinds: header row, ragged rows allowed,
/// cells trimmed.
fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Header names with a leading UTF-8 BOM removed.
fn header_names<R: Read>(reader: &mut csv::Reader<R>) -> crate::Result<Vec<String>> {
    Ok(reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect())
}
