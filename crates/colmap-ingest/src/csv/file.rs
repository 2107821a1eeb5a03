//! Checks applied to an uploaded file before it is parsed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Largest accepted upload (100 MiB).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate extension, size and encoding of a CSV upload.
pub fn check_csv_file(path: &Path) -> Result<()> {
    check_csv_file_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Like [`check_csv_file`] with a custom size limit.
pub fn check_csv_file_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(IngestError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    validate_encoding(path)
}

/// Open a checked file for reading.
pub(super) fn open(path: &Path) -> Result<File> {
    check_csv_file(path)?;
    File::open(path).map_err(|e| io_error(path, e))
}

fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| io_error(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "PRODUCTS.CSV", b"a,b\n1,2\n");
        assert!(check_csv_file(&path).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "products.xlsx", b"a,b\n1,2\n");
        assert!(matches!(
            check_csv_file(&path),
            Err(IngestError::NotCsv { .. })
        ));
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");
        assert!(matches!(
            check_csv_file(&path),
            Err(IngestError::FileNotFound { .. })
        ));
    }

    #[test]
    fn size_limit() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "big.csv", b"a,b\n1,2\n");
        match check_csv_file_with_limit(&path, 4) {
            Err(IngestError::FileTooLarge { size, max_size, .. }) => {
                assert_eq!(size, 8);
                assert_eq!(max_size, 4);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn utf16_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "wide.csv", &[0xFF, 0xFE, b'a', 0]);
        assert!(matches!(
            check_csv_file(&path),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
