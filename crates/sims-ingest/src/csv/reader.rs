//! CSV decoding into a [`RawTable`].
//!
//! The first non-blank row is the header. Fully blank rows are skipped,
//! short rows are padded with empty cells and long rows are truncated to the
//! header width.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use sims_model::RawTable;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::{is_blank_row, normalize_cell, normalize_header};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Reads a CSV file from disk.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = read_csv_reader(file).map_err(|e| match e {
        IngestError::Csv(source) => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        },
        other => other,
    })?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "read csv"
    );
    Ok(table)
}

/// Reads CSV from any byte stream.
pub fn read_csv_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table: Option<RawTable> = None;
    let mut ragged = 0usize;
    for record in reader.records() {
        let record = record?;
        if is_blank_row(&record.iter().collect::<Vec<_>>()) {
            continue;
        }
        match table.as_mut() {
            None => {
                let headers = record.iter().map(normalize_header).collect();
                table = Some(RawTable::new(headers));
            }
            Some(table) => {
                let row: Vec<String> = record.iter().map(normalize_cell).collect();
                if row.len() != table.headers.len() {
                    ragged += 1;
                }
                table.push_row(row);
            }
        }
    }

    if ragged > 0 {
        warn!(rows = ragged, "rows with a different cell count than the header");
    }
    Ok(table.unwrap_or_default())
}

/// Reads CSV from an in-memory string.
pub fn read_csv_str(content: &str) -> Result<RawTable> {
    read_csv_reader(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_str_basic() {
        let table = read_csv_str("CITY,SID_LAT\nJakarta,-6.2\nBandung,-6.9\n").unwrap();
        assert_eq!(table.headers, vec!["CITY", "SID_LAT"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Bandung", "-6.9"]);
    }

    #[test]
    fn test_read_csv_skips_blank_rows_and_pads() {
        let table = read_csv_str("\n,\nA,B,C\n1,2\n,,\n4,5,6,7\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows, vec![vec!["1", "2", ""], vec!["4", "5", "6"]]);
    }

    #[test]
    fn test_read_csv_empty_input() {
        let table = read_csv_str("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_csv_quoted_fields() {
        let table =
            read_csv_str("STN_NAME,CLNT_NAME\n\"Tower, North\",\"PT \"\"A\"\"\"\n").unwrap();
        assert_eq!(table.rows[0], vec!["Tower, North", "PT \"A\""]);
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}CITY,SID_LAT\nMedan,3.5952\n".as_bytes());
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["CITY", "SID_LAT"]);
    }

    #[test]
    fn test_read_csv_table_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/stations.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_check_file_size_with_limit() {
        let file = create_temp_csv(b"CITY\nJakarta\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 4),
            Err(IngestError::FileTooLarge { max_size: 4, .. })
        ));
    }
}
