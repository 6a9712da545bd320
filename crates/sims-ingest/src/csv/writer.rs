//! CSV export.
//!
//! Records are written in the column layout they were uploaded with, so a
//! validated set can be read back and validated to the same records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use sims_model::{RawTable, RecordSet};

use crate::error::{IngestError, Result};

/// Writes `records` as CSV: one header row followed by one row per record.
pub fn write_records_csv<W: Write>(records: &RecordSet, writer: W) -> Result<()> {
    let headers = records.layout().headers();
    let mut csv = WriterBuilder::new().from_writer(writer);
    if headers.is_empty() {
        return Ok(());
    }
    csv.write_record(headers)?;
    for record in records {
        csv.write_record(
            headers
                .iter()
                .map(|header| record.cell(header).unwrap_or_default()),
        )?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders `records` as a CSV string.
pub fn records_to_csv_string(records: &RecordSet) -> Result<String> {
    let mut buffer = Vec::new();
    write_records_csv(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes `records` to a CSV file, replacing any existing file.
pub fn write_records_csv_file(records: &RecordSet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_records_csv(records, file)
}

/// Writes an unvalidated table as CSV.
pub fn write_raw_table_csv<W: Write>(table: &RawTable, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    if table.headers.is_empty() {
        return Ok(());
    }
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}
