//! Station data ingestion and export.
//!
//! This crate decodes uploaded CSV files into a [`RawTable`](sims_model::RawTable)
//! for the validator, writes validated record sets back out as CSV, and
//! converts record sets into Polars DataFrames for chart and map consumers.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sims_ingest::{read_csv_table, records_to_csv_string};
//!
//! let table = read_csv_table(Path::new("stations.csv"))?;
//! let result = sims_validate::validate(&table);
//! let csv = records_to_csv_string(&result.records)?;
//! ```

mod csv;
mod error;
mod frame;
mod template;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use self::csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, is_blank_row,
    normalize_cell, normalize_header, read_csv_reader, read_csv_str, read_csv_table,
    records_to_csv_string, validate_encoding, write_raw_table_csv, write_records_csv,
    write_records_csv_file,
};

// === DataFrame Bridge ===
pub use frame::records_to_dataframe;

// === Sample Template ===
pub use template::{sample_template, write_sample_template};
