//! CSV reading and writing.

mod header;
mod reader;
mod writer;

pub use header::{is_blank_row, normalize_cell, normalize_header};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_reader,
    read_csv_str, read_csv_table, validate_encoding,
};
pub use writer::{
    records_to_csv_string, write_raw_table_csv, write_records_csv, write_records_csv_file,
};
