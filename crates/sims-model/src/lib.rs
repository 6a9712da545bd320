//! Frequency station record model.
//!
//! Types shared by ingestion, validation, reduction and reporting:
//! the upload column catalogue, typed [`Record`]s grouped in a [`RecordSet`],
//! the [`ValidationResult`] contract and the [`SamplingStrategy`] choice.

pub mod columns;
pub mod error;
pub mod record;
pub mod record_set;
pub mod sampling;
pub mod table;
pub mod validation;

pub use columns::{CITY_TYPO, StationColumn, is_city_typo};
pub use error::{ModelError, Result};
pub use record::{
    Coordinates, LATITUDE_RANGE, LONGITUDE_RANGE, ParsedValue, Position, Record, in_range,
};
pub use record_set::{ColumnLayout, RecordSet};
pub use sampling::SamplingStrategy;
pub use table::RawTable;
pub use validation::{ValidationError, ValidationResult, ValidationWarning};
