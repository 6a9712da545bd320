//! Validation outcome types.
//!
//! A [`ValidationResult`] either carries the typed record set plus any
//! non-fatal warnings, or the single fatal [`ValidationError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::columns::StationColumn;
use crate::record_set::RecordSet;

/// Fatal validation failure. The upload must be fixed before it can be used.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Every required column absent after the `CIRY` rename, in catalogue order.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

impl ValidationError {
    pub fn missing_columns(columns: &[StationColumn]) -> Self {
        ValidationError::MissingColumns {
            columns: columns.iter().map(|c| c.header().to_string()).collect(),
        }
    }
}

/// Non-fatal finding reported alongside a usable record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// The upload has no data rows.
    NoData,
    /// A misspelled header was accepted under its canonical name.
    ColumnRenamed { from: String, to: String },
    /// Records with a blank latitude or longitude.
    MissingCoordinates { count: usize },
    /// Records whose latitude or longitude is not a number.
    UnparseableCoordinates { count: usize },
    /// Records whose coordinates lie outside the geographic range.
    CoordinatesOutOfRange { count: usize },
    /// An optional column is not present.
    OptionalColumnMissing { column: String },
    /// Values in an optional column that could not be read.
    InvalidOptionalValues { column: String, count: usize },
}

impl ValidationWarning {
    /// Number of affected records, when the warning counts records.
    pub fn count(&self) -> Option<usize> {
        match self {
            ValidationWarning::MissingCoordinates { count }
            | ValidationWarning::UnparseableCoordinates { count }
            | ValidationWarning::CoordinatesOutOfRange { count }
            | ValidationWarning::InvalidOptionalValues { count, .. } => Some(*count),
            ValidationWarning::NoData
            | ValidationWarning::ColumnRenamed { .. }
            | ValidationWarning::OptionalColumnMissing { .. } => None,
        }
    }

    /// True for warnings whose records lost their coordinates.
    pub fn is_coordinate_issue(&self) -> bool {
        matches!(
            self,
            ValidationWarning::MissingCoordinates { .. }
                | ValidationWarning::UnparseableCoordinates { .. }
                | ValidationWarning::CoordinatesOutOfRange { .. }
        )
    }

    /// Column the warning concerns, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            ValidationWarning::ColumnRenamed { to, .. } => Some(to),
            ValidationWarning::OptionalColumnMissing { column }
            | ValidationWarning::InvalidOptionalValues { column, .. } => Some(column),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::NoData => f.write_str("no data"),
            ValidationWarning::ColumnRenamed { from, to } => {
                write!(f, "column '{from}' renamed to '{to}'")
            }
            ValidationWarning::MissingCoordinates { count } => write!(
                f,
                "{count} records have no coordinates and will be left off the map"
            ),
            ValidationWarning::UnparseableCoordinates { count } => write!(
                f,
                "{count} records have non-numeric coordinates and will be left off the map"
            ),
            ValidationWarning::CoordinatesOutOfRange { count } => write!(
                f,
                "{count} records have invalid coordinates and will be left off the map"
            ),
            ValidationWarning::OptionalColumnMissing { column } => {
                write!(f, "optional column {column} is not present")
            }
            ValidationWarning::InvalidOptionalValues { column, count } => {
                write!(f, "{count} values in {column} could not be read")
            }
        }
    }
}

/// Outcome of validating one upload.
///
/// `ok()` is derived from the absence of an error, so a failed result always
/// names its error and a passing one never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub records: RecordSet,
    pub error: Option<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn passed(records: RecordSet, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            records,
            error: None,
            warnings,
        }
    }

    pub fn failed(error: ValidationError) -> Self {
        Self {
            records: RecordSet::default(),
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Total records whose coordinates were cleared.
    pub fn coordinate_issue_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|warning| warning.is_coordinate_issue())
            .filter_map(ValidationWarning::count)
            .sum()
    }

    pub fn into_result(self) -> Result<(RecordSet, Vec<ValidationWarning>), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.records, self.warnings)),
        }
    }
}
