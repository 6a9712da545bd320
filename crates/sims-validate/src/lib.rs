//! Station upload validation.
//!
//! [`validate`] turns a decoded [`RawTable`] into a typed [`RecordSet`]
//! exactly once, at the boundary. Missing required columns are the only fatal
//! outcome; everything else is reported as a [`ValidationWarning`] while the
//! affected values are cleared or kept as text.

pub mod checks;
mod util;

use std::time::Instant;

use sims_model::{
    ColumnLayout, RawTable, RecordSet, ValidationError, ValidationResult, ValidationWarning,
};
use tracing::{debug, info, warn};

pub use checks::coordinates::{CoordinateReading, parse_finite, read_coordinates};
pub use checks::optional::{parse_date, parse_measurement};
pub use util::CaseInsensitiveIndex;

use checks::coordinates::CoordinateTally;
use checks::optional::OptionalTally;

/// Validate an upload table.
///
/// - No header row, or a header row without data rows: `ok` with the single
///   warning [`ValidationWarning::NoData`].
/// - Required columns absent (after accepting `CIRY` for `CITY`): not `ok`,
///   with every missing column named in the error.
/// - Otherwise `ok`, with one record per row in upload order.
pub fn validate(table: &RawTable) -> ValidationResult {
    let start = Instant::now();

    if table.headers.is_empty() {
        debug!("upload has no header row");
        return ValidationResult::passed(
            RecordSet::empty(ColumnLayout::new(Vec::new())),
            vec![ValidationWarning::NoData],
        );
    }

    let columns = checks::columns::resolve(&table.headers);
    let missing = columns.missing_required();
    if !missing.is_empty() {
        let error = ValidationError::missing_columns(&missing);
        warn!(error = %error, "upload rejected");
        return ValidationResult::failed(error);
    }

    if table.is_empty() {
        debug!(columns = table.headers.len(), "upload has no data rows");
        return ValidationResult::passed(
            RecordSet::empty(columns.into_layout()),
            vec![ValidationWarning::NoData],
        );
    }

    let mut warnings: Vec<ValidationWarning> = Vec::new();
    warnings.extend(columns.renamed().cloned());
    warnings.extend(columns.missing_optional().into_iter().map(|column| {
        ValidationWarning::OptionalColumnMissing {
            column: column.header().to_string(),
        }
    }));

    let mut coordinates = CoordinateTally::default();
    let mut optional = OptionalTally::default();
    let records: Vec<_> = table
        .rows
        .iter()
        .map(|row| checks::build_record(row, &columns, &mut coordinates, &mut optional))
        .collect();

    if coordinates.total() > 0 {
        warn!(
            missing = coordinates.missing,
            unparseable = coordinates.unparseable,
            out_of_range = coordinates.out_of_range,
            "records left off the map"
        );
    }
    warnings.extend(coordinates.warnings());
    warnings.extend(optional.warnings());

    let records = RecordSet::new(columns.into_layout(), records);
    info!(
        records = records.len(),
        located = records.located_count(),
        warnings = warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    ValidationResult::passed(records, warnings)
}
