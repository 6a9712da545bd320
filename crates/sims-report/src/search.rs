//! Free-text search across every column.

use sims_model::{Record, RecordSet};
use tracing::debug;

/// True when any column of `record` contains `needle` (already lowercase).
fn record_contains(record: &Record, headers: &[String], needle: &str) -> bool {
    headers.iter().any(|header| {
        record
            .cell(header)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Records where any column contains `term`, ignoring case.
///
/// An empty term returns the records unchanged.
pub fn search(records: &RecordSet, term: &str) -> RecordSet {
    if term.is_empty() {
        return records.clone();
    }
    let needle = term.to_lowercase();
    let headers = records.layout().headers();
    let found = records.filtered(|record| record_contains(record, headers, &needle));
    debug!(matches = found.len(), of = records.len(), "search applied");
    found
}
