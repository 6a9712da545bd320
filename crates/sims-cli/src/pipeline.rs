//! Pipeline stages shared by the subcommands: ingest and validate, query,
//! resolve reduction settings, reduce.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use sims_ingest::read_csv_table;
use sims_model::{RecordSet, SamplingStrategy, ValidationResult, ValidationWarning};
use sims_reduce::{ReduceSettings, Reduction};
use sims_report::{RecordFilter, SortKey, SortOrder, search, sort_records};
use sims_validate::validate;
use tracing::{debug, info, info_span, trace};

use crate::logging::redact_value;

/// Read and validate an upload.
///
/// I/O and CSV errors are returned as errors; a failed validation is not,
/// so the caller can report it.
pub fn load_records(path: &Path) -> Result<ValidationResult> {
    let _span = info_span!("ingest", path = %path.display()).entered();
    let start = Instant::now();
    let table = read_csv_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(validate(&table))
}

/// Read and validate an upload, treating a failed validation as an error.
pub fn load_valid_records(path: &Path) -> Result<(RecordSet, Vec<ValidationWarning>)> {
    let result = load_records(path)?;
    result
        .into_result()
        .with_context(|| format!("validate {}", path.display()))
}

/// Filter, search and sort applied before summarizing or reducing.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub filter: RecordFilter,
    pub search: Option<String>,
    pub sort: Option<(SortKey, SortOrder)>,
}

impl QueryOptions {
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty() && self.search.is_none() && self.sort.is_none()
    }
}

/// Apply filters, then search, then sort.
pub fn apply_queries(records: &RecordSet, query: &QueryOptions) -> RecordSet {
    if query.is_empty() {
        return records.clone();
    }
    let mut current = query.filter.apply(records);
    if let Some(term) = &query.search {
        current = search(&current, term);
        debug!(
            term = redact_value(term),
            matches = current.len(),
            "search applied"
        );
    }
    if let Some((key, order)) = query.sort {
        current = sort_records(&current, key, order);
        debug!(key = %key, order = ?order, "records sorted");
    }
    for record in current.iter().take(5) {
        trace!(
            client = redact_value(&record.client_name),
            station = redact_value(&record.station_name),
            city = %record.city,
            "query result"
        );
    }
    current
}

/// Reduction settings given explicitly on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOverrides {
    pub max_markers: Option<usize>,
    pub sampling_method: Option<SamplingStrategy>,
    pub seed: Option<u64>,
}

/// Load settings from a JSON file, or the defaults without one.
pub fn load_settings(path: Option<&Path>) -> Result<ReduceSettings> {
    let Some(path) = path else {
        return Ok(ReduceSettings::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read settings {}", path.display()))?;
    let settings: ReduceSettings = serde_json::from_str(&text)
        .with_context(|| format!("parse settings {}", path.display()))?;
    debug!(
        path = %path.display(),
        max_markers = settings.max_markers,
        sampling_method = %settings.sampling_method,
        "settings loaded"
    );
    Ok(settings)
}

/// Settings file values with command-line overrides applied, validated.
pub fn resolve_settings(
    path: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<ReduceSettings> {
    let mut settings = load_settings(path)?;
    if let Some(max_markers) = overrides.max_markers {
        settings = settings.with_max_markers(max_markers);
    }
    if let Some(sampling_method) = overrides.sampling_method {
        settings = settings.with_sampling_method(sampling_method);
    }
    if let Some(seed) = overrides.seed {
        settings = settings.with_seed(seed);
    }
    settings.validate().context("reduction settings")?;
    Ok(settings)
}

/// Everything the `reduce` subcommand reports.
#[derive(Debug, Clone)]
pub struct ReduceOutcome {
    pub warnings: Vec<ValidationWarning>,
    pub validated_count: usize,
    pub queried_count: usize,
    pub reduction: Reduction,
    pub settings: ReduceSettings,
}

/// Validate, query and reduce one upload.
pub fn reduce_file(
    input: &Path,
    query: &QueryOptions,
    settings: &ReduceSettings,
) -> Result<ReduceOutcome> {
    let (records, warnings) = load_valid_records(input)?;
    let queried = apply_queries(&records, query);
    let reduction = info_span!("reduce", strategy = %settings.sampling_method)
        .in_scope(|| settings.apply(&queried))
        .context("reduce records")?;
    Ok(ReduceOutcome {
        warnings,
        validated_count: records.len(),
        queried_count: queried.len(),
        reduction,
        settings: settings.clone(),
    })
}
