//! Marker reduction for large station sets.
//!
//! [`reduce`] returns a subset of at most `max_count` records, in source
//! order, chosen by a [`SamplingStrategy`]. Every call builds its own random
//! generator from the given seed, so results are reproducible and calls are
//! independent of each other.

pub mod cluster;
mod error;
pub mod geo;
pub mod grid;
pub mod random;
mod settings;

use std::time::Instant;

use sims_model::{RecordSet, SamplingStrategy};
use tracing::{debug, info};

pub use error::{ReduceError, Result};
pub use settings::{
    DEFAULT_MAX_MARKERS, DEFAULT_SEED, RECOMMENDED_MAX_MARKERS, ReduceSettings, Reduction,
};

/// Reduce `records` to at most `max_count` records.
///
/// Sets already within budget are returned unchanged, which makes reduction
/// idempotent. An empty set reduces to an empty set; use
/// [`reduce_non_empty`] to treat that as an error.
///
/// # Errors
///
/// [`ReduceError::InvalidMaxCount`] when `max_count` is zero.
pub fn reduce(
    records: &RecordSet,
    max_count: usize,
    strategy: SamplingStrategy,
    seed: u64,
) -> Result<RecordSet> {
    if max_count == 0 {
        return Err(ReduceError::InvalidMaxCount { max_count });
    }
    if records.len() <= max_count {
        debug!(records = records.len(), max_count, "within budget");
        return Ok(records.clone());
    }

    let start = Instant::now();
    let indices = match strategy {
        SamplingStrategy::Random => random::sample_indices(records.len(), max_count, seed),
        SamplingStrategy::ClusterRepresentative => {
            cluster::cluster_representatives(records, max_count, seed)
        }
        SamplingStrategy::GridCell => grid::grid_cell_representatives(records, max_count, seed),
    };
    let reduced = records.select(&indices);
    info!(
        input = records.len(),
        output = reduced.len(),
        max_count,
        strategy = %strategy,
        seed,
        duration_ms = start.elapsed().as_millis(),
        "reduction complete"
    );
    Ok(reduced)
}

/// Like [`reduce`], but an empty input is an error.
///
/// # Errors
///
/// [`ReduceError::EmptyInput`] for an empty set, otherwise as [`reduce`].
pub fn reduce_non_empty(
    records: &RecordSet,
    max_count: usize,
    strategy: SamplingStrategy,
    seed: u64,
) -> Result<RecordSet> {
    if records.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    reduce(records, max_count, strategy, seed)
}
