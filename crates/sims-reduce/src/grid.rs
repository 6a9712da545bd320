//! Grid-cell sampling.
//!
//! The bounding box of valid coordinates is split into `n × n` cells with
//! `n = ⌈√max_count⌉`. The first record (in source order) of every occupied
//! cell is kept. Because `n²` may exceed `max_count`, an over-full result is
//! trimmed by uniform random sampling with the same seed.
//!
//! Records without coordinates are dropped; when none have coordinates,
//! sampling falls back to uniform random over all records.

use std::collections::HashSet;

use sims_model::RecordSet;
use tracing::debug;

use crate::geo::{BoundingBox, located_points};
use crate::random::sample_indices;

/// Smallest `n` with `n * n >= max_count`, at least 1.
pub fn bins_per_axis(max_count: usize) -> usize {
    let mut n = (max_count as f64).sqrt().ceil() as usize;
    while n > 1 && (n - 1) * (n - 1) >= max_count {
        n -= 1;
    }
    while n * n < max_count {
        n += 1;
    }
    n.max(1)
}

/// Bin of `value` along an axis starting at `min` with total `extent`.
///
/// A zero-extent axis is a single bin.
pub fn bin_index(value: f64, min: f64, extent: f64, bins: usize) -> usize {
    if extent <= 0.0 || bins <= 1 {
        return 0;
    }
    let width = extent / bins as f64;
    let bin = ((value - min) / width).floor();
    if bin <= 0.0 {
        0
    } else {
        (bin as usize).min(bins - 1)
    }
}

/// Source positions of the kept records, ascending.
pub fn grid_cell_representatives(records: &RecordSet, max_count: usize, seed: u64) -> Vec<usize> {
    let points = located_points(records);
    let Some(bbox) = BoundingBox::around(&points) else {
        debug!(records = records.len(), "no located records, sampling at random");
        return sample_indices(records.len(), max_count, seed);
    };

    let bins = bins_per_axis(max_count);
    let mut occupied = HashSet::new();
    let mut kept = Vec::new();
    for point in &points {
        let cell = (
            bin_index(point.latitude, bbox.south, bbox.height(), bins),
            bin_index(point.longitude, bbox.west, bbox.width(), bins),
        );
        if occupied.insert(cell) {
            kept.push(point.index);
        }
    }
    debug!(bins, cells = kept.len(), max_count, "grid cells occupied");

    if kept.len() > max_count {
        sample_indices(kept.len(), max_count, seed)
            .into_iter()
            .map(|idx| kept[idx])
            .collect()
    } else {
        kept
    }
}
