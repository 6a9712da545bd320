//! Reduction settings supplied by the settings surface.

use serde::{Deserialize, Serialize};
use sims_model::{RecordSet, SamplingStrategy};
use tracing::{info, warn};

use crate::error::{ReduceError, Result};

/// Marker budget used when none is configured.
pub const DEFAULT_MAX_MARKERS: usize = 5000;

/// Range the settings surface offers for the marker budget.
pub const RECOMMENDED_MAX_MARKERS: (usize, usize) = (1000, 20000);

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// How many markers the map may show and how to choose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceSettings {
    /// Largest number of records handed to the map.
    #[serde(default = "default_max_markers")]
    pub max_markers: usize,

    #[serde(default)]
    pub sampling_method: SamplingStrategy,

    /// Seed for every random choice made while sampling.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_max_markers() -> usize {
    DEFAULT_MAX_MARKERS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for ReduceSettings {
    fn default() -> Self {
        Self {
            max_markers: DEFAULT_MAX_MARKERS,
            sampling_method: SamplingStrategy::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Records handed to the map, and whether sampling dropped any.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub records: RecordSet,
    pub original_count: usize,
    pub sampled: bool,
}

impl ReduceSettings {
    #[must_use]
    pub fn with_max_markers(mut self, max_markers: usize) -> Self {
        self.max_markers = max_markers;
        self
    }

    #[must_use]
    pub fn with_sampling_method(mut self, sampling_method: SamplingStrategy) -> Self {
        self.sampling_method = sampling_method;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject a zero budget. Budgets outside the recommended range are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.max_markers == 0 {
            return Err(ReduceError::InvalidMaxCount {
                max_count: self.max_markers,
            });
        }
        let (low, high) = RECOMMENDED_MAX_MARKERS;
        if !(low..=high).contains(&self.max_markers) {
            warn!(
                max_markers = self.max_markers,
                low, high, "marker budget outside the recommended range"
            );
        }
        Ok(())
    }

    /// Reduce `records` to the configured budget.
    pub fn apply(&self, records: &RecordSet) -> Result<Reduction> {
        self.validate()?;
        let reduced = crate::reduce(records, self.max_markers, self.sampling_method, self.seed)?;
        let sampled = reduced.len() < records.len();
        if sampled {
            info!(
                shown = reduced.len(),
                total = records.len(),
                strategy = %self.sampling_method,
                "showing a sample of the records for performance"
            );
        }
        Ok(Reduction {
            original_count: records.len(),
            records: reduced,
            sampled,
        })
    }
}
