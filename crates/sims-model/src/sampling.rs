use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a large record set is thinned out before it reaches the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingStrategy {
    /// Uniform sampling without replacement.
    #[default]
    #[serde(rename = "random")]
    Random,
    /// One representative per k-means cluster of coordinates.
    #[serde(rename = "cluster")]
    ClusterRepresentative,
    /// At most one record per latitude/longitude grid cell.
    #[serde(rename = "grid")]
    GridCell,
}

impl SamplingStrategy {
    pub const ALL: [SamplingStrategy; 3] = [
        SamplingStrategy::Random,
        SamplingStrategy::ClusterRepresentative,
        SamplingStrategy::GridCell,
    ];

    /// Settings name (`random`, `cluster`, `grid`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingStrategy::Random => "random",
            SamplingStrategy::ClusterRepresentative => "cluster",
            SamplingStrategy::GridCell => "grid",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingStrategy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(SamplingStrategy::Random),
            "cluster" | "cluster_representative" | "kmeans" => {
                Ok(SamplingStrategy::ClusterRepresentative)
            }
            "grid" | "grid_cell" => Ok(SamplingStrategy::GridCell),
            _ => Err(ModelError::UnknownSamplingStrategy(s.to_string())),
        }
    }
}
