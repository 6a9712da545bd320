//! Planar geometry over record coordinates.
//!
//! Distances are squared Euclidean in (latitude, longitude) degrees. That is
//! enough to group nearby markers; no projection is applied.

use sims_model::RecordSet;

/// A record with valid coordinates, remembered by its source position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedPoint {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocatedPoint {
    pub fn squared_distance(&self, latitude: f64, longitude: f64) -> f64 {
        let dlat = self.latitude - latitude;
        let dlon = self.longitude - longitude;
        dlat * dlat + dlon * dlon
    }
}

/// Records with valid coordinates, in source order.
pub fn located_points(records: &RecordSet) -> Vec<LocatedPoint> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .coordinates
                .as_pair()
                .map(|(latitude, longitude)| LocatedPoint {
                    index,
                    latitude,
                    longitude,
                })
        })
        .collect()
}

/// A bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for no points.
    pub fn around(points: &[LocatedPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            west: first.longitude,
            south: first.latitude,
            east: first.longitude,
            north: first.latitude,
        };
        for point in &points[1..] {
            bbox.west = bbox.west.min(point.longitude);
            bbox.east = bbox.east.max(point.longitude);
            bbox.south = bbox.south.min(point.latitude);
            bbox.north = bbox.north.max(point.latitude);
        }
        Some(bbox)
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }
}
