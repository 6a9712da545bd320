//! Coordinate coercion and range checks.
//!
//! A record keeps its coordinates only when both values parse as finite
//! numbers inside the geographic range; otherwise both are cleared and the
//! record is counted under exactly one warning.

use sims_model::{Coordinates, LATITUDE_RANGE, LONGITUDE_RANGE, ValidationWarning, in_range};

/// Outcome of reading one record's coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateReading {
    Located(Coordinates),
    Blank,
    Unparseable,
    OutOfRange,
}

impl CoordinateReading {
    pub fn coordinates(&self) -> Coordinates {
        match self {
            CoordinateReading::Located(coordinates) => *coordinates,
            _ => Coordinates::Absent,
        }
    }
}

/// Parse a numeric cell, returning `None` for text that is not a finite number.
pub fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Read a latitude/longitude pair.
///
/// Unparseable text takes precedence over blanks, and both over range.
pub fn read_coordinates(latitude: &str, longitude: &str) -> CoordinateReading {
    let latitude = latitude.trim();
    let longitude = longitude.trim();
    let parsed_lat = parse_finite(latitude);
    let parsed_lon = parse_finite(longitude);

    let unparseable = |text: &str, parsed: Option<f64>| !text.is_empty() && parsed.is_none();
    if unparseable(latitude, parsed_lat) || unparseable(longitude, parsed_lon) {
        return CoordinateReading::Unparseable;
    }
    let (Some(lat), Some(lon)) = (parsed_lat, parsed_lon) else {
        return CoordinateReading::Blank;
    };
    if !in_range(lat, LATITUDE_RANGE) || !in_range(lon, LONGITUDE_RANGE) {
        return CoordinateReading::OutOfRange;
    }
    CoordinateReading::Located(Coordinates::new(lat, lon))
}

/// Per-upload counts of cleared coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateTally {
    pub missing: usize,
    pub unparseable: usize,
    pub out_of_range: usize,
}

impl CoordinateTally {
    pub fn record(&mut self, reading: CoordinateReading) {
        match reading {
            CoordinateReading::Located(_) => {}
            CoordinateReading::Blank => self.missing += 1,
            CoordinateReading::Unparseable => self.unparseable += 1,
            CoordinateReading::OutOfRange => self.out_of_range += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing + self.unparseable + self.out_of_range
    }

    /// One warning per non-zero count.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        if self.missing > 0 {
            warnings.push(ValidationWarning::MissingCoordinates {
                count: self.missing,
            });
        }
        if self.unparseable > 0 {
            warnings.push(ValidationWarning::UnparseableCoordinates {
                count: self.unparseable,
            });
        }
        if self.out_of_range > 0 {
            warnings.push(ValidationWarning::CoordinatesOutOfRange {
                count: self.out_of_range,
            });
        }
        warnings
    }
}
