#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::columns::StationColumn;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A latitude/longitude pair known to be finite and in range.
///
/// Only [`Coordinates::new`] and deserialization build one, and both apply
/// the range check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPosition")]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        (in_range(latitude, LATITUDE_RANGE) && in_range(longitude, LONGITUDE_RANGE)).then_some(
            Self {
                latitude,
                longitude,
            },
        )
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Deserialize)]
struct UncheckedPosition {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<UncheckedPosition> for Position {
    type Error = String;

    fn try_from(raw: UncheckedPosition) -> Result<Self, Self::Error> {
        Position::checked(raw.latitude, raw.longitude).ok_or_else(|| {
            format!(
                "coordinates out of range: latitude {}, longitude {}",
                raw.latitude, raw.longitude
            )
        })
    }
}

/// Station location. `Absent` covers missing, unparseable and out-of-range
/// inputs alike.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Coordinates {
    Valid(Position),
    #[default]
    Absent,
}

impl Coordinates {
    /// Builds coordinates, clearing to `Absent` when either value is
    /// non-finite or outside the geographic range.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position::checked(latitude, longitude).map_or(Coordinates::Absent, Coordinates::Valid)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Coordinates::Valid(_))
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Coordinates::Valid(position) => Some(*position),
            Coordinates::Absent => None,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.position().map(|position| position.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.position().map(|position| position.longitude)
    }

    /// `(latitude, longitude)` when valid.
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        self.position()
            .map(|position| (position.latitude, position.longitude))
    }
}

/// Returns true when `value` is finite and inside the inclusive `range`.
pub fn in_range(value: f64, range: (f64, f64)) -> bool {
    value.is_finite() && value >= range.0 && value <= range.1
}

/// An optional column value: the uploaded text plus its typed reading.
///
/// The raw text is kept so that export reproduces the upload even when the
/// value could not be interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedValue<T> {
    raw: String,
    value: Option<T>,
}

impl<T> ParsedValue<T> {
    pub fn new(raw: impl Into<String>, value: Option<T>) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// True when text was supplied but could not be read.
    pub fn is_invalid(&self) -> bool {
        !self.is_blank() && self.value.is_none()
    }
}

impl<T> Default for ParsedValue<T> {
    fn default() -> Self {
        Self {
            raw: String::new(),
            value: None,
        }
    }
}

impl ParsedValue<f64> {
    /// A well-formed numeric value, written back out in shortest form.
    pub fn number(value: f64) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }
}

/// One station / transmitter entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub city: String,
    pub client_name: String,
    pub station_name: String,
    pub service: String,
    pub subservice: String,
    pub coordinates: Coordinates,
    pub frequency_mhz: ParsedValue<f64>,
    pub bandwidth_mhz: ParsedValue<f64>,
    pub date: ParsedValue<NaiveDate>,
    /// Non-catalogue columns, keyed by the uploaded header.
    pub extra: BTreeMap<String, String>,
}

impl Record {
    pub fn new(
        city: impl Into<String>,
        client_name: impl Into<String>,
        station_name: impl Into<String>,
        service: impl Into<String>,
        subservice: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            city: city.into(),
            client_name: client_name.into(),
            station_name: station_name.into(),
            service: service.into(),
            subservice: subservice.into(),
            coordinates,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_frequency(mut self, mhz: f64) -> Self {
        self.frequency_mhz = ParsedValue::number(mhz);
        self
    }

    #[must_use]
    pub fn with_bandwidth(mut self, mhz: f64) -> Self {
        self.bandwidth_mhz = ParsedValue::number(mhz);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = ParsedValue::new(date.format("%Y-%m-%d").to_string(), Some(date));
        self
    }

    #[must_use]
    pub fn with_extra(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(header.into(), value.into());
        self
    }

    pub fn frequency(&self) -> Option<f64> {
        self.frequency_mhz.value().copied()
    }

    pub fn bandwidth(&self) -> Option<f64> {
        self.bandwidth_mhz.value().copied()
    }

    pub fn date_value(&self) -> Option<NaiveDate> {
        self.date.value().copied()
    }

    /// Text form of a catalogued column, as written on export.
    pub fn column_text(&self, column: StationColumn) -> String {
        match column {
            StationColumn::City => self.city.clone(),
            StationColumn::ClientName => self.client_name.clone(),
            StationColumn::StationName => self.station_name.clone(),
            StationColumn::Service => self.service.clone(),
            StationColumn::Subservice => self.subservice.clone(),
            StationColumn::Latitude => format_optional(self.coordinates.latitude()),
            StationColumn::Longitude => format_optional(self.coordinates.longitude()),
            StationColumn::FrequencyMhz => self.frequency_mhz.raw().to_string(),
            StationColumn::BandwidthMhz => self.bandwidth_mhz.raw().to_string(),
            StationColumn::Date => self.date.raw().to_string(),
        }
    }

    /// Text for an arbitrary header: catalogued columns first, then extras.
    pub fn cell(&self, header: &str) -> Option<String> {
        match StationColumn::from_header(header) {
            Some(column) => Some(self.column_text(column)),
            None => self.extra.get(header).cloned(),
        }
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_clear_out_of_range() {
        assert!(!Coordinates::new(95.0, 10.0).is_valid());
        assert!(!Coordinates::new(45.0, 200.0).is_valid());
        assert!(!Coordinates::new(f64::NAN, 10.0).is_valid());
        assert!(Coordinates::new(90.0, -180.0).is_valid());
        assert_eq!(
            Coordinates::new(-6.2088, 106.8456).as_pair(),
            Some((-6.2088, 106.8456))
        );
    }

    #[test]
    fn deserialized_coordinates_are_range_checked() {
        let valid: Coordinates =
            serde_json::from_str(r#"{"kind":"valid","latitude":3.5952,"longitude":98.6722}"#)
                .expect("valid coordinates");
        assert_eq!(valid.as_pair(), Some((3.5952, 98.6722)));

        let beyond_pole = r#"{"kind":"valid","latitude":95.0,"longitude":10.0}"#;
        assert!(serde_json::from_str::<Coordinates>(beyond_pole).is_err());
    }

    #[test]
    fn coordinates_serialize_flat() {
        let json = serde_json::to_string(&Coordinates::new(-6.2, 106.8)).expect("serialize");
        assert_eq!(json, r#"{"kind":"valid","latitude":-6.2,"longitude":106.8}"#);
        let absent = serde_json::to_string(&Coordinates::Absent).expect("serialize");
        assert_eq!(absent, r#"{"kind":"absent"}"#);
    }

    #[test]
    fn column_text_uses_shortest_float_form() {
        let record = Record::new(
            "Jakarta",
            "PT Telkom",
            "Jakarta Tower",
            "Broadcasting",
            "FM Radio",
            Coordinates::new(-6.2088, 106.8456),
        )
        .with_frequency(98.5);
        assert_eq!(record.column_text(StationColumn::Latitude), "-6.2088");
        assert_eq!(record.column_text(StationColumn::FrequencyMhz), "98.5");
        assert_eq!(record.column_text(StationColumn::Date), "");
    }

    #[test]
    fn cell_falls_back_to_extras() {
        let record = Record::default().with_extra("REMARKS", "relay");
        assert_eq!(record.cell("REMARKS").as_deref(), Some("relay"));
        assert_eq!(record.cell("sid_lat").as_deref(), Some(""));
        assert_eq!(record.cell("UNKNOWN"), None);
    }

    #[test]
    fn parsed_value_flags_invalid_text() {
        let value: ParsedValue<f64> = ParsedValue::new("abc", None);
        assert!(value.is_invalid());
        let blank: ParsedValue<f64> = ParsedValue::new("  ", None);
        assert!(blank.is_blank());
        assert!(!blank.is_invalid());
    }
}
