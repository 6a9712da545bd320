//! Column catalogue for station uploads.
//!
//! Upload files name their columns with the short headers used by the
//! frequency licensing exports (`CLNT_NAME`, `SID_LAT`, ...). Each header maps
//! to one typed [`Record`](crate::Record) field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alternate spelling of `CITY` found in some exports.
pub const CITY_TYPO: &str = "CIRY";

/// A catalogued upload column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationColumn {
    City,
    ClientName,
    StationName,
    Service,
    Subservice,
    Longitude,
    Latitude,
    FrequencyMhz,
    BandwidthMhz,
    Date,
}

impl StationColumn {
    /// Columns every upload must carry, in the order they are reported.
    pub const REQUIRED: [StationColumn; 7] = [
        StationColumn::City,
        StationColumn::ClientName,
        StationColumn::StationName,
        StationColumn::Service,
        StationColumn::Subservice,
        StationColumn::Longitude,
        StationColumn::Latitude,
    ];

    /// Columns that only produce advisory warnings when absent.
    pub const OPTIONAL: [StationColumn; 3] = [
        StationColumn::FrequencyMhz,
        StationColumn::BandwidthMhz,
        StationColumn::Date,
    ];

    /// Required followed by optional columns.
    pub const ALL: [StationColumn; 10] = [
        StationColumn::City,
        StationColumn::ClientName,
        StationColumn::StationName,
        StationColumn::Service,
        StationColumn::Subservice,
        StationColumn::Longitude,
        StationColumn::Latitude,
        StationColumn::FrequencyMhz,
        StationColumn::BandwidthMhz,
        StationColumn::Date,
    ];

    /// Upload header name.
    pub fn header(&self) -> &'static str {
        match self {
            StationColumn::City => "CITY",
            StationColumn::ClientName => "CLNT_NAME",
            StationColumn::StationName => "STN_NAME",
            StationColumn::Service => "SERVICE",
            StationColumn::Subservice => "SUBSERVICE",
            StationColumn::Longitude => "SID_LONG",
            StationColumn::Latitude => "SID_LAT",
            StationColumn::FrequencyMhz => "FREQ_MHZ",
            StationColumn::BandwidthMhz => "BW_MHZ",
            StationColumn::Date => "DATE",
        }
    }

    /// Look up a column by upload header (case-insensitive, surrounding
    /// whitespace ignored). The `CIRY` typo is not resolved here.
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = header.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|column| column.header() == normalized)
    }
}

impl fmt::Display for StationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Returns true when `header` is the `CIRY` spelling of `CITY`.
pub fn is_city_typo(header: &str) -> bool {
    header.trim().eq_ignore_ascii_case(CITY_TYPO)
}
