//! Table sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sims_model::{Record, RecordSet, StationColumn};

use crate::error::ReportError;

/// Columns the record table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    City,
    ClientName,
    StationName,
    Service,
    Subservice,
    Frequency,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::City,
        SortKey::ClientName,
        SortKey::StationName,
        SortKey::Service,
        SortKey::Subservice,
        SortKey::Frequency,
    ];

    pub fn column(&self) -> StationColumn {
        match self {
            SortKey::City => StationColumn::City,
            SortKey::ClientName => StationColumn::ClientName,
            SortKey::StationName => StationColumn::StationName,
            SortKey::Service => StationColumn::Service,
            SortKey::Subservice => StationColumn::Subservice,
            SortKey::Frequency => StationColumn::FrequencyMhz,
        }
    }

    fn text<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SortKey::City => &record.city,
            SortKey::ClientName => &record.client_name,
            SortKey::StationName => &record.station_name,
            SortKey::Service => &record.service,
            SortKey::Subservice => &record.subservice,
            SortKey::Frequency => record.frequency_mhz.raw(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column().header())
    }
}

impl FromStr for SortKey {
    type Err = ReportError;

    /// Accepts upload headers (`CLNT_NAME`) as well as plain names (`client`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = SortKey::ALL
            .into_iter()
            .find(|key| key.column().header().eq_ignore_ascii_case(s.trim()))
        {
            return Ok(key);
        }
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "city" => Ok(SortKey::City),
            "client" | "client_name" => Ok(SortKey::ClientName),
            "station" | "station_name" => Ok(SortKey::StationName),
            "service" => Ok(SortKey::Service),
            "subservice" => Ok(SortKey::Subservice),
            "frequency" | "freq" | "frequency_mhz" => Ok(SortKey::Frequency),
            _ => Err(ReportError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort of `records` by one column.
///
/// Records without a readable frequency go last in either order.
pub fn sort_records(records: &RecordSet, key: SortKey, order: SortOrder) -> RecordSet {
    let mut sorted = records.records().to_vec();
    match key {
        SortKey::Frequency => sorted.sort_by(|a, b| match (a.frequency(), b.frequency()) {
            (Some(a), Some(b)) => order.apply(a.total_cmp(&b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        _ => sorted.sort_by(|a, b| order.apply(key.text(a).cmp(key.text(b)))),
    }
    records.with_records(sorted)
}
