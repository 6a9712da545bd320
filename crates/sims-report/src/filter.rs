//! Exact-match record filters and the option lists offered for them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sims_model::{Record, RecordSet};
use tracing::debug;

/// Filter on the descriptive columns. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subservice: Option<String>,
}

impl RecordFilter {
    /// True when no column is restricted.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.client.is_none()
            && self.station.is_none()
            && self.service.is_none()
            && self.subservice.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        fn accepts(wanted: Option<&String>, value: &str) -> bool {
            wanted.is_none_or(|wanted| wanted == value)
        }
        accepts(self.city.as_ref(), &record.city)
            && accepts(self.client.as_ref(), &record.client_name)
            && accepts(self.station.as_ref(), &record.station_name)
            && accepts(self.service.as_ref(), &record.service)
            && accepts(self.subservice.as_ref(), &record.subservice)
    }

    /// Records matching every restricted column, in source order.
    pub fn apply(&self, records: &RecordSet) -> RecordSet {
        if self.is_empty() {
            return records.clone();
        }
        let filtered = records.filtered(|record| self.matches(record));
        debug!(
            input = records.len(),
            output = filtered.len(),
            "filter applied"
        );
        filtered
    }
}

/// Sorted distinct values for each filterable column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub clients: Vec<String>,
    pub stations: Vec<String>,
    pub services: Vec<String>,
    pub subservices: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &RecordSet) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
            values.cloned().collect::<BTreeSet<_>>().into_iter().collect()
        }
        Self {
            cities: distinct(records.iter().map(|r| &r.city)),
            clients: distinct(records.iter().map(|r| &r.client_name)),
            stations: distinct(records.iter().map(|r| &r.station_name)),
            services: distinct(records.iter().map(|r| &r.service)),
            subservices: distinct(records.iter().map(|r| &r.subservice)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sims_model::Coordinates;

    fn station(city: &str, client: &str, station: &str, service: &str, sub: &str) -> Record {
        Record::new(city, client, station, service, sub, Coordinates::Absent)
    }

    fn records() -> RecordSet {
        RecordSet::from_records(vec![
            station("Jakarta", "PT Telkom", "A", "Broadcasting", "FM Radio"),
            station("Medan", "PT Telkom", "B", "Broadcasting", "TV"),
            station("Jakarta", "PT Media", "C", "Mobile", "4G LTE"),
        ])
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records()), records());
    }

    #[test]
    fn restrictions_combine() {
        let filter = RecordFilter {
            city: Some("Jakarta".to_string()),
            service: Some("Broadcasting".to_string()),
            ..RecordFilter::default()
        };
        let filtered = filter.apply(&records());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].station_name, "A");
    }

    #[test]
    fn match_is_exact() {
        let filter = RecordFilter {
            city: Some("jakarta".to_string()),
            ..RecordFilter::default()
        };
        assert!(filter.apply(&records()).is_empty());
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let options = FilterOptions::from_records(&records());
        assert_eq!(options.cities, vec!["Jakarta", "Medan"]);
        assert_eq!(options.clients, vec!["PT Media", "PT Telkom"]);
        assert_eq!(options.subservices, vec!["4G LTE", "FM Radio", "TV"]);
    }
}
