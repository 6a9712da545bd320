//! Dataset summaries and chart series.
//!
//! Plain counts for a dashboard to draw; nothing here renders.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use sims_model::{Record, RecordSet};

/// Length of the top-N chart series.
pub const TOP_N: usize = 10;

/// Map center used when no record has coordinates (central Indonesia).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (-2.5489, 118.0149);

/// One bar or slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

/// Occurrences of each value, most frequent first, ties by label.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Count> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ordered: Vec<Count> = counts
        .into_iter()
        .map(|(label, count)| Count {
            label: label.to_string(),
            count,
        })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ordered
}

fn top(values: Vec<Count>, n: usize) -> Vec<Count> {
    values.into_iter().take(n).collect()
}

/// Records with and without usable coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoordinateCoverage {
    pub located: usize,
    pub absent: usize,
}

/// Where the map opens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
    /// False when the default center was used.
    pub from_data: bool,
}

impl MapCenter {
    /// Mean of valid coordinates, or [`DEFAULT_MAP_CENTER`].
    pub fn from_records(records: &RecordSet) -> Self {
        let mut lat_sum = 0.0;
        let mut lon_sum = 0.0;
        let mut count = 0usize;
        for (lat, lon) in records.iter().filter_map(|r| r.coordinates.as_pair()) {
            lat_sum += lat;
            lon_sum += lon;
            count += 1;
        }
        if count == 0 {
            let (latitude, longitude) = DEFAULT_MAP_CENTER;
            return Self {
                latitude,
                longitude,
                from_data: false,
            };
        }
        Self {
            latitude: lat_sum / count as f64,
            longitude: lon_sum / count as f64,
            from_data: true,
        }
    }
}

/// Headline numbers and chart series for a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub distinct_cities: usize,
    pub distinct_clients: usize,
    pub services: Vec<Count>,
    pub top_subservices: Vec<Count>,
    pub top_cities: Vec<Count>,
    pub coordinates: CoordinateCoverage,
    pub map_center: MapCenter,
    /// City with the most located records.
    pub busiest_located_city: Option<String>,
    /// Service with the most located records.
    pub busiest_located_service: Option<String>,
}

impl DatasetSummary {
    pub fn from_records(records: &RecordSet) -> Self {
        let distinct = |field: fn(&Record) -> &str| {
            records.iter().map(field).collect::<BTreeSet<_>>().len()
        };
        let located: Vec<&Record> = records
            .iter()
            .filter(|r| r.coordinates.is_valid())
            .collect();
        let busiest = |field: fn(&Record) -> &str| {
            value_counts(located.iter().map(|r| field(r)))
                .into_iter()
                .next()
                .map(|count| count.label)
        };

        Self {
            total_records: records.len(),
            distinct_cities: distinct(|r| r.city.as_str()),
            distinct_clients: distinct(|r| r.client_name.as_str()),
            services: value_counts(records.iter().map(|r| r.service.as_str())),
            top_subservices: top(
                value_counts(records.iter().map(|r| r.subservice.as_str())),
                TOP_N,
            ),
            top_cities: top(value_counts(records.iter().map(|r| r.city.as_str())), TOP_N),
            coordinates: CoordinateCoverage {
                located: located.len(),
                absent: records.len() - located.len(),
            },
            map_center: MapCenter::from_records(records),
            busiest_located_city: busiest(|r| r.city.as_str()),
            busiest_located_service: busiest(|r| r.service.as_str()),
        }
    }
}

/// City × service record counts for the busiest cities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceCityCrosstab {
    /// Row labels, alphabetical.
    pub cities: Vec<String>,
    /// Column labels: every service in the record set, alphabetical.
    pub services: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl ServiceCityCrosstab {
    pub fn get(&self, city: &str, service: &str) -> Option<usize> {
        let row = self.cities.iter().position(|c| c == city)?;
        let column = self.services.iter().position(|s| s == service)?;
        Some(self.counts[row][column])
    }
}

/// Count records per city and service, keeping only the `top_n` cities by
/// record count.
pub fn service_city_crosstab(records: &RecordSet, top_n: usize) -> ServiceCityCrosstab {
    let top_cities: BTreeSet<String> =
        top(value_counts(records.iter().map(|r| r.city.as_str())), top_n)
            .into_iter()
            .map(|count| count.label)
            .collect();
    let services: Vec<String> = records
        .iter()
        .map(|r| r.service.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in records {
        if top_cities.contains(&record.city) {
            *cells
                .entry((record.city.as_str(), record.service.as_str()))
                .or_default() += 1;
        }
    }

    let counts = top_cities
        .iter()
        .map(|city| {
            services
                .iter()
                .map(|service| {
                    cells
                        .get(&(city.as_str(), service.as_str()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    ServiceCityCrosstab {
        cities: top_cities.into_iter().collect(),
        services,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sims_model::Coordinates;

    fn station(city: &str, service: &str, coordinates: Coordinates) -> Record {
        Record::new(city, format!("{city} client"), "s", service, "sub", coordinates)
    }

    #[test]
    fn value_counts_order_by_count_then_label() {
        let counts = value_counts(["TV", "Radio", "TV", "Mobile", "Radio", "TV"]);
        let labels: Vec<_> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["TV", "Radio", "Mobile"]);
        assert_eq!(counts[0].count, 3);
    }

    #[test]
    fn map_center_falls_back_to_default() {
        let records = RecordSet::from_records(vec![station("A", "TV", Coordinates::Absent)]);
        let center = MapCenter::from_records(&records);
        assert!(!center.from_data);
        assert_eq!((center.latitude, center.longitude), DEFAULT_MAP_CENTER);
    }

    #[test]
    fn map_center_is_mean_of_located_records() {
        let records = RecordSet::from_records(vec![
            station("A", "TV", Coordinates::new(-2.0, 100.0)),
            station("B", "TV", Coordinates::new(4.0, 110.0)),
            station("C", "TV", Coordinates::Absent),
        ]);
        let center = MapCenter::from_records(&records);
        assert!(center.from_data);
        assert_eq!((center.latitude, center.longitude), (1.0, 105.0));
    }

    #[test]
    fn summary_counts() {
        let records = RecordSet::from_records(vec![
            station("Jakarta", "Broadcasting", Coordinates::new(-6.2, 106.8)),
            station("Jakarta", "Mobile", Coordinates::new(-6.2, 106.8)),
            station("Medan", "Broadcasting", Coordinates::Absent),
        ]);
        let summary = DatasetSummary::from_records(&records);
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.distinct_cities, 2);
        assert_eq!(summary.distinct_clients, 2);
        assert_eq!(
            summary.services[0],
            Count {
                label: "Broadcasting".to_string(),
                count: 2
            }
        );
        assert_eq!(
            summary.coordinates,
            CoordinateCoverage {
                located: 2,
                absent: 1
            }
        );
        assert_eq!(summary.busiest_located_city.as_deref(), Some("Jakarta"));
        assert_eq!(
            summary.busiest_located_service.as_deref(),
            Some("Broadcasting")
        );
    }

    #[test]
    fn crosstab_keeps_top_cities() {
        let records = RecordSet::from_records(vec![
            station("Jakarta", "Mobile", Coordinates::Absent),
            station("Jakarta", "Broadcasting", Coordinates::Absent),
            station("Jakarta", "Mobile", Coordinates::Absent),
            station("Medan", "Radio", Coordinates::Absent),
            station("Medan", "Radio", Coordinates::Absent),
            station("Bandung", "Mobile", Coordinates::Absent),
        ]);
        let crosstab = service_city_crosstab(&records, 2);
        assert_eq!(crosstab.cities, vec!["Jakarta", "Medan"]);
        assert_eq!(crosstab.services, vec!["Broadcasting", "Mobile", "Radio"]);
        assert_eq!(crosstab.get("Jakarta", "Mobile"), Some(2));
        assert_eq!(crosstab.get("Medan", "Mobile"), Some(0));
        assert_eq!(crosstab.get("Bandung", "Mobile"), None);
    }
}
