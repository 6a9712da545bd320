#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::columns::StationColumn;
use crate::record::Record;

/// Ordered header list of an upload, used to reproduce it on export.
///
/// Catalogued columns carry their canonical header (`CIRY` is already
/// `CITY` here); other headers are kept as uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    headers: Vec<String>,
}

impl ColumnLayout {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn contains(&self, column: StationColumn) -> bool {
        self.headers
            .iter()
            .any(|header| StationColumn::from_header(header) == Some(column))
    }

    /// Headers that are not part of the catalogue.
    pub fn extra_headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .filter(|header| StationColumn::from_header(header).is_none())
            .map(String::as_str)
    }
}

impl Default for ColumnLayout {
    /// The full catalogue in upload order.
    fn default() -> Self {
        Self {
            headers: StationColumn::ALL
                .iter()
                .map(|column| column.header().to_string())
                .collect(),
        }
    }
}

/// All records of one upload, in upload order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordSet {
    layout: ColumnLayout,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(layout: ColumnLayout, records: Vec<Record>) -> Self {
        Self { layout, records }
    }

    /// Record set with the default catalogue layout.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(ColumnLayout::default(), records)
    }

    /// Empty set that keeps `layout`.
    pub fn empty(layout: ColumnLayout) -> Self {
        Self::new(layout, Vec::new())
    }

    /// New set with the same layout and different records.
    #[must_use]
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self::new(self.layout.clone(), records)
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records with valid coordinates.
    pub fn located_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.coordinates.is_valid())
            .count()
    }

    /// New set holding the records at `indices`, in the given order.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let records = indices
            .iter()
            .filter_map(|&idx| self.records.get(idx).cloned())
            .collect();
        self.with_records(records)
    }

    /// New set holding the records matching `predicate`.
    #[must_use]
    pub fn filtered<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|&record| predicate(record))
            .cloned()
            .collect();
        self.with_records(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Coordinates;

    fn record(city: &str, lat: f64, lon: f64) -> Record {
        Record::new(city, "client", "station", "Radio", "FM", Coordinates::new(lat, lon))
    }

    #[test]
    fn select_keeps_layout_and_order() {
        let layout = ColumnLayout::new(vec!["CITY".to_string(), "REMARKS".to_string()]);
        let set = RecordSet::new(
            layout.clone(),
            vec![record("A", 1.0, 1.0), record("B", 2.0, 2.0), record("C", 3.0, 3.0)],
        );
        let picked = set.select(&[2, 0, 9]);
        assert_eq!(picked.layout(), &layout);
        let cities: Vec<&str> = picked.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["C", "A"]);
    }

    #[test]
    fn located_count_ignores_absent() {
        let set = RecordSet::from_records(vec![record("A", 1.0, 1.0), record("B", 95.0, 1.0)]);
        assert_eq!(set.located_count(), 1);
    }

    #[test]
    fn layout_extras_and_membership() {
        let layout = ColumnLayout::new(vec![
            "CITY".to_string(),
            "sid_lat".to_string(),
            "REMARKS".to_string(),
        ]);
        assert!(layout.contains(StationColumn::Latitude));
        assert!(!layout.contains(StationColumn::Date));
        assert_eq!(layout.extra_headers().collect::<Vec<_>>(), vec!["REMARKS"]);
    }
}
