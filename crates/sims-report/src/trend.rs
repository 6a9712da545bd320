//! Records added per calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sims_model::RecordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Record count per date, ascending. Records without a readable date are
/// not counted.
pub fn date_trend(records: &RecordSet) -> Vec<DatePoint> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in records.iter().filter_map(|record| record.date_value()) {
        *per_day.entry(date).or_default() += 1;
    }
    per_day
        .into_iter()
        .map(|(date, count)| DatePoint { date, count })
        .collect()
}
