//! Polars DataFrame bridge for chart and map consumers.
//!
//! Coordinates and the optional numeric columns become nullable `Float64`
//! columns; every other column is text.

use polars::prelude::*;
use sims_model::{RecordSet, StationColumn};

use crate::error::Result;

/// Converts a record set into a DataFrame with one column per layout header.
pub fn records_to_dataframe(records: &RecordSet) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(records.layout().headers().len());
    for header in records.layout().headers() {
        let column = match StationColumn::from_header(header) {
            Some(StationColumn::Latitude) => {
                let values: Vec<Option<f64>> = records
                    .iter()
                    .map(|record| record.coordinates.latitude())
                    .collect();
                Series::new(header.as_str().into(), values).into_column()
            }
            Some(StationColumn::Longitude) => {
                let values: Vec<Option<f64>> = records
                    .iter()
                    .map(|record| record.coordinates.longitude())
                    .collect();
                Series::new(header.as_str().into(), values).into_column()
            }
            Some(StationColumn::FrequencyMhz) => {
                let values: Vec<Option<f64>> =
                    records.iter().map(|record| record.frequency()).collect();
                Series::new(header.as_str().into(), values).into_column()
            }
            Some(StationColumn::BandwidthMhz) => {
                let values: Vec<Option<f64>> =
                    records.iter().map(|record| record.bandwidth()).collect();
                Series::new(header.as_str().into(), values).into_column()
            }
            _ => {
                let values: Vec<String> = records
                    .iter()
                    .map(|record| record.cell(header).unwrap_or_default())
                    .collect();
                Series::new(header.as_str().into(), values).into_column()
            }
        };
        columns.push(column);
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sims_model::{ColumnLayout, Coordinates, Record};

    fn sample() -> RecordSet {
        let layout = ColumnLayout::new(vec![
            "CITY".to_string(),
            "SID_LAT".to_string(),
            "SID_LONG".to_string(),
            "FREQ_MHZ".to_string(),
        ]);
        RecordSet::new(
            layout,
            vec![
                Record::new("Jakarta", "c", "s", "Radio", "FM", Coordinates::new(-6.2088, 106.8456))
                    .with_frequency(98.5),
                Record::new("Unknown", "c", "s", "Radio", "FM", Coordinates::Absent),
            ],
        )
    }

    fn f64_column(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn dataframe_has_one_column_per_header() {
        let df = records_to_dataframe(&sample()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn coordinates_are_nullable_floats() {
        let df = records_to_dataframe(&sample()).unwrap();
        assert_eq!(f64_column(&df, "SID_LAT"), vec![Some(-6.2088), None]);
        assert_eq!(f64_column(&df, "FREQ_MHZ"), vec![Some(98.5), None]);
    }

    #[test]
    fn text_columns_keep_values() {
        let df = records_to_dataframe(&sample()).unwrap();
        let cities = df.column("CITY").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(cities.get(0), Some("Jakarta"));
        assert_eq!(cities.get(1), Some("Unknown"));
    }

    #[test]
    fn layout_without_bandwidth_has_no_bandwidth_column() {
        let df = records_to_dataframe(&sample()).unwrap();
        assert!(df.column("BW_MHZ").is_err());
    }
}
