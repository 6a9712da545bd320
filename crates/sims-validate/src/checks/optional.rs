//! Optional column coercion.
//!
//! Frequency and bandwidth must be non-negative numbers; dates accept the
//! common export formats. Unreadable values keep their text and are counted.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sims_model::{ParsedValue, StationColumn, ValidationWarning};

use super::coordinates::parse_finite;

/// Date formats accepted in the `DATE` column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Timestamp formats; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a frequency or bandwidth cell.
pub fn parse_measurement(text: &str) -> ParsedValue<f64> {
    let value = parse_finite(text).filter(|value| *value >= 0.0);
    ParsedValue::new(text, value)
}

/// Parse a date cell.
pub fn parse_date(text: &str) -> ParsedValue<NaiveDate> {
    let trimmed = text.trim();
    let value = if trimmed.is_empty() {
        None
    } else {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                DATETIME_FORMATS.iter().find_map(|format| {
                    NaiveDateTime::parse_from_str(trimmed, format)
                        .ok()
                        .map(|datetime| datetime.date())
                })
            })
    };
    ParsedValue::new(text, value)
}

/// Per-column counts of unreadable optional values.
#[derive(Debug, Clone, Default)]
pub struct OptionalTally {
    invalid: BTreeMap<StationColumn, usize>,
}

impl OptionalTally {
    pub fn record<T>(&mut self, column: StationColumn, value: &ParsedValue<T>) {
        if value.is_invalid() {
            *self.invalid.entry(column).or_default() += 1;
        }
    }

    pub fn invalid_count(&self, column: StationColumn) -> usize {
        self.invalid.get(&column).copied().unwrap_or(0)
    }

    /// One warning per column with unreadable values, in catalogue order.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        self.invalid
            .iter()
            .map(|(column, count)| ValidationWarning::InvalidOptionalValues {
                column: column.header().to_string(),
                count: *count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_must_be_non_negative_numbers() {
        assert_eq!(parse_measurement("98.5").value(), Some(&98.5));
        assert_eq!(parse_measurement("0").value(), Some(&0.0));
        assert!(parse_measurement("-5").is_invalid());
        assert!(parse_measurement("VHF").is_invalid());
        assert!(parse_measurement("").is_blank());
        assert_eq!(parse_measurement("VHF").raw(), "VHF");
    }

    #[test]
    fn dates_accept_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15").value().copied(), expected);
        assert_eq!(parse_date("15/03/2024").value().copied(), expected);
        assert_eq!(parse_date("2024/03/15").value().copied(), expected);
        assert_eq!(parse_date("2024-03-15 08:30:00").value().copied(), expected);
        assert!(parse_date("March 2024").is_invalid());
        assert!(!parse_date(" ").is_invalid());
    }

    #[test]
    fn tally_reports_columns_in_catalogue_order() {
        let mut tally = OptionalTally::default();
        tally.record(StationColumn::Date, &parse_date("soon"));
        tally.record(StationColumn::FrequencyMhz, &parse_measurement("x"));
        tally.record(StationColumn::FrequencyMhz, &parse_measurement("y"));
        tally.record(StationColumn::FrequencyMhz, &parse_measurement("1"));
        assert_eq!(tally.invalid_count(StationColumn::FrequencyMhz), 2);
        assert_eq!(
            tally.warnings(),
            vec![
                ValidationWarning::InvalidOptionalValues {
                    column: "FREQ_MHZ".to_string(),
                    count: 2,
                },
                ValidationWarning::InvalidOptionalValues {
                    column: "DATE".to_string(),
                    count: 1,
                },
            ]
        );
    }
}
