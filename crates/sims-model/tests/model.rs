//! Tests for sims-model types.

use sims_model::{
    ColumnLayout, Coordinates, Record, RecordSet, StationColumn, ValidationError,
    ValidationResult, ValidationWarning,
};

fn jakarta() -> Record {
    Record::new(
        "Jakarta",
        "PT Telkom",
        "Jakarta Tower",
        "Broadcasting",
        "FM Radio",
        Coordinates::new(-6.2088, 106.8456),
    )
    .with_frequency(98.5)
    .with_bandwidth(0.2)
}

#[test]
fn validation_result_into_result() {
    let records = RecordSet::from_records(vec![jakarta()]);
    let passed = ValidationResult::passed(records.clone(), vec![ValidationWarning::NoData]);
    let (out, warnings) = passed.into_result().expect("passing result");
    assert_eq!(out, records);
    assert_eq!(warnings, vec![ValidationWarning::NoData]);

    let failed = ValidationResult::failed(ValidationError::missing_columns(&[
        StationColumn::ClientName,
    ]));
    let error = failed.into_result().expect_err("failing result");
    assert_eq!(error.to_string(), "missing required columns: CLNT_NAME");
}

#[test]
fn result_serializes() {
    let result = ValidationResult::passed(RecordSet::from_records(vec![jakarta()]), vec![]);
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
    assert!(round.ok());
    assert_eq!(round.records.len(), 1);
    assert_eq!(round.records.layout(), result.records.layout());
    assert_eq!(round.records.records()[0].city, "Jakarta");
}

#[test]
fn record_cells_follow_layout_headers() {
    let layout = ColumnLayout::new(vec![
        "CITY".to_string(),
        "SID_LAT".to_string(),
        "SID_LONG".to_string(),
        "OPERATOR_ID".to_string(),
    ]);
    let set = RecordSet::new(layout, vec![jakarta().with_extra("OPERATOR_ID", "77")]);
    let record = set.get(0).expect("one record");
    let cells: Vec<String> = set
        .layout()
        .headers()
        .iter()
        .map(|header| record.cell(header).unwrap_or_default())
        .collect();
    assert_eq!(cells, vec!["Jakarta", "-6.2088", "106.8456", "77"]);
}
