//! Validation check modules.
//!
//! Each module performs one kind of check over the raw upload table.

pub mod columns;
pub mod coordinates;
pub mod optional;

use sims_model::{Record, StationColumn};

use self::columns::ColumnResolution;
use self::coordinates::{CoordinateTally, read_coordinates};
use self::optional::{OptionalTally, parse_date, parse_measurement};

/// Build one typed record from a raw row, counting any values it had to clear.
pub fn build_record(
    row: &[String],
    columns: &ColumnResolution,
    coordinates: &mut CoordinateTally,
    optional: &mut OptionalTally,
) -> Record {
    let text = |column: StationColumn| columns.text(row, column);

    let reading = read_coordinates(
        text(StationColumn::Latitude),
        text(StationColumn::Longitude),
    );
    coordinates.record(reading);

    let mut record = Record::new(
        text(StationColumn::City),
        text(StationColumn::ClientName),
        text(StationColumn::StationName),
        text(StationColumn::Service),
        text(StationColumn::Subservice),
        reading.coordinates(),
    );

    if columns.contains(StationColumn::FrequencyMhz) {
        record.frequency_mhz = parse_measurement(text(StationColumn::FrequencyMhz));
        optional.record(StationColumn::FrequencyMhz, &record.frequency_mhz);
    }
    if columns.contains(StationColumn::BandwidthMhz) {
        record.bandwidth_mhz = parse_measurement(text(StationColumn::BandwidthMhz));
        optional.record(StationColumn::BandwidthMhz, &record.bandwidth_mhz);
    }
    if columns.contains(StationColumn::Date) {
        record.date = parse_date(text(StationColumn::Date));
        optional.record(StationColumn::Date, &record.date);
    }

    for (header, idx) in columns.extras() {
        let value = row.get(*idx).map_or("", |cell| cell.trim());
        record.extra.insert(header.clone(), value.to_string());
    }

    record
}
