//! Sample upload shown to users who have not uploaded a file yet.

use std::io::Write;

use sims_model::{RawTable, StationColumn};

use crate::csv::write_raw_table_csv;
use crate::error::Result;

const TEMPLATE_ROWS: [[&str; 9]; 6] = [
    [
        "Jakarta",
        "PT Telkom",
        "Jakarta Tower",
        "Broadcasting",
        "FM Radio",
        "106.8456",
        "-6.2088",
        "98.5",
        "0.2",
    ],
    [
        "Surabaya",
        "PT Media Networks",
        "Surabaya Station",
        "Mobile",
        "4G LTE",
        "112.752",
        "-7.2575",
        "1800",
        "20",
    ],
    [
        "Bandung",
        "PT Broadcast Indonesia",
        "Bandung Relay",
        "Cellular",
        "5G",
        "107.6191",
        "-6.9175",
        "2600",
        "40",
    ],
    [
        "Medan",
        "PT Radio Sentosa",
        "Medan Transmitter",
        "Broadcasting",
        "TV",
        "98.6722",
        "3.5952",
        "205",
        "0.1",
    ],
    [
        "Makassar",
        "PT Telkom",
        "Makassar Tower",
        "Satellite",
        "Internet",
        "119.4144",
        "-5.1477",
        "14000",
        "36",
    ],
    [
        "Semarang",
        "PT Radio Indonesia",
        "Semarang Station",
        "Radio",
        "AM Radio",
        "110.4203",
        "-6.9932",
        "540",
        "0.01",
    ],
];

const TEMPLATE_COLUMNS: [StationColumn; 9] = [
    StationColumn::City,
    StationColumn::ClientName,
    StationColumn::StationName,
    StationColumn::Service,
    StationColumn::Subservice,
    StationColumn::Longitude,
    StationColumn::Latitude,
    StationColumn::FrequencyMhz,
    StationColumn::BandwidthMhz,
];

/// Six example stations covering the required and common optional columns.
pub fn sample_template() -> RawTable {
    let mut table = RawTable::new(
        TEMPLATE_COLUMNS
            .iter()
            .map(|column| column.header().to_string())
            .collect(),
    );
    for row in TEMPLATE_ROWS {
        table.push_row(row.iter().map(|cell| (*cell).to_string()).collect());
    }
    table
}

/// Writes the sample template as CSV.
pub fn write_sample_template<W: Write>(writer: W) -> Result<()> {
    write_raw_table_csv(&sample_template(), writer)
}
