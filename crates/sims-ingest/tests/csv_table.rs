use std::fs;

use sims_ingest::{read_csv_table, write_records_csv_file};
use sims_model::{Coordinates, Record, RecordSet};

#[test]
fn reads_station_file_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("stations.csv");
    fs::write(
        &path,
        "CITY , CLNT_NAME,STN_NAME,SERVICE,SUBSERVICE,SID_LONG,SID_LAT\n\
         Jakarta, PT Telkom ,Jakarta Tower,Broadcasting,FM Radio,106.8456,-6.2088\n\
         \n\
         Medan,PT Radio Sentosa,Medan Transmitter,Broadcasting,TV,98.6722,3.5952\n",
    )
    .expect("write file");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers[0], "CITY");
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0][1], "PT Telkom");
    assert_eq!(table.rows[1][6], "3.5952");
}

#[test]
fn written_file_reads_back_as_same_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("export.csv");
    let records = RecordSet::from_records(vec![
        Record::new(
            "Bandung",
            "PT Broadcast Indonesia",
            "Bandung Relay",
            "Cellular",
            "5G",
            Coordinates::new(-6.9175, 107.6191),
        )
        .with_frequency(2600.0)
        .with_bandwidth(40.0),
    ]);

    write_records_csv_file(&records, &path).expect("write csv");
    let table = read_csv_table(&path).expect("read csv");

    assert_eq!(
        table.headers,
        vec![
            "CITY",
            "CLNT_NAME",
            "STN_NAME",
            "SERVICE",
            "SUBSERVICE",
            "SID_LONG",
            "SID_LAT",
            "FREQ_MHZ",
            "BW_MHZ",
            "DATE"
        ]
    );
    assert_eq!(
        table.rows[0],
        vec![
            "Bandung",
            "PT Broadcast Indonesia",
            "Bandung Relay",
            "Cellular",
            "5G",
            "107.6191",
            "-6.9175",
            "2600",
            "40",
            ""
        ]
    );
}
