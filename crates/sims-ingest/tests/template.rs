use sims_ingest::{read_csv_str, sample_template, write_sample_template};

#[test]
fn template_csv_snapshot() {
    let mut buffer = Vec::new();
    write_sample_template(&mut buffer).expect("write template");
    let csv = String::from_utf8(buffer).expect("utf8 csv");
    insta::assert_snapshot!(csv);
}

#[test]
fn template_csv_reads_back() {
    let mut buffer = Vec::new();
    write_sample_template(&mut buffer).expect("write template");
    let csv = String::from_utf8(buffer).expect("utf8 csv");
    let table = read_csv_str(&csv).expect("read template");
    assert_eq!(table, sample_template());
}
