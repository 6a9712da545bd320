use proptest::prelude::*;
use sims_ingest::sample_template;
use sims_model::{Coordinates, Record, RecordSet, SamplingStrategy};
use sims_reduce::{ReduceSettings, reduce};
use sims_validate::validate;

fn station(idx: usize, coordinates: Coordinates) -> Record {
    Record::new(
        format!("City {idx}"),
        "PT Telkom",
        format!("Station {idx}"),
        "Broadcasting",
        "FM Radio",
        coordinates,
    )
}

fn is_subsequence(subset: &RecordSet, source: &RecordSet) -> bool {
    let mut remaining = source.iter();
    subset
        .iter()
        .all(|record| remaining.any(|candidate| candidate == record))
}

#[test]
fn template_random_sample_of_three() {
    let records = validate(&sample_template()).records;
    let first = reduce(&records, 3, SamplingStrategy::Random, 42).expect("reduce");
    let second = reduce(&records, 3, SamplingStrategy::Random, 42).expect("reduce");

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert!(is_subsequence(&first, &records));
    assert_eq!(first.layout(), records.layout());
}

#[test]
fn set_within_budget_is_returned_unchanged() {
    let records = RecordSet::from_records(
        (0..50)
            .map(|i| station(i, Coordinates::new(-6.0 + i as f64 * 0.01, 106.0)))
            .collect(),
    );
    for strategy in SamplingStrategy::ALL {
        let reduced = reduce(&records, 100, strategy, 42).expect("reduce");
        assert_eq!(reduced, records);
    }
}

#[test]
fn settings_drive_strategy() {
    let records = validate(&sample_template()).records;
    let reduction = ReduceSettings::default()
        .with_max_markers(2)
        .with_sampling_method(SamplingStrategy::ClusterRepresentative)
        .apply(&records)
        .expect("reduce");
    assert!(reduction.sampled);
    assert!(reduction.records.len() <= 2);
    assert!(!reduction.records.is_empty());
}

fn record_set() -> impl Strategy<Value = RecordSet> {
    prop::collection::vec(
        prop::option::of((-90.0f64..=90.0, -180.0f64..=180.0)),
        1..120,
    )
    .prop_map(|coordinates| {
        RecordSet::from_records(
            coordinates
                .into_iter()
                .enumerate()
                .map(|(idx, pair)| {
                    let coordinates = pair
                        .map_or(Coordinates::Absent, |(lat, lon)| Coordinates::new(lat, lon));
                    station(idx, coordinates)
                })
                .collect(),
        )
    })
}

fn strategy() -> impl Strategy<Value = SamplingStrategy> {
    prop::sample::select(SamplingStrategy::ALL.to_vec())
}

proptest! {
    #[test]
    fn result_is_bounded_non_empty_ordered_subset(
        records in record_set(),
        max_count in 1usize..60,
        strategy in strategy(),
        seed in any::<u64>(),
    ) {
        let reduced = reduce(&records, max_count, strategy, seed).expect("reduce");
        prop_assert!(!reduced.is_empty());
        prop_assert!(reduced.len() <= max_count);
        prop_assert!(is_subsequence(&reduced, &records));
    }

    #[test]
    fn reduction_is_idempotent(
        records in record_set(),
        max_count in 1usize..60,
        strategy in strategy(),
        seed in any::<u64>(),
    ) {
        let once = reduce(&records, max_count, strategy, seed).expect("reduce");
        let twice = reduce(&once, max_count, strategy, seed).expect("reduce");
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reduction_is_deterministic(
        records in record_set(),
        max_count in 1usize..60,
        strategy in strategy(),
        seed in any::<u64>(),
    ) {
        let first = reduce(&records, max_count, strategy, seed).expect("reduce");
        let second = reduce(&records, max_count, strategy, seed).expect("reduce");
        prop_assert_eq!(first, second);
    }
}
