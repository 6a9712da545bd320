//! Cluster-representative sampling.
//!
//! Seeded k-means over valid coordinates. Iteration stops when assignments
//! settle, when no centroid moves further than [`CONVERGENCE_TOLERANCE`], or
//! at [`MAX_ITERATIONS`]. Each non-empty cluster contributes the member
//! nearest its centroid.
//!
//! Records without coordinates are dropped. When no record has coordinates,
//! sampling falls back to uniform random over all records.

use sims_model::RecordSet;
use tracing::debug;

use crate::geo::{LocatedPoint, located_points};
use crate::random::sample_indices;

/// Upper bound on assignment/update rounds.
pub const MAX_ITERATIONS: usize = 100;

/// Largest squared centroid shift, in squared degrees, still treated as settled.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Centroid {
    latitude: f64,
    longitude: f64,
}

/// Source positions of the cluster representatives, ascending.
pub fn cluster_representatives(records: &RecordSet, max_count: usize, seed: u64) -> Vec<usize> {
    let points = located_points(records);
    if points.is_empty() {
        debug!(records = records.len(), "no located records, sampling at random");
        return sample_indices(records.len(), max_count, seed);
    }
    if points.len() <= max_count {
        return points.iter().map(|point| point.index).collect();
    }

    let k = max_count.min(points.len());
    let mut centroids: Vec<Centroid> = sample_indices(points.len(), k, seed)
        .into_iter()
        .map(|idx| Centroid {
            latitude: points[idx].latitude,
            longitude: points[idx].longitude,
        })
        .collect();

    let mut assignments = vec![usize::MAX; points.len()];
    let iterations = run_kmeans(&points, &mut centroids, &mut assignments);
    debug!(k, iterations, points = points.len(), "k-means finished");

    representatives(&points, &assignments, &centroids)
}

/// Assign and update until settled. Returns the number of rounds run.
fn run_kmeans(
    points: &[LocatedPoint],
    centroids: &mut [Centroid],
    assignments: &mut [usize],
) -> usize {
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let mut changed = false;
        for (slot, point) in assignments.iter_mut().zip(points) {
            let nearest = nearest_centroid(point, centroids);
            if *slot != nearest {
                *slot = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }
        if update_centroids(points, assignments, centroids) <= CONVERGENCE_TOLERANCE {
            break;
        }
    }
    iterations
}

/// Index of the closest centroid; ties go to the lowest index.
fn nearest_centroid(point: &LocatedPoint, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let distance = point.squared_distance(centroid.latitude, centroid.longitude);
        if distance < best_distance {
            best = idx;
            best_distance = distance;
        }
    }
    best
}

/// Move each centroid to the mean of its members. Empty clusters stay put.
/// Returns the largest squared shift of any centroid.
fn update_centroids(
    points: &[LocatedPoint],
    assignments: &[usize],
    centroids: &mut [Centroid],
) -> f64 {
    let mut sums = vec![(0.0f64, 0.0f64, 0usize); centroids.len()];
    for (point, cluster) in points.iter().zip(assignments) {
        let entry = &mut sums[*cluster];
        entry.0 += point.latitude;
        entry.1 += point.longitude;
        entry.2 += 1;
    }
    let mut max_shift = 0.0f64;
    for (centroid, (lat_sum, lon_sum, members)) in centroids.iter_mut().zip(sums) {
        if members > 0 {
            let moved = Centroid {
                latitude: lat_sum / members as f64,
                longitude: lon_sum / members as f64,
            };
            let d_lat = moved.latitude - centroid.latitude;
            let d_lon = moved.longitude - centroid.longitude;
            max_shift = max_shift.max(d_lat * d_lat + d_lon * d_lon);
            *centroid = moved;
        }
    }
    max_shift
}

/// Member nearest each centroid; ties go to the earliest source record.
fn representatives(
    points: &[LocatedPoint],
    assignments: &[usize],
    centroids: &[Centroid],
) -> Vec<usize> {
    let mut best: Vec<Option<(usize, f64)>> = vec![None; centroids.len()];
    for (point, cluster) in points.iter().zip(assignments) {
        let centroid = centroids[*cluster];
        let distance = point.squared_distance(centroid.latitude, centroid.longitude);
        let slot = &mut best[*cluster];
        match slot {
            Some((_, current)) if *current <= distance => {}
            _ => *slot = Some((point.index, distance)),
        }
    }
    let mut picked: Vec<usize> = best.into_iter().flatten().map(|(idx, _)| idx).collect();
    picked.sort_unstable();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use sims_model::{Coordinates, Record};

    fn located(lat: f64, lon: f64) -> Record {
        Record::new("City", "c", "s", "Radio", "FM", Coordinates::new(lat, lon))
    }

    fn two_groups() -> RecordSet {
        RecordSet::from_records(vec![
            located(-6.20, 106.80),
            located(-6.21, 106.81),
            located(-6.19, 106.82),
            located(3.59, 98.67),
            located(3.60, 98.68),
            located(3.58, 98.66),
        ])
    }

    #[test]
    fn one_representative_per_group() {
        let picked = cluster_representatives(&two_groups(), 2, 42);
        assert_eq!(picked.len(), 2);
        assert!(picked[0] < 3);
        assert!(picked[1] >= 3);
    }

    #[test]
    fn deterministic_for_seed() {
        let records = two_groups();
        assert_eq!(
            cluster_representatives(&records, 3, 9),
            cluster_representatives(&records, 3, 9)
        );
    }

    #[test]
    fn absent_records_are_dropped() {
        let mut records = two_groups().into_records();
        records.insert(0, Record::default());
        let picked = cluster_representatives(&RecordSet::from_records(records), 2, 42);
        assert!(!picked.contains(&0));
    }

    #[test]
    fn falls_back_to_random_without_coordinates() {
        let records = RecordSet::from_records(vec![Record::default(); 10]);
        let picked = cluster_representatives(&records, 4, 42);
        assert_eq!(picked, sample_indices(10, 4, 42));
    }

    #[test]
    fn identical_points_collapse_to_one() {
        let records = RecordSet::from_records(vec![located(1.0, 1.0); 8]);
        assert_eq!(cluster_representatives(&records, 3, 5), vec![0]);
    }

    #[test]
    fn separated_groups_settle_in_a_few_rounds() {
        let points = located_points(&two_groups());
        let mut centroids = vec![
            Centroid { latitude: -6.20, longitude: 106.80 },
            Centroid { latitude: 3.59, longitude: 98.67 },
        ];
        let mut assignments = vec![usize::MAX; points.len()];
        let iterations = run_kmeans(&points, &mut centroids, &mut assignments);
        assert!(iterations <= 3, "took {iterations} rounds");
        assert_eq!(assignments, vec![0, 0, 0, 1, 1, 1]);
        assert!((centroids[0].latitude + 6.20).abs() < 1e-9);
        assert!((centroids[1].longitude - 98.67).abs() < 1e-9);
    }

    #[test]
    fn update_reports_largest_shift() {
        let points = located_points(&two_groups());
        let mut centroids = vec![
            Centroid { latitude: -6.20, longitude: 106.80 },
            Centroid { latitude: 3.59, longitude: 98.67 },
        ];
        let assignments = vec![0, 0, 0, 1, 1, 1];
        let first = update_centroids(&points, &assignments, &mut centroids);
        assert!(first > 0.0);
        let second = update_centroids(&points, &assignments, &mut centroids);
        assert!(second <= CONVERGENCE_TOLERANCE);
    }

    #[test]
    fn nearest_centroid_prefers_lowest_index_on_tie() {
        let point = LocatedPoint {
            index: 0,
            latitude: 0.0,
            longitude: 0.0,
        };
        let centroids = [
            Centroid { latitude: 1.0, longitude: 0.0 },
            Centroid { latitude: -1.0, longitude: 0.0 },
        ];
        assert_eq!(nearest_centroid(&point, &centroids), 0);
    }
}
