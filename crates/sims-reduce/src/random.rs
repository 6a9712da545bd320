//! Uniform sampling without replacement.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

/// Pick `amount` distinct positions out of `length`, in ascending order.
///
/// The generator is created from `seed` on every call, so equal inputs always
/// give equal output.
pub fn sample_indices(length: usize, amount: usize, seed: u64) -> Vec<usize> {
    if amount >= length {
        return (0..length).collect();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, length, amount).into_vec();
    picked.sort_unstable();
    picked
}
