//! Seeded random number generation for reproducible sampling.

use crate::core::types::Seed;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Construct the generator used by every sampling operation.
///
/// `StdRng` is deterministic for a given seed and `rand` version, which is
/// what makes repeated calls with the same seed return the same rows.
pub fn seeded_rng(seed: Seed) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `amount` elements of `pool` uniformly without replacement.
///
/// The returned elements follow the order in which they were drawn, not
/// their order in `pool`. Callers must ensure `amount <= pool.len()`.
pub fn draw_without_replacement<R: rand::Rng + ?Sized>(
    rng: &mut R,
    pool: &[usize],
    amount: usize,
) -> Vec<usize> {
    debug_assert!(amount <= pool.len());
    if amount == 0 {
        return Vec::new();
    }
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}
