use rand::{Rng, RngCore};

use m2mseed_core::Identifier;

use crate::errors::SeedingError;

/// Draw an association count uniformly from `[min, max]` inclusive.
pub fn draw_count(rng: &mut dyn RngCore, min: u64, max: u64) -> u64 {
    rng.random_range(min..=max)
}

/// Sample `count` pairwise-distinct identifiers uniformly without
/// replacement, via a partial Fisher-Yates shuffle over an index list.
///
/// The feasibility check keeps `count` within the pool size for valid
/// configurations; the bound is still enforced here because the pool is
/// fixed while counts are drawn per source entity.
pub fn sample_distinct(
    rng: &mut dyn RngCore,
    pool: &[Identifier],
    count: usize,
) -> Result<Vec<Identifier>, SeedingError> {
    if count > pool.len() {
        return Err(SeedingError::Sampling {
            requested: count,
            available: pool.len(),
        });
    }

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    for slot in 0..count {
        let pick = rng.random_range(slot..indices.len());
        indices.swap(slot, pick);
    }

    Ok(indices[..count]
        .iter()
        .map(|&idx| pool[idx].clone())
        .collect())
}
