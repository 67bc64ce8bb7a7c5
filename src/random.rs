//! Seedable random source.
//!
//! Every stochastic operation in the crate takes a `&mut R where R: Rng`, so
//! callers decide between a reproducible seeded generator and OS entropy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform in-place shuffle (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}
