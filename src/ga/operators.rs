//! Permutation operators for integer-multiset genomes.
//!
//! Genomes may contain duplicate values, so every operator here works by
//! value counts rather than by index bitmaps.
//!
//! # Crossover
//!
//! - [`crossover`]: segment-preserving crossover with an explicit window
//! - [`crossover_random`]: the same with a window drawn by [`random_window`]
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions, O(1)
//! - [`mutate`]: per-individual Bernoulli trial followed by a swap

use super::types::{Genome, Individual};
use rand::Rng;
use std::collections::HashMap;

// ============================================================================
// Crossover operators
// ============================================================================

/// Segment-preserving crossover.
///
/// # Algorithm
///
/// 1. `segment = father[start..=end]`
/// 2. `remainder` = `mother` with one occurrence removed per occurrence in
///    `segment` (multiset difference), mother's order preserved
/// 3. child = `remainder[..start]` ++ `segment` ++ `remainder[start..]`
///
/// The segment lands at the same positions it occupied in the father, and
/// the child has the father's length and multiset. With `start == 0` and
/// `end == n - 1` the child equals the father.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or the window is not
/// `start <= end < n`.
pub fn crossover(father: &[i64], mother: &[i64], start: usize, end: usize) -> Genome {
    let n = father.len();
    assert_eq!(n, mother.len(), "parents must have equal length");
    assert!(
        start <= end && end < n,
        "crossover window [{start}, {end}] out of range for length {n}"
    );

    let segment = &father[start..=end];

    let mut pending: HashMap<i64, usize> = HashMap::with_capacity(segment.len());
    for &v in segment {
        *pending.entry(v).or_insert(0) += 1;
    }

    let mut remainder = Vec::with_capacity(n - segment.len());
    for &v in mother {
        match pending.get_mut(&v) {
            Some(count) if *count > 0 => *count -= 1,
            _ => remainder.push(v),
        }
    }

    // start + segment.len() == end + 1 <= n, so remainder has at least
    // `start` elements.
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&remainder[..start]);
    child.extend_from_slice(segment);
    child.extend_from_slice(&remainder[start..]);

    debug_assert_eq!(child.len(), n, "parents are not permutations of one multiset");
    child
}

/// Crossover with a freshly drawn window.
///
/// Empty parents produce an empty child without consuming randomness.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn crossover_random<R: Rng>(father: &[i64], mother: &[i64], rng: &mut R) -> Genome {
    assert_eq!(father.len(), mother.len(), "parents must have equal length");
    if father.is_empty() {
        return Vec::new();
    }
    let (start, end) = random_window(father.len(), rng);
    crossover(father, mother, start, end)
}

/// Draws a crossover window `[start, end]` within `0..n`.
///
/// `start` is uniform over `0..n`, then `end` is uniform over `start..n`,
/// so single-element windows are possible.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_window<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "cannot draw a window over an empty genome");
    let start = rng.random_range(0..n);
    let end = rng.random_range(start..n);
    (start, end)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two independently drawn positions.
///
/// The two indices may coincide, in which case the genome is unchanged.
/// Genomes shorter than two elements are left alone.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(genome: &mut [i64], rng: &mut R) {
    let n = genome.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genome.swap(i, j);
}

/// Mutation pass over a slice of individuals.
///
/// Each individual independently draws `u` from `[0, 1)` and receives a
/// [`swap_mutation`] when `u < rate`, so `rate` is the per-individual
/// mutation probability. Returns the number of individuals that received a
/// swap (coinciding indices still count).
///
/// # Panics
/// Panics if `rate` is not within `[0, 1]` (NaN included).
pub fn mutate<R: Rng>(individuals: &mut [Individual], rate: f64, rng: &mut R) -> usize {
    assert!(
        (0.0..=1.0).contains(&rate),
        "mutation rate {rate} out of range [0, 1]"
    );
    let mut swapped = 0;
    for ind in individuals.iter_mut() {
        if rng.random::<f64>() < rate {
            swap_mutation(ind.genome_mut(), rng);
            swapped += 1;
        }
    }
    swapped
}

// ============================================================================
// Tests
// ============================================================================
