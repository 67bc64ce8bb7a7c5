//! Core solution types for the sorting GA.
//!
//! A [`Genome`] is a permutation of the input multiset; an [`Individual`]
//! owns one genome and derives its fitness from it on demand.

use std::collections::HashSet;

/// Ordered sequence of integers; a permutation of the run's input multiset.
pub type Genome = Vec<i64>;

/// A candidate permutation.
///
/// Fitness is not stored: [`fitness`](Individual::fitness) is recomputed
/// from the genome on every call, so it can never drift out of sync with
/// mutations applied to the genome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genome: Genome,
}

impl Individual {
    /// Wraps a genome.
    pub fn new(genome: Genome) -> Self {
        Self { genome }
    }

    /// The genome.
    pub fn genome(&self) -> &[i64] {
        &self.genome
    }

    pub(crate) fn genome_mut(&mut self) -> &mut [i64] {
        &mut self.genome
    }

    /// Consumes the individual, returning its genome.
    pub fn into_genome(self) -> Genome {
        self.genome
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Whether the genome is empty.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// Length of the greedy strictly-increasing run.
    ///
    /// Scans left to right, keeping the first element and then every
    /// element strictly greater than the last kept one. This is *not* the
    /// longest increasing subsequence: `[5, 1, 2, 3]` scores 1.
    ///
    /// # Complexity
    /// O(n)
    pub fn fitness(&self) -> usize {
        let mut iter = self.genome.iter();
        let Some(&first) = iter.next() else {
            return 0;
        };

        let mut last = first;
        let mut kept = 1;
        for &value in iter {
            if value > last {
                last = value;
                kept += 1;
            }
        }
        kept
    }

    /// Whether the fitness has reached the genome length, i.e. the genome
    /// is strictly ascending.
    pub fn is_sorted(&self) -> bool {
        self.fitness() == self.genome.len()
    }
}

/// Whether `values` holds some value more than once.
///
/// A genome with duplicates can never be strictly ascending, so a run over
/// such an input only stops at the generation cap.
pub fn has_duplicates(values: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|v| !seen.insert(*v))
}

impl From<Genome> for Individual {
    fn from(genome: Genome) -> Self {
        Self::new(genome)
    }
}
