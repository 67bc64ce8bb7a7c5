//! Ordered population of individuals.
//!
//! Order is meaningful: the evolution engine crosses each individual with
//! its successor, so [`Population`] never reorders its members.

use super::types::Individual;
use crate::random::shuffle;
use rand::Rng;

/// An ordered collection of [`Individual`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Wraps an already-built list of individuals, keeping their order.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Seeds `size` individuals, each an independent uniform shuffle of its
    /// own copy of `base_sequence`.
    pub fn seed_random<R: Rng>(base_sequence: &[i64], size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| {
                let mut genome = base_sequence.to_vec();
                shuffle(&mut genome, rng);
                Individual::new(genome)
            })
            .collect();
        Self { individuals }
    }

    /// Returns the individual with the strictly highest fitness.
    ///
    /// Ties go to the first one in population order. `None` only when the
    /// population is empty.
    pub fn best_individual(&self) -> Option<&Individual> {
        let mut iter = self.individuals.iter();
        let mut best = iter.next()?;
        let mut best_fitness = best.fitness();
        for ind in iter {
            let f = ind.fitness();
            if f > best_fitness {
                best = ind;
                best_fitness = f;
            }
        }
        Some(best)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub(crate) fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
