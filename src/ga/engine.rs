//! One generation of the sorting GA.
//!
//! [`EvolutionEngine::evolve`] maps a population to its successor:
//! elite copy → sequential-pair crossover → mutation.

use super::config::GaConfig;
use super::operators::{crossover_random, mutate};
use super::population::Population;
use super::types::Individual;
use crate::error::{EvoError, Result};
use rand::Rng;

/// Per-generation operator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionEngine {
    /// Per-individual swap probability.
    pub mutation_rate: f64,
    /// Skip the elite slot during mutation.
    pub protect_elite: bool,
}

impl EvolutionEngine {
    /// # Errors
    /// [`EvoError::InvalidMutationRate`] unless `mutation_rate` lies within
    /// `[0, 1]` (NaN included).
    pub fn new(mutation_rate: f64, protect_elite: bool) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(EvoError::InvalidMutationRate(mutation_rate));
        }
        Ok(Self {
            mutation_rate,
            protect_elite,
        })
    }

    pub fn from_config(config: &GaConfig) -> Result<Self> {
        Self::new(config.mutation_rate, config.protect_elite)
    }

    /// Produces the next generation.
    ///
    /// 1. The best individual of `population` is cloned as the first member.
    /// 2. Each adjacent pair `(i, i + 1)` yields one child with `i` as father
    ///    and `i + 1` as mother, appended in order. The last individual has
    ///    no successor and there is no wraparound.
    /// 3. The new population goes through [`mutate`]; with `protect_elite`
    ///    the first slot is skipped.
    ///
    /// A population of size `S ≥ 1` yields exactly `S` members
    /// (1 elite + `S − 1` children). An empty population yields an empty one.
    pub fn evolve<R: Rng>(&self, population: &Population, rng: &mut R) -> Population {
        let Some(elite) = population.best_individual() else {
            return Population::default();
        };

        let mut next = Population::with_capacity(population.len());
        next.push(elite.clone());

        for pair in population.individuals().windows(2) {
            let child = crossover_random(pair[0].genome(), pair[1].genome(), rng);
            next.push(Individual::new(child));
        }

        let skip = usize::from(self.protect_elite);
        let swapped = mutate(&mut next.individuals_mut()[skip..], self.mutation_rate, rng);
        log::trace!(
            "evolved {} -> {} individuals, {} mutated",
            population.len(),
            next.len(),
            swapped
        );

        next
    }
}
