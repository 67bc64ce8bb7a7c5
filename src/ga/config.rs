//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{EvoError, Result};

/// Configuration for the sorting GA.
///
/// # Defaults
///
/// ```
/// use u_sortevo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert!(config.protect_elite);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_sortevo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.1)
///     .with_max_generations(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 1.
    ///
    /// A population of one never produces offspring: every generation is
    /// just the elite, optionally mutated.
    pub population_size: usize,

    /// Per-individual probability of a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the elite copied into each new generation is exempt from
    /// that generation's mutation pass.
    ///
    /// When `false`, mutation runs over the whole new population, elite
    /// included, so the best-known genome can degrade.
    pub protect_elite: bool,

    /// Optional cap on the generation counter.
    ///
    /// `None` (the default) runs until an individual is fully sorted,
    /// which may never happen for pathological inputs.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Caller-supplied run identifier, echoed in the result and in log
    /// records.
    pub trial: Option<usize>,

    /// Whether [`GaResult::fitness_history`](super::GaResult::fitness_history)
    /// is filled in. Off by default: an uncapped run that never converges
    /// would otherwise grow the history without bound.
    pub record_history: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.05,
            protect_elite: true,
            max_generations: None,
            seed: None,
            trial: None,
            record_history: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Not clamped: out-of-range values are reported by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets whether the elite is exempt from mutation.
    pub fn with_protect_elite(mut self, protect: bool) -> Self {
        self.protect_elite = protect;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tags the run with a trial identifier.
    pub fn with_trial(mut self, trial: usize) -> Self {
        self.trial = Some(trial);
        self
    }

    /// Enables or disables the per-generation fitness history.
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvoError::InvalidPopulationSize);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvoError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_generations == Some(0) {
            return Err(EvoError::InvalidGenerationCap);
        }
        Ok(())
    }
}
