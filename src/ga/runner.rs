//! GA run loop.
//!
//! [`GaRunner`] seeds a population and calls [`EvolutionEngine::evolve`]
//! until some individual is fully sorted (or the optional generation cap is
//! hit).

use super::config::GaConfig;
use super::engine::EvolutionEngine;
use super::population::Population;
use super::types::{has_duplicates, Individual};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// Phase of the run loop as seen from the per-generation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Best fitness is below the target; another generation will follow.
    Running,
    /// The loop halts after this generation.
    Done,
}

/// Snapshot passed to the callback once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// 1-based generation counter.
    pub generation: usize,
    /// Best fitness in the current population.
    pub best_fitness: usize,
    /// Fitness of a fully sorted genome (the input length).
    pub target_fitness: usize,
    pub state: RunState,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best individual of the final generation.
    pub best: Individual,

    /// Same as `best.fitness()`.
    pub best_fitness: usize,

    /// Generation at which the run stopped. When `converged`, this is the
    /// first generation containing a fully sorted individual.
    pub generations: usize,

    /// `false` only when the generation cap stopped the run first.
    pub converged: bool,

    /// Trial identifier from the configuration.
    pub trial: Option<usize>,

    /// Best fitness of each generation; entry `k` is generation `k + 1`.
    /// Empty unless [`GaConfig::record_history`] is set.
    pub fitness_history: Vec<usize>,
}

/// Executes the GA run loop.
///
/// # Usage
///
/// ```
/// use u_sortevo::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&[3, 1, 2], &config).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best.genome(), &[1, 2, 3]);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the generator implied by `config.seed`.
    ///
    /// # Errors
    /// Returns the [`GaConfig::validate`] error for an invalid configuration.
    pub fn run(input: &[i64], config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(input, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied generator. `config.seed` is
    /// ignored.
    pub fn run_with_rng<R: Rng>(input: &[i64], config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        Self::run_with_callback(input, config, rng, |_| {})
    }

    /// Runs the GA, invoking `on_generation` once per generation (including
    /// the final one, whose `state` is [`RunState::Done`]).
    pub fn run_with_callback<R, F>(
        input: &[i64],
        config: &GaConfig,
        rng: &mut R,
        mut on_generation: F,
    ) -> Result<GaResult>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let trial = config.trial;
        let target = input.len();
        if target == 0 {
            log::warn!("trial {trial:?}: empty input converges immediately");
        }
        if has_duplicates(input) {
            match config.max_generations {
                Some(cap) => log::warn!(
                    "trial {trial:?}: input has duplicate values and cannot be sorted strictly; run ends at generation cap {cap}"
                ),
                None => log::warn!(
                    "trial {trial:?}: input has duplicate values and cannot be sorted strictly; without a generation cap the run never ends"
                ),
            }
        }

        let original = Individual::new(input.to_vec());
        if original.is_sorted() {
            log::info!("trial {trial:?}: input already sorted");
            on_generation(&GenerationStats {
                generation: 1,
                best_fitness: target,
                target_fitness: target,
                state: RunState::Done,
            });
            return Ok(GaResult {
                best: original,
                best_fitness: target,
                generations: 1,
                converged: true,
                trial,
                fitness_history: if config.record_history {
                    vec![target]
                } else {
                    Vec::new()
                },
            });
        }

        let engine = EvolutionEngine::from_config(config)?;
        let mut population = Population::seed_random(input, config.population_size, rng);
        let mut generation = 1usize;
        let mut fitness_history = Vec::new();

        loop {
            // validate() guarantees population_size >= 1 and evolve keeps it.
            let best_fitness = population.best_individual().map_or(0, Individual::fitness);
            if config.record_history {
                fitness_history.push(best_fitness);
            }

            let converged = best_fitness >= target;
            let capped = config.max_generations.is_some_and(|cap| generation >= cap);
            let state = if converged || capped {
                RunState::Done
            } else {
                RunState::Running
            };

            log::debug!("trial {trial:?} generation {generation}: best fitness {best_fitness}/{target}");
            on_generation(&GenerationStats {
                generation,
                best_fitness,
                target_fitness: target,
                state,
            });

            if state == RunState::Done {
                if converged {
                    log::info!("trial {trial:?}: sorted at generation {generation}");
                } else {
                    log::warn!(
                        "trial {trial:?}: stopped at generation cap {generation} with best fitness {best_fitness}/{target}"
                    );
                }

                let best = population.best_individual().cloned().unwrap_or(original);
                return Ok(GaResult {
                    best,
                    best_fitness,
                    generations: generation,
                    converged,
                    trial,
                    fitness_history,
                });
            }

            population = engine.evolve(&population, rng);
            generation += 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvoError;

    fn sorted(genome: &[i64]) -> Vec<i64> {
        let mut v = genome.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_sorted_input_converges_at_generation_one() {
        for rate in [0.0, 0.05, 1.0] {
            for size in [1, 3, 20] {
                let config = GaConfig::default()
                    .with_population_size(size)
                    .with_mutation_rate(rate)
                    .with_record_history(true)
                    .with_seed(42);
                let result = GaRunner::run(&[1, 2, 3, 4, 5], &config).unwrap();
                assert_eq!(result.generations, 1);
                assert!(result.converged);
                assert_eq!(result.best.genome(), &[1, 2, 3, 4, 5]);
                assert_eq!(result.fitness_history, vec![5]);
            }
        }
    }

    #[test]
    fn test_sorted_shuffle_in_seed_population_stops_immediately() {
        // 2000 shuffles of 3 elements all missing the identity has
        // probability (5/6)^2000.
        let config = GaConfig::default()
            .with_population_size(2000)
            .with_mutation_rate(1.0)
            .with_seed(42);
        let result = GaRunner::run(&[3, 1, 2], &config).unwrap();
        assert_eq!(result.generations, 1);
        assert_eq!(result.best.genome(), &[1, 2, 3]);
    }

    #[test]
    fn test_reverse_input_converges() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_mutation_rate(0.05)
            .with_max_generations(100_000)
            .with_seed(42);
        let result = GaRunner::run(&[5, 4, 3, 2, 1], &config).unwrap();

        assert!(result.converged, "no convergence within cap");
        assert!(result.generations >= 1);
        assert_eq!(result.best_fitness, 5);
        assert_eq!(result.best.fitness(), 5);
        assert_eq!(sorted(result.best.genome()), vec![1, 2, 3, 4, 5]);
        assert_eq!(result.best.genome(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_mutation_rate(0.1)
            .with_max_generations(50_000)
            .with_seed(7);
        let input = [6, 2, 9, 4, 1, 8];
        let a = GaRunner::run(&input, &config).unwrap();
        let b = GaRunner::run(&input, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_is_monotone_with_protected_elite() {
        let config = GaConfig::default()
            .with_population_size(8)
            .with_mutation_rate(0.5)
            .with_max_generations(200)
            .with_record_history(true)
            .with_seed(3);
        let input: Vec<i64> = (0..12).rev().collect();
        let result = GaRunner::run(&input, &config).unwrap();

        assert_eq!(result.fitness_history.len(), result.generations);
        for w in result.fitness_history.windows(2) {
            assert!(w[1] >= w[0], "best fitness regressed: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_generation_cap_stops_run() {
        // Duplicates can never form a strictly ascending genome.
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(25)
            .with_record_history(true)
            .with_seed(1);
        let result = GaRunner::run(&[2, 1, 2, 1], &config).unwrap();

        assert!(!result.converged);
        assert_eq!(result.generations, 25);
        assert_eq!(result.fitness_history.len(), 25);
        assert!(result.best_fitness < 4);
    }

    #[test]
    fn test_duplicate_input_keeps_no_history_by_default() {
        let input = [3, 1, 1];
        assert!(has_duplicates(&input));

        let config = GaConfig::default()
            .with_max_generations(100_000)
            .with_seed(7);
        let result = GaRunner::run(&input, &config).unwrap();

        assert!(!result.converged);
        assert_eq!(result.generations, 100_000);
        assert_eq!(result.best_fitness, 2);
        assert!(result.fitness_history.is_empty());
    }

    #[test]
    fn test_sorted_input_history_follows_setting() {
        let config = GaConfig::default().with_seed(0);
        let result = GaRunner::run(&[1, 2, 3], &config).unwrap();
        assert!(result.fitness_history.is_empty());
    }

    #[test]
    fn test_empty_input_converges_immediately() {
        let config = GaConfig::default().with_seed(0);
        let result = GaRunner::run(&[], &config).unwrap();
        assert!(result.converged);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, 0);
        assert!(result.best.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(
            GaRunner::run(&[1, 2], &config),
            Err(EvoError::InvalidPopulationSize)
        );

        let config = GaConfig::default().with_mutation_rate(2.0);
        assert_eq!(
            GaRunner::run(&[1, 2], &config),
            Err(EvoError::InvalidMutationRate(2.0))
        );
    }

    #[test]
    fn test_population_of_one_still_runs() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_mutation_rate(1.0)
            .with_protect_elite(false)
            .with_max_generations(10_000)
            .with_seed(5);
        let result = GaRunner::run(&[3, 1, 2], &config).unwrap();
        assert!(result.converged);
        assert_eq!(result.best.genome(), &[1, 2, 3]);
    }

    #[test]
    fn test_trial_is_echoed() {
        let config = GaConfig::default().with_seed(0).with_trial(4);
        let result = GaRunner::run(&[1], &config).unwrap();
        assert_eq!(result.trial, Some(4));
    }

    #[test]
    fn test_callback_sees_every_generation() {
        let config = GaConfig::default()
            .with_population_size(6)
            .with_max_generations(40)
            .with_record_history(true)
            .with_seed(9);
        let mut rng = create_rng(9);
        let mut seen = Vec::new();
        let result = GaRunner::run_with_callback(&[4, 3, 2, 1, 0], &config, &mut rng, |s| {
            seen.push(*s)
        })
        .unwrap();

        assert_eq!(seen.len(), result.generations);
        for (k, s) in seen.iter().enumerate() {
            assert_eq!(s.generation, k + 1);
            assert_eq!(s.target_fitness, 5);
            assert_eq!(s.best_fitness, result.fitness_history[k]);
        }
        let (last, rest) = seen.split_last().unwrap();
        assert_eq!(last.state, RunState::Done);
        assert!(rest.iter().all(|s| s.state == RunState::Running));
    }
}
