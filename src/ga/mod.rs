//! Sorting genetic algorithm.
//!
//! Evolves permutations of a fixed integer multiset until one of them is
//! strictly ascending. Fitness is the length of the greedy increasing run
//! (see [`Individual::fitness`]).
//!
//! # Key Types
//!
//! - [`Individual`]: a candidate permutation
//! - [`Population`]: ordered individuals; order drives crossover pairing
//! - [`EvolutionEngine`]: elitism, sequential-pair crossover, mutation
//! - [`GaConfig`]: population size, mutation rate, elite policy, cap, seed
//! - [`GaRunner`]: the generation loop, producing a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: multiset-safe crossover and swap mutation

mod config;
mod engine;
pub mod operators;
mod population;
mod runner;
mod types;

pub use config::GaConfig;
pub use engine::EvolutionEngine;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats, RunState};
pub use types::{has_duplicates, Genome, Individual};
