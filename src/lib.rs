//! Genetic algorithm that sorts an integer multiset by evolution.
//!
//! A population of random permutations of the input is evolved with
//! elitism, sequential-pair segment crossover, and swap mutation until some
//! individual is strictly ascending. The generation at which that happens
//! is the run's result.
//!
//! - [`ga`]: individuals, population, operators, engine, and run loop
//! - [`input`]: comma-separated integer parsing for front ends
//! - [`random`]: seedable generator used for reproducible runs
//!
//! ```
//! use u_sortevo::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_mutation_rate(0.05)
//!     .with_seed(42);
//! let result = GaRunner::run(&[5, 4, 3, 2, 1], &config).unwrap();
//! assert_eq!(result.best.genome(), &[1, 2, 3, 4, 5]);
//! println!("sorted at generation {}", result.generations);
//! ```

pub mod error;
pub mod ga;
pub mod input;
pub mod random;

pub use error::{EvoError, Result};
