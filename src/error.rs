//! Error types shared by the configuration layer, the runner, and input parsing.

/// Errors reported when a run cannot be started.
///
/// Operator preconditions (unequal parent lengths, out-of-range crossover
/// windows) are programming errors and panic instead; see
/// [`crate::ga::operators`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvoError {
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,

    #[error("mutation_rate must lie within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("max_generations must be at least 1 when set")]
    InvalidGenerationCap,

    #[error("input sequence is empty")]
    EmptyInput,

    #[error("invalid integer {token:?} at position {position}")]
    InvalidInteger { token: String, position: usize },

    #[error("invalid value {value:?} for {name}")]
    InvalidArgument { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, EvoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = EvoError::InvalidMutationRate(1.5);
        assert_eq!(err.to_string(), "mutation_rate must lie within [0, 1], got 1.5");

        let err = EvoError::InvalidInteger {
            token: "x".into(),
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid integer \"x\" at position 2");
    }
}
