//! Error types for the optimizer.
//!
//! The only failure mode is an invalid configuration, surfaced synchronously
//! before any work is done. An input with no available spots is a defined
//! success (empty result), never an error.

use thiserror::Error;

/// Errors raised by [`GaConfig::validate`](crate::ga::GaConfig::validate)
/// and by the runner before a run starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Population size must be even (offspring are produced in pairs) and
    /// non-zero.
    #[error("population_size must be even and non-zero, got {0}")]
    InvalidPopulationSize(usize),

    /// Mutation rate must be a probability.
    #[error("mutation_rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),
}
