//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for the parking-spot genetic algorithm.
///
/// # Defaults
///
/// ```
/// use parkopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_size, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use parkopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(50)
///     .with_population_size(40)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of generations to run. Zero is valid: the best individual of
    /// the initial random population is returned with no evolution applied.
    pub generations: usize,

    /// Number of individuals per generation. Must be even and non-zero;
    /// offspring are produced two at a time from parent pairs.
    pub population_size: usize,

    /// Probability in `[0, 1]` that an offspring is mutated after crossover.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 20,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns a descriptive [`GaError`] if the population size is odd or
    /// zero, or the mutation rate lies outside `[0, 1]`. The runner calls
    /// this before building a population, so invalid parameters fail fast
    /// rather than producing undefined behavior mid-run.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
