//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete process:
//! filter → initialization → selection → crossover → mutation → repeat,
//! then extracts the best arrangement of the final population.

use super::config::GaConfig;
use super::operators::{flip_mutation, single_point_crossover};
use super::selection::tournament;
use super::types::Individual;
use crate::error::GaError;
use crate::spot::ParkingSpot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best arrangement in the final population (first maximal element
    /// in population order). Empty when the input held no available spots.
    pub best: Vec<ParkingSpot>,

    /// Fitness of `best`: its count of available records.
    pub best_fitness: usize,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation (`generations + 1` entries).
    ///
    /// There is no elitism, so this series is not monotone: a generation
    /// may lose its best individual to crossover or mutation.
    pub fitness_history: Vec<usize>,
}

impl GaResult {
    fn empty() -> Self {
        Self {
            best: Vec::new(),
            best_fitness: 0,
            generations: 0,
            fitness_history: Vec::new(),
        }
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use parkopt::ga::{GaConfig, GaRunner};
/// use parkopt::spot::{ParkingSpot, SpotStatus};
///
/// let spots = vec![
///     ParkingSpot::new(0, SpotStatus::Available, 33.5138, 36.2765),
///     ParkingSpot::new(1, SpotStatus::Occupied, 33.5140, 36.2770),
/// ];
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&spots, &config).unwrap();
/// assert_eq!(result.best.len(), 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization over `spots`.
    ///
    /// The input is filtered to available spots first. An empty filtered
    /// set short-circuits to an empty result with no population built and
    /// no generations run. The caller's records are never modified; all
    /// evolution happens on owned copies.
    ///
    /// Fails fast with [`GaError`] when the configuration is invalid.
    pub fn run(spots: &[ParkingSpot], config: &GaConfig) -> Result<GaResult, GaError> {
        config.validate()?;

        let pool: Vec<ParkingSpot> = spots
            .iter()
            .filter(|spot| spot.status.is_available())
            .copied()
            .collect();

        if pool.is_empty() {
            debug!("no available spots in input; skipping optimization");
            return Ok(GaResult::empty());
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(&pool, &mut rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best_of(&population).fitness());

        for generation in 0..config.generations {
            // Fully generational replacement: parent pairs produce two
            // children each (p1 x p2 and p2 x p1, independent cut points)
            // until the next population is full. No elitism, no parent
            // survival.
            let mut next_gen: Vec<Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let parent1 = tournament(&population, &mut rng);
                let parent2 = tournament(&population, &mut rng);
                next_gen.push(single_point_crossover(parent1, parent2, &mut rng));
                next_gen.push(single_point_crossover(parent2, parent1, &mut rng));
            }

            for child in &mut next_gen {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    flip_mutation(child, &mut rng);
                }
            }

            population = next_gen;

            let generation_best = best_of(&population).fitness();
            fitness_history.push(generation_best);
            trace!(
                generation = generation + 1,
                best_fitness = generation_best,
                "generation complete"
            );
        }

        let best = best_of(&population).clone();
        debug!(
            best_fitness = best.fitness(),
            generations = config.generations,
            spots = best.len(),
            "optimization finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            generations: config.generations,
            fitness_history,
            best: best.into_spots(),
        })
    }
}

/// Convenience wrapper around [`GaRunner::run`] returning just the best
/// arrangement.
///
/// This is the optimizer's public contract: filter to available spots,
/// evolve, return the chosen arrangement (empty when nothing is available).
pub fn optimize(spots: &[ParkingSpot], config: &GaConfig) -> Result<Vec<ParkingSpot>, GaError> {
    GaRunner::run(spots, config).map(|result| result.best)
}

/// First individual of maximum fitness, in population order.
///
/// Ties go to the earliest index so seeded runs pick the same winner.
fn best_of(population: &[Individual]) -> &Individual {
    let mut best = &population[0];
    for individual in &population[1..] {
        if individual.fitness() > best.fitness() {
            best = individual;
        }
    }
    best
}
