//! Parent selection.
//!
//! Tournament of two: draw a pair of distinct individuals uniformly at
//! random and keep the fitter one. Light selection pressure, which suits
//! the near-flat fitness landscape here (only mutation moves fitness).

use super::types::Individual;
use rand::Rng;

/// Selects one parent by a size-2 tournament without replacement.
///
/// The two contenders are drawn without replacement from `population`, so a
/// tournament never pits an individual against itself. Fitness is compared
/// descending; on a tie the first-drawn individual wins, which keeps
/// seeded runs reproducible.
///
/// # Panics
/// Panics if `population` has fewer than 2 individuals. The runner
/// validates `population_size` before any tournament is held.
pub fn tournament<'a, R: Rng>(population: &'a [Individual], rng: &mut R) -> &'a Individual {
    assert!(
        population.len() >= 2,
        "tournament requires at least 2 individuals"
    );

    let drawn = rand::seq::index::sample(rng, population.len(), 2);
    let first = &population[drawn.index(0)];
    let second = &population[drawn.index(1)];

    // First drawn wins ties.
    if second.fitness() > first.fitness() {
        second
    } else {
        first
    }
}
