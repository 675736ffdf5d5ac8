//! Genetic-algorithm optimizer for parking-spot arrangements.
//!
//! The optimizer filters its input to `available` spots, builds a
//! fixed-size population of random permutations, and evolves it with
//! tournament selection, single-point crossover, and status-flip mutation
//! for a fixed number of generations. The best individual of the final
//! population is the chosen arrangement.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (generations, population size,
//!   mutation rate, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with per-generation statistics
//! - [`Individual`]: One candidate arrangement
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and status-flip mutation
//! - [`selection`]: Size-2 tournament selection
//!
//! # Fitness caveat
//!
//! Fitness counts `available` records, and the population is seeded only
//! with available spots, so the landscape is flat until mutation flips a
//! status. The search therefore degenerates toward picking whichever
//! individuals escaped mutation. This mirrors the system being modeled and
//! is kept as-is; see DESIGN.md for the open question.

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{optimize, GaResult, GaRunner};
pub use types::Individual;
