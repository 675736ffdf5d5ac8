//! Heuristic parking-spot arrangement optimizer.
//!
//! Given a set of parking spot records, [`optimize`] filters out occupied
//! spots and searches for a "best" arrangement of the rest with a genetic
//! algorithm: tournament selection, single-point crossover, and a
//! status-flip mutation over a fixed number of generations.
//!
//! ```
//! use parkopt::{optimize, GaConfig, ParkingSpot, SpotStatus};
//!
//! let spots = vec![
//!     ParkingSpot::new(0, SpotStatus::Available, 33.5138, 36.2765),
//!     ParkingSpot::new(1, SpotStatus::Occupied, 33.5141, 36.2760),
//!     ParkingSpot::new(2, SpotStatus::Available, 33.5135, 36.2772),
//! ];
//!
//! let config = GaConfig::default().with_seed(42);
//! let best = optimize(&spots, &config).unwrap();
//! assert_eq!(best.len(), 2);
//! ```
//!
//! # Architecture
//!
//! This crate is the algorithmic core of a parking demo service. The
//! surrounding layers — HTTP routes, map rendering, geocoding, and the
//! fabrication of spot data — live with the consumer; the optimizer sees
//! only [`ParkingSpot`] records and a [`GaConfig`], and hands back an
//! arrangement. [`geo::nearest_spot`] covers the one downstream
//! computation consumers always need: picking the closest spot of an
//! arrangement to a user location.
//!
//! # Determinism
//!
//! Every run owns its random generator, seeded from
//! [`GaConfig::seed`](ga::GaConfig) or OS entropy. Concurrent calls never
//! share randomness state.

pub mod error;
pub mod ga;
pub mod geo;
pub mod spot;

pub use error::GaError;
pub use ga::{optimize, GaConfig, GaResult, GaRunner};
pub use spot::{ParkingSpot, SpotStatus};
