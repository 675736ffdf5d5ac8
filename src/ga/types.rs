//! Population types for the GA.
//!
//! An [`Individual`] is one candidate arrangement: an owned, ordered
//! sequence of [`ParkingSpot`] records. Individuals are independent value
//! copies — mutating one can never alias another or the caller's input.

use crate::spot::ParkingSpot;
use rand::seq::SliceRandom;
use rand::Rng;

/// One candidate arrangement of parking spots.
///
/// Created as a uniform shuffle of the filtered available-spot pool, then
/// recombined and mutated by the operators in
/// [`operators`](super::operators). After crossover an individual may carry
/// duplicate records; record *count* is invariant for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    spots: Vec<ParkingSpot>,
}

impl Individual {
    /// Builds an individual as an independent random permutation of `pool`.
    ///
    /// Sampling is without replacement: every individual starts with the
    /// same multiset of records, distinct only in order.
    pub fn random<R: Rng>(pool: &[ParkingSpot], rng: &mut R) -> Self {
        let mut spots = pool.to_vec();
        spots.shuffle(rng);
        Self { spots }
    }

    /// Wraps an already-built arrangement.
    pub(crate) fn from_spots(spots: Vec<ParkingSpot>) -> Self {
        Self { spots }
    }

    /// Count of `Available` records — the scalar fitness (maximized).
    ///
    /// Since the initial pool contains only available spots and crossover
    /// preserves record count, only mutation can lower this value.
    pub fn fitness(&self) -> usize {
        self.spots
            .iter()
            .filter(|spot| spot.status.is_available())
            .count()
    }

    /// Number of records in this arrangement.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Whether the arrangement holds no records.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Read-only view of the arrangement.
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    /// Mutable view, used by the mutation operator.
    pub(crate) fn spots_mut(&mut self) -> &mut [ParkingSpot] {
        &mut self.spots
    }

    /// Consumes the individual, yielding its arrangement.
    pub fn into_spots(self) -> Vec<ParkingSpot> {
        self.spots
    }
}
