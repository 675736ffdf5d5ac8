//! Parking-spot domain types.
//!
//! [`ParkingSpot`] is the record the optimizer permutes and (via mutation)
//! status-flips. Identity (`id`, coordinates) is immutable; `status` is the
//! only field any operator touches, and only on copies owned by the
//! optimizer — caller-owned records are never modified.

/// Occupancy state of a parking spot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotStatus {
    /// The spot is free and counts toward fitness.
    Available,
    /// The spot is taken.
    Occupied,
}

impl SpotStatus {
    /// Returns the opposite status.
    ///
    /// This is the mutation operator's only state transition.
    pub fn toggled(self) -> Self {
        match self {
            SpotStatus::Available => SpotStatus::Occupied,
            SpotStatus::Occupied => SpotStatus::Available,
        }
    }

    /// Whether this status is [`Available`](SpotStatus::Available).
    pub fn is_available(self) -> bool {
        matches!(self, SpotStatus::Available)
    }
}

/// A single parking spot record.
///
/// Supplied by the caller (the web layer generates these); the optimizer
/// filters to available spots and works on cloned copies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingSpot {
    /// Unique identifier within one generation run.
    pub id: u32,
    /// Current occupancy state.
    pub status: SpotStatus,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl ParkingSpot {
    /// Creates a spot record.
    pub fn new(id: u32, status: SpotStatus, lat: f64, lon: f64) -> Self {
        Self {
            id,
            status,
            lat,
            lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(SpotStatus::Available.toggled(), SpotStatus::Occupied);
        assert_eq!(SpotStatus::Occupied.toggled(), SpotStatus::Available);
        assert_eq!(SpotStatus::Available.toggled().toggled(), SpotStatus::Available);
    }

    #[test]
    fn test_is_available() {
        assert!(SpotStatus::Available.is_available());
        assert!(!SpotStatus::Occupied.is_available());
    }

    #[test]
    fn test_spot_construction() {
        let spot = ParkingSpot::new(3, SpotStatus::Occupied, 33.5138, 36.2765);
        assert_eq!(spot.id, 3);
        assert_eq!(spot.status, SpotStatus::Occupied);
        assert!((spot.lat - 33.5138).abs() < 1e-12);
        assert!((spot.lon - 36.2765).abs() < 1e-12);
    }
}
