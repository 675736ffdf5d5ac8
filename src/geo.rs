//! Coordinate helpers for consumers of an optimized arrangement.

use crate::spot::ParkingSpot;

/// Returns the spot closest to `(lat, lon)`, or `None` for an empty slice.
///
/// Distance is the squared coordinate delta in degrees — a ranking metric,
/// not a geodesic distance, which is all the nearest-spot lookup needs at
/// neighborhood scale. The first minimal spot wins ties, so the result is
/// stable for a given input order.
pub fn nearest_spot(spots: &[ParkingSpot], lat: f64, lon: f64) -> Option<&ParkingSpot> {
    let mut nearest: Option<(&ParkingSpot, f64)> = None;
    for spot in spots {
        let d = squared_delta(spot, lat, lon);
        match nearest {
            Some((_, best)) if best <= d => {}
            _ => nearest = Some((spot, d)),
        }
    }
    nearest.map(|(spot, _)| spot)
}

fn squared_delta(spot: &ParkingSpot, lat: f64, lon: f64) -> f64 {
    let dlat = spot.lat - lat;
    let dlon = spot.lon - lon;
    dlat * dlat + dlon * dlon
}
