//! Genetic operators: single-point crossover and status-flip mutation.
//!
//! Crossover recombines order (and may duplicate records across the cut —
//! accepted, see the crate docs); mutation is the only operator that
//! changes a spot's status, hence the only one that can move fitness.

use super::types::Individual;
use crate::spot::ParkingSpot;
use rand::Rng;

/// Single-point crossover.
///
/// Draws a cut point uniformly from `[1, L-1]` and returns
/// `parent1[..cut] ++ parent2[cut..]`. The cut is drawn fresh on every
/// call, so the two children of a parent pair (`p1×p2` and `p2×p1`) use
/// independent cut points.
///
/// With `L == 1` no interior cut exists; the child is a copy of `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Individual {
    let len = parent1.len();
    assert_eq!(len, parent2.len(), "parents must have equal length");
    assert!(len > 0, "parents must not be empty");

    if len == 1 {
        return parent1.clone();
    }

    let cut = rng.random_range(1..len);
    let mut child: Vec<ParkingSpot> = Vec::with_capacity(len);
    child.extend_from_slice(&parent1.spots()[..cut]);
    child.extend_from_slice(&parent2.spots()[cut..]);
    Individual::from_spots(child)
}

/// Status-flip mutation.
///
/// Toggles the status of one uniformly random record in place:
/// `available` becomes `occupied` and vice versa.
///
/// # Panics
/// Panics if the individual is empty.
pub fn flip_mutation<R: Rng>(individual: &mut Individual, rng: &mut R) {
    assert!(!individual.is_empty(), "cannot mutate an empty individual");

    let idx = rng.random_range(0..individual.len());
    let spot = &mut individual.spots_mut()[idx];
    spot.status = spot.status.toggled();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::SpotStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individual(ids: &[u32]) -> Individual {
        let spots = ids
            .iter()
            .map(|&i| ParkingSpot::new(i, SpotStatus::Available, 33.51, 36.27))
            .collect();
        Individual::from_spots(spots)
    }

    #[test]
    fn test_crossover_preserves_length() {
        let p1 = individual(&[0, 1, 2, 3, 4]);
        let p2 = individual(&[4, 3, 2, 1, 0]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 5);
        }
    }

    #[test]
    fn test_crossover_is_prefix_plus_suffix() {
        let p1 = individual(&[0, 1, 2, 3]);
        let p2 = individual(&[4, 5, 6, 7]);
        let mut rng = StdRng::seed_from_u64(42);

        // Parents carry disjoint ids, so the cut point is recoverable from
        // the child: a prefix of p1 ids followed by a suffix of p2 ids.
        for _ in 0..50 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            let ids: Vec<u32> = child.spots().iter().map(|s| s.id).collect();
            let cut = ids.iter().position(|&id| id >= 4).unwrap();
            assert!((1..4).contains(&cut));
            assert_eq!(&ids[..cut], &[0, 1, 2, 3][..cut]);
            assert_eq!(&ids[cut..], &[4, 5, 6, 7][cut..]);
        }
    }

    #[test]
    fn test_crossover_length_two_cuts_at_one() {
        let p1 = individual(&[0, 1]);
        let p2 = individual(&[2, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        // [1, L-1] collapses to {1} for L == 2.
        let child = single_point_crossover(&p1, &p2, &mut rng);
        let ids: Vec<u32> = child.spots().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 3]);
    }

    #[test]
    fn test_crossover_singleton_clones_first_parent() {
        let p1 = individual(&[0]);
        let p2 = individual(&[1]);
        let mut rng = StdRng::seed_from_u64(42);

        let child = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(child.spots()[0].id, 0);
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let p1 = individual(&[0, 1, 2]);
        let p2 = individual(&[3, 4, 5]);
        let (p1_before, p2_before) = (p1.clone(), p2.clone());
        let mut rng = StdRng::seed_from_u64(42);

        let _ = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(p1, p1_before);
        assert_eq!(p2, p2_before);
    }

    #[test]
    fn test_mutation_flips_exactly_one_status() {
        let mut ind = individual(&[0, 1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        flip_mutation(&mut ind, &mut rng);

        let occupied = ind
            .spots()
            .iter()
            .filter(|s| s.status == SpotStatus::Occupied)
            .count();
        assert_eq!(occupied, 1);
        assert_eq!(ind.fitness(), 3);
    }

    #[test]
    fn test_mutation_flips_back() {
        let mut ind = individual(&[0]);
        let mut rng = StdRng::seed_from_u64(42);

        flip_mutation(&mut ind, &mut rng);
        assert_eq!(ind.spots()[0].status, SpotStatus::Occupied);
        flip_mutation(&mut ind, &mut rng);
        assert_eq!(ind.spots()[0].status, SpotStatus::Available);
    }

    #[test]
    fn test_mutation_preserves_identity_fields() {
        let mut ind = individual(&[7, 8, 9]);
        let ids_before: Vec<u32> = ind.spots().iter().map(|s| s.id).collect();
        let mut rng = StdRng::seed_from_u64(42);

        flip_mutation(&mut ind, &mut rng);

        let ids_after: Vec<u32> = ind.spots().iter().map(|s| s.id).collect();
        assert_eq!(ids_before, ids_after);
    }
}
