//! Single-bit-flip neighbor move.

use rand::Rng;

use crate::types::Packing;

/// Produces an adjacent packing by flipping one uniformly chosen item.
///
/// Exactly one flag differs between input and output, so the neighborhood
/// of any state has size `n`. The input is untouched; the caller keeps its
/// current state for comparison and can discard a rejected candidate
/// freely. The random source is injected so a fixed seed reproduces the
/// full move sequence.
///
/// A zero-item packing has no index to draw and is returned unchanged.
pub fn neighbor<R: Rng>(packing: &Packing, rng: &mut R) -> Packing {
    if packing.is_empty() {
        return packing.clone();
    }
    let index = rng.random_range(0..packing.len());
    packing.toggled(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_neighbor_flips_exactly_one_bit() {
        let mut rng = SmallRng::seed_from_u64(42);
        let packing = Packing::all_included(10);

        for _ in 0..100 {
            let adjacent = neighbor(&packing, &mut rng);
            assert_eq!(adjacent.len(), packing.len());
            assert_eq!(packing.hamming_distance(&adjacent), 1);
        }
    }

    #[test]
    fn test_neighbor_does_not_mutate_input() {
        let mut rng = SmallRng::seed_from_u64(42);
        let packing = Packing::from_bits(vec![true, false, true]);
        let before = packing.clone();

        let _ = neighbor(&packing, &mut rng);
        assert_eq!(packing, before);
    }

    #[test]
    fn test_neighbor_deterministic_for_seed() {
        let packing = Packing::none_included(16);

        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(neighbor(&packing, &mut a), neighbor(&packing, &mut b));
        }
    }

    #[test]
    fn test_neighbor_empty_packing() {
        let mut rng = SmallRng::seed_from_u64(42);
        let packing = Packing::none_included(0);
        assert_eq!(neighbor(&packing, &mut rng), packing);
    }

    #[test]
    fn test_neighbor_reaches_every_index() {
        // With 1000 draws over 10 items, every index should get flipped.
        let mut rng = SmallRng::seed_from_u64(42);
        let packing = Packing::none_included(10);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            let adjacent = neighbor(&packing, &mut rng);
            for i in 0..10 {
                if adjacent.is_included(i) {
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "some index never drawn: {seen:?}");
    }

    proptest! {
        // Single-flip invariant over arbitrary packings and seeds.
        #[test]
        fn prop_hamming_distance_is_one(
            bits in prop::collection::vec(any::<bool>(), 1..64),
            seed in any::<u64>(),
        ) {
            let packing = Packing::from_bits(bits);
            let mut rng = SmallRng::seed_from_u64(seed);

            let adjacent = neighbor(&packing, &mut rng);
            prop_assert_eq!(adjacent.len(), packing.len());
            prop_assert_eq!(packing.hamming_distance(&adjacent), 1);
        }
    }
}
