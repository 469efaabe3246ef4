//! Tests for the seeded shuffle
//!
//! CRITICAL: Determinism is sacred. Same items + same seed MUST produce the
//! same ordering.

use proptest::prelude::*;
use restaurant_synth_core_rs::rng::{shuffle, Lcg};
use std::collections::HashSet;

#[test]
fn test_lcg_sequence_deterministic() {
    let mut rng1 = Lcg::new(20250314);
    let mut rng2 = Lcg::new(20250314);

    for i in 0..1000 {
        assert_eq!(rng1.next(), rng2.next(), "Determinism broken at iteration {}", i);
    }
}

#[test]
fn test_lcg_starts_from_seed() {
    let mut rng = Lcg::new(20250314);
    assert_eq!(rng.state(), 20250314);
    assert_eq!(rng.next(), 20250314 * 16_807 % 2_147_483_647);
}

#[test]
fn test_shuffle_deterministic() {
    let items: Vec<u32> = (0..20).collect();
    assert_eq!(shuffle(&items, 20250314), shuffle(&items, 20250314));
}

#[test]
fn test_shuffle_matches_hand_computed_swaps() {
    // seed 1: states 16807, 282475249, 1622650073
    // i=3: 16807 % 4 = 3 → swap(3,3)
    // i=2: 282475249 % 3 = 1 → swap(2,1)
    // i=1: 1622650073 % 2 = 1 → swap(1,1)
    assert_eq!(shuffle(&['a', 'b', 'c', 'd'], 1), vec!['a', 'c', 'b', 'd']);
}

#[test]
fn test_different_seeds_visit_many_orderings() {
    let items: Vec<u8> = (0..6).collect();
    let orderings: HashSet<Vec<u8>> = (0..200u64)
        .map(|offset| shuffle(&items, 20250101 + offset))
        .collect();

    assert!(
        orderings.len() > 50,
        "only {} distinct orderings from 200 seeds",
        orderings.len()
    );
}

#[test]
fn test_shuffle_moves_items() {
    let items: Vec<u32> = (0..50).collect();
    let shuffled = shuffle(&items, 20250314);
    let fixed_points = items.iter().zip(&shuffled).filter(|(a, b)| a == b).count();
    assert!(fixed_points < 25, "{} of 50 items never moved", fixed_points);
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(items in prop::collection::vec(any::<u32>(), 0..64), seed in any::<u64>()) {
        let shuffled = shuffle(&items, seed);
        prop_assert_eq!(shuffled.len(), items.len());

        let mut a = shuffled.clone();
        let mut b = items.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_shuffle_repeatable(items in prop::collection::vec(any::<i64>(), 0..32), seed in any::<u64>()) {
        prop_assert_eq!(shuffle(&items, seed), shuffle(&items, seed));
    }
}
