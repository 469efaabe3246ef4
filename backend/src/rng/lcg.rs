//! Lehmer LCG and the seeded Fisher-Yates shuffle
//!
//! # Algorithm
//!
//! `state = state * 16807 mod (2^31 - 1)`, the Park-Miller minimal standard
//! generator. It has full period over `1..2^31-1` for any non-zero state, is
//! trivially portable, and is not cryptographically secure.
//!
//! # Determinism
//!
//! Same seed → same sequence → same permutation. Day seeds (`yyyymmdd`) are well
//! below the modulus, so the starting state is the seed itself.

use serde::{Deserialize, Serialize};

/// Multiplier of the minimal standard generator.
pub const LCG_MULTIPLIER: u64 = 16_807;

/// Modulus `2^31 - 1` (a Mersenne prime).
pub const LCG_MODULUS: u64 = 2_147_483_647;

/// Deterministic Lehmer generator
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::rng::Lcg;
///
/// let mut a = Lcg::new(20250314);
/// let mut b = Lcg::new(20250314);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator whose starting state is `seed`.
    ///
    /// Seeds are reduced modulo `2^31 - 1`. A zero state would be a fixed
    /// point of the recurrence, so it is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let state = seed % LCG_MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Advance the state and return it. Output lies in `1..2^31-1`.
    pub fn next(&mut self) -> u64 {
        self.state = self.state * LCG_MULTIPLIER % LCG_MODULUS;
        self.state
    }

    /// Value in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "bound must be positive");
        self.next() % bound
    }

    /// Uniform-ish f64 in `[0.0, 1.0)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next() - 1) as f64 / (LCG_MODULUS - 1) as f64
    }

    /// f64 in `[min, max)`.
    pub fn between(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Current state (for replay).
    pub fn state(&self) -> u64 {
        self.state
    }
}

/// Reorder `items` reproducibly for `seed`, leaving the input untouched.
///
/// Fisher-Yates from the last index down: at each step `i` the generator
/// advances once and `state mod (i + 1)` selects the swap partner.
///
/// # Example
/// ```
/// use restaurant_synth_core_rs::rng::shuffle;
///
/// let items = vec!['a', 'b', 'c', 'd', 'e'];
/// let first = shuffle(&items, 20250314);
/// assert_eq!(first, shuffle(&items, 20250314));
/// assert_eq!(first.len(), items.len());
/// ```
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = Lcg::new(seed);

    for i in (1..out.len()).rev() {
        let j = (rng.next() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = Lcg::new(0);
        assert_eq!(rng.state(), 1, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_known_first_outputs() {
        // Park & Miller's published check: seed 1 → 16807 → 282475249
        let mut rng = Lcg::new(1);
        assert_eq!(rng.next(), 16_807);
        assert_eq!(rng.next(), 282_475_249);
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_below_zero_bound() {
        Lcg::new(7).below(0);
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = Lcg::new(20250314);
        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!((0.0..1.0).contains(&val), "next_f64() produced {}", val);
        }
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty, 42).is_empty());
        assert_eq!(shuffle(&[9], 42), vec![9]);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let items = vec![1, 2, 3, 4, 5, 6];
        let _ = shuffle(&items, 99);
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    }
}
