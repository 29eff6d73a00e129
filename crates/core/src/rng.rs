//! RNG module - seeded random faller generation
//!
//! A simple LCG keeps the core dependency-free and deterministic per seed,
//! which the tests lean on. Spawns draw a uniform column and three jewels
//! independently with replacement.

use tui_columns_types::Jewel;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniform 1-based column on a board with `cols` columns.
    pub fn next_column(&mut self, cols: usize) -> i16 {
        1 + self.next_range(cols as u32) as i16
    }

    /// Draw three jewels from the alphabet, independently with replacement.
    pub fn next_jewels(&mut self) -> [Jewel; 3] {
        let mut draw = || Jewel::ALL[self.next_range(Jewel::ALL.len() as u32) as usize];
        [draw(), draw(), draw()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_column_draws_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..200 {
            let column = rng.next_column(6);
            assert!((1..=6).contains(&column));
        }
    }

    #[test]
    fn test_jewel_draws_are_from_alphabet() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..50 {
            for jewel in rng.next_jewels() {
                assert!(Jewel::ALL.contains(&jewel));
            }
        }
    }
}
