//! Deterministic linear congruential generator
//!
//! `state = (state * 1664525 + 1013904223) mod 2^32`, output `state / 2^32`.
//! The generator is the only randomness source of the dataset, so the number
//! and order of draws is fixed.

const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;
const MODULUS: u64 = 1 << 32;

/// Seed that reproduces the reference dataset
pub const DEFAULT_SEED: u64 = 12_345;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg {
            state: seed % MODULUS,
        }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        // state < 2^32, so the product stays below 2^53
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform integer in `[0, n)`: `floor(next_f64() * n)`
    pub fn below(&mut self, n: u64) -> u64 {
        (self.next_f64() * n as f64).floor() as u64
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new(DEFAULT_SEED)
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
