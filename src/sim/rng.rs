//! Linear congruential generator
//!
//! The generator is a plain value: every draw returns the advanced generator
//! alongside the drawn value, so callers thread it explicitly and a given
//! seed always replays the same sequence.

use serde::{Deserialize, Serialize};

/// LCG with the classic ANSI C constants over a 2^31 modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    pub modulus: u64,
    pub multiplier: u64,
    pub increment: u64,
    pub seed: u64,
}

impl Lcg {
    pub const MODULUS: u64 = 0x8000_0000;
    pub const MULTIPLIER: u64 = 1_103_515_245;
    pub const INCREMENT: u64 = 12_345;

    /// Create a generator; the seed is reduced into `[0, modulus)`
    pub fn new(seed: u64) -> Self {
        Self {
            modulus: Self::MODULUS,
            multiplier: Self::MULTIPLIER,
            increment: Self::INCREMENT,
            seed: seed % Self::MODULUS,
        }
    }

    /// Draw an integer in `[0, modulus)`
    pub fn next_int(self) -> (Self, u64) {
        // multiplier < 2^31 and seed < 2^31, so the product fits in u64
        let value = (self.multiplier * self.seed + self.increment) % self.modulus;
        (Self { seed: value, ..self }, value)
    }

    /// Draw a float in `[0, 1]`
    pub fn next_float(self) -> (Self, f64) {
        let (rng, value) = self.next_int();
        (rng, value as f64 / (self.modulus - 1) as f64)
    }
}
