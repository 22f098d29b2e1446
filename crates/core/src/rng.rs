//! RNG module - seeded randomness for ghost wandering
//!
//! A small LCG keeps sessions reproducible from a seed. Range reduction uses
//! the high bits of each output; the low bits of a power-of-two LCG cycle with
//! tiny periods and would make a four-way heading draw repeat every four calls.

use crate::types::Heading;

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
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly random heading
    pub fn next_heading(&mut self) -> Heading {
        Heading::ALL[self.next_range(Heading::ALL.len() as u32) as usize]
    }

    /// True with probability `percent / 100`
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}
