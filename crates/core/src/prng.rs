//! Deterministic PRNG based on the SplitMix64 algorithm.
//!
//! All randomness in a particle field flows through one generator, so a
//! (seed, viewport, config) triple reproduces the exact same field on every
//! platform. SplitMix64 has no bad seeds (any 64-bit value works, including
//! 0) and passes BigCrush at this state size.

use serde::{Deserialize, Serialize};

/// SplitMix64 deterministic PRNG. Same seed always produces the same sequence.
///
/// The state is a plain counter advanced by the golden-gamma constant; each
/// output is an avalanche mix of the counter, so unlike xorshift there is no
/// zero fixed point to guard against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Golden-gamma increment (2^64 / phi, forced odd).
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG seeded with `seed`. All seeds are valid.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for full
    /// mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Uses modulo reduction; the bias is negligible at 64-bit state width
    /// for the small `max` values used here (palette sizes).
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0 (division by zero in modulo).
    pub fn next_index(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}
