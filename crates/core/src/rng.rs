//! RNG module - seeded random word generation
//!
//! Words are built letter by letter from the lowercase alphabet using a small
//! LCG, so a fixed seed always yields the same sequence of words. Spawn
//! lengths and spawn columns are drawn from the same stream.

use crate::types::ALPHABET;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
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
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with
    /// short periods and would bias small ranges such as the 26 letters.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state, usable as a seed to resume the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces pseudo-random lowercase words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordGenerator {
    rng: SimpleRng,
}

impl WordGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Build a word of exactly `length` letters.
    ///
    /// A length of zero yields the empty string without consuming randomness.
    pub fn next_word(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| ALPHABET[self.rng.next_range(ALPHABET.len() as u32) as usize] as char)
            .collect()
    }

    /// Pick a word length in `[min, max]` (inclusive).
    ///
    /// Ranges wider than `u32` are drawn from the first `u32::MAX` lengths
    /// above `min`.
    pub fn next_length(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = u32::try_from((max - min).saturating_add(1)).unwrap_or(u32::MAX);
        min + self.rng.next_range(span) as usize
    }

    /// Pick a value in `[start, start + span)`.
    pub fn next_offset(&mut self, start: i32, span: i32) -> i32 {
        if span <= 0 {
            return start;
        }
        start + self.rng.next_range(span as u32) as i32
    }

    /// Get the current RNG state (for resuming the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for WordGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
