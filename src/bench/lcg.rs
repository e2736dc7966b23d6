//! Deterministic Linear Congruential Generator (LCG) PRNG
//!
//! The single source of pseudo-randomness for every data-generating
//! benchmark. Every language port reproduces this recurrence bit for bit.
//!
//! # Algorithm
//!
//! ```text
//! state = (state * 1103515245 + 12345) mod 2^31
//! next  = state / 2^31            in [0, 1)
//! ```
//!
//! The multiply is done in wrapping `u64`. Because 2^31 divides 2^64, reducing
//! the wrapped product mod 2^31 gives the same state as exact arithmetic, so
//! the recurrence is total over every `u64` seed.
//!
//! # Example
//!
//! ```rust
//! use parity_bench::bench::lcg::Lcg;
//!
//! let mut rng = Lcg::new(42);
//! let value = rng.next_f64();
//! assert!((0.0..1.0).contains(&value));
//! ```

use crate::core_types::Seed;

/// Linear Congruential Generator
///
/// Owns its state exclusively. There is no process-wide instance: each
/// generation stream constructs its own, so concurrent callers never share
/// a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// LCG multiplier
    pub const MULTIPLIER: u64 = 1_103_515_245;

    /// LCG increment
    pub const INCREMENT: u64 = 12_345;

    /// Modulus (2^31)
    pub const MODULUS: u64 = 2_147_483_648;

    /// Create a generator whose state is exactly `seed`.
    pub fn new(seed: Seed) -> Self {
        Self { state: seed }
    }

    /// Reset the state to `seed`.
    pub fn seed(&mut self, seed: Seed) {
        self.state = seed;
    }

    /// Current raw state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance one step and return the new raw state in `[0, 2^31)`.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            % Self::MODULUS;
        self.state
    }

    /// Advance one step and return a value in `[0.0, 1.0)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / Self::MODULUS as f64
    }

    /// Uniform index in `[0, bound)`, computed as `floor(next_f64() * bound)`.
    ///
    /// Consumes exactly one step regardless of `bound`, so ports that draw
    /// choices stay aligned with the stream.
    pub fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        let idx = (self.next_f64() * bound as f64) as usize;
        // next_f64 < 1.0, but guard against rounding at very large bounds
        idx.min(bound - 1)
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_below(items.len())]
    }
}
