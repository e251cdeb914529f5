//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG backing every seeded simulation run.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers → same event history.
//! Reproducibility is guaranteed within this crate only; other ports of the
//! simulator are free to use other generators.

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use fiscal_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let roll = rng.next_f64();
/// assert!((0.0..1.0).contains(&roll));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is remapped to 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from operating-system entropy
    ///
    /// Returns the generator together with the seed that was drawn so the
    /// caller can log it and replay the run later.
    pub fn from_entropy() -> (Self, u64) {
        let seed: u64 = rand::random();
        (Self::new(seed), seed)
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replay)
    ///
    /// # Example
    /// ```
    /// use fiscal_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let mut replay = RngManager::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits → [0.0, 1.0)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for RngManager {
    fn next_f64(&mut self) -> f64 {
        RngManager::next_f64(self)
    }
}
