//! Random number generation
//!
//! The event generator never talks to a concrete generator directly. It is
//! handed a [`RandomSource`], a "next float in [0, 1)" capability, so seeded
//! runs, entropy-seeded runs and scripted test sequences all look the same to
//! it.
//!
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod xorshift;

pub use xorshift::RngManager;

/// Source of uniformly distributed floats in [0.0, 1.0)
///
/// Implemented by [`RngManager`] and by any `FnMut() -> f64` closure, which
/// lets tests script an exact draw sequence.
pub trait RandomSource {
    /// Next draw in [0.0, 1.0)
    fn next_f64(&mut self) -> f64;

    /// Bernoulli roll: consumes exactly one draw, succeeds when `draw < probability`
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Integer draw `floor(low + r * span)`, i.e. uniform over `low..low + span`
    fn int_between(&mut self, low: u32, span: u32) -> u32 {
        (low as f64 + self.next_f64() * span as f64).floor() as u32
    }

    /// Uniform float in `[low, low + span)`
    fn scaled(&mut self, low: f64, span: f64) -> f64 {
        low + self.next_f64() * span
    }

    /// Uniformly pick one element of a non-empty pool
    fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * pool.len() as f64).floor() as usize;
        &pool[idx.min(pool.len() - 1)]
    }
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}
