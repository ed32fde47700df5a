//! RNG module - the randomness port used for tile placement
//!
//! The engine never reaches for a global RNG. It draws from an injected
//! [`RandomSource`], so a seeded or scripted source makes spawn placement
//! reproducible.
//!
//! Also provides a simple LCG for deterministic play and testing.

/// Source of uniform random integers.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. `bound` is always non-zero.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as seed 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // state = (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state; feeding it back to [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_int(&mut self, bound: usize) -> usize {
        // Low LCG bits have short periods; sample from the top half.
        let high = (self.next_u32() >> 16) as usize;
        high % bound
    }
}
