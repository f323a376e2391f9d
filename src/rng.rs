//! Small deterministic random generator for sweep hues.
//!
//! SplitMix64-style mixing. Not cryptographic; it only has to pick
//! plausible colors. Seed it from whatever boot-time entropy the platform
//! offers (ADC noise, cycle counter).

/// Deterministic pseudo-random generator
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new generator from a seed
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next pseudo-random 32-bit value
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u32
    }

    /// Next pseudo-random value in `0..bound`
    ///
    /// Returns 0 for a zero bound.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}
