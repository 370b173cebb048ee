//! Non-cryptographic generator used when the OS source is missing.
//!
//! Each draw folds fresh timing entropy into the state, then runs the
//! SplitMix64 finalizer. Output is a float in `[0, 1)` scaled to the bound.

use super::{RandomSource, hw};

// Odd 64-bit multipliers picked per draw from the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

pub struct Fallback {
    state: u64,
}

impl Fallback {
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of a draw.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Fallback {
    fn next_int(&mut self, bound: usize) -> usize {
        let scaled = (self.next_f64() * bound as f64) as usize;
        scaled.min(bound - 1)
    }
}
