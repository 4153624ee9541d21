//! # 48-bit Linear Congruential Generator
//!
//! Bit-compatible with `java.util.Random`, so datasets generated from the
//! same seed are identical on every platform that uses this algorithm:
//!
//! `seed = (seed * 0x5DEECE66D + 0xB) mod 2^48`
//!
//! The initial seed is scrambled by XOR with the multiplier, and each draw
//! takes the high bits of the new state.

#[cfg(test)]
mod test;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Seeded generator with a fixed, documented algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaLcg {
    state: u64,
}

impl JavaLcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits (1..=32).
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// Generate a uniformly distributed `i32` over the full range.
    pub fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Generate a uniformly distributed value in `[0, bound)`.
    ///
    /// Returns `None` when `bound` is not positive.
    pub fn next_int(&mut self, bound: i32) -> Option<i32> {
        if bound <= 0 {
            return None;
        }

        let mut r = self.next(31);
        let m = bound - 1;

        if bound & m == 0 {
            // Power of two: take the high bits directly
            return Some(((bound as i64 * r as i64) >> 31) as i32);
        }

        // Reject draws from the incomplete last interval to stay unbiased.
        // The check relies on i32 overflow, as in java.util.Random.
        let mut u = r;
        loop {
            r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return Some(r);
            }
            u = self.next(31);
        }
    }
}
