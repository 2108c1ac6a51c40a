//! Per-bit frequency counter for generator output.
//!
//! A uniform source sets each of the 32 bit positions with probability 1/2.
//! The counter tracks how far every position drifts from that and grades
//! the drift in binomial standard deviations. Smoke-test grade: it catches
//! a broken twist or tempering step, not subtle statistical flaws.

use libm::{fabs, sqrt};

/// Ones count per bit position over a stream of 32-bit words.
#[derive(Clone)]
pub struct BitCounter {
    ones: [u64; 32],
    samples: u64,
}

impl BitCounter {
    pub fn new() -> Self {
        Self {
            ones: [0_u64; 32],
            samples: 0,
        }
    }

    /// Record one output word.
    pub fn record(&mut self, word: u32) {
        for (bit, count) in self.ones.iter_mut().enumerate() {
            *count += u64::from(word >> bit & 1);
        }
        self.samples += 1;
    }

    /// Number of words recorded so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Absolute deviation of one bit's observed frequency from 1/2.
    ///
    /// Panics if `bit` is 32 or more.
    pub fn bias(&self, bit: usize) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let freq = self.ones[bit] as f64 / self.samples as f64;
        fabs(freq - 0.5)
    }

    /// Largest bias across all 32 bit positions.
    pub fn max_bias(&self) -> f64 {
        let mut max = 0.0_f64;
        for bit in 0..32 {
            let bias = self.bias(bit);
            if bias > max {
                max = bias;
            }
        }
        max
    }

    /// One binomial standard deviation of an observed frequency, 1/(2 sqrt n).
    pub fn sigma(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        0.5 / sqrt(self.samples as f64)
    }

    /// True when every bit's frequency sits within `sigmas` standard
    /// deviations of 1/2.
    pub fn within(&self, sigmas: f64) -> bool {
        self.max_bias() <= sigmas * self.sigma()
    }
}

impl Default for BitCounter {
    fn default() -> Self {
        Self::new()
    }
}
