//! Mersenne Twister MT19937 (32-bit), after Matsumoto and Nishimura's
//! `mt19937ar` reference implementation:
//!
//! <http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/emt.html>
//!
//! One `Mt19937` value owns one output stream. The reference code's static
//! `mt[]`/`mti` pair becomes an explicit state vector plus cursor, so
//! independent generators can coexist.

use core::fmt;

use rand_core::{impls, RngCore, SeedableRng};

use crate::Error;

/// State vector length: one twist yields this many words
pub const N: usize = 624;
/// Middle-word offset of the twist recurrence
pub const M: usize = 397;
/// Period exponent: the output stream repeats every 2^19937 - 1 words
pub const MEXP: u32 = 19937;
/// Seed the reference implementation falls back on when none is given
pub const DEFAULT_SEED: u32 = 5489;

/// Twist matrix constant
pub const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant bit of a state word
pub const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant 31 bits of a state word
pub const LOWER_MASK: u32 = 0x7fff_ffff;

pub(crate) const TEMPER_U: u32 = 11;
pub(crate) const TEMPER_S: u32 = 7;
pub(crate) const TEMPER_B: u32 = 0x9d2c_5680;
pub(crate) const TEMPER_T: u32 = 15;
pub(crate) const TEMPER_C: u32 = 0xefc6_0000;
pub(crate) const TEMPER_L: u32 = 18;

// MAG01[x] = x * MATRIX_A for x in {0, 1}
const MAG01: [u32; 2] = [0, MATRIX_A];

/// MT19937 generator: N words of raw state plus a cursor into the block.
///
/// A cursor of N marks the block exhausted; the next emit twists first.
#[derive(Clone)]
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create a generator seeded with `seed`.
    ///
    /// Construction is seeding: equal seeds give equal streams, and zero is
    /// an ordinary seed like any other.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0_u32; N],
            index: N,
        };
        rng.reseed(seed);
        rng
    }

    /// Re-initialize the state from `seed`, discarding the current stream.
    pub fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            // multiplier from Knuth TAOCP Vol. 2, 3rd ed., p. 106;
            // the recurrence wraps mod 2^32
            self.state[i] = 1_812_433_253_u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    /// Emit the next tempered 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
            self.index = 0;
        }

        let y = self.state[self.index];
        self.index += 1;

        temper(y)
    }

    /// Bulk-generate `out.len()` tempered values directly into `out`.
    ///
    /// Afterwards the state holds the newest N raw words and the cursor sits
    /// at N, so single-value emission continues the same stream seamlessly.
    ///
    /// errors: returns Error if `out` is shorter than two blocks (2 * N
    /// words), or if the current block still has unread words. A fresh or
    /// reseeded generator qualifies, as does one that has emitted an exact
    /// multiple of N values.
    pub fn fill_block(&mut self, out: &mut [u32]) -> Result<(), Error> {
        if out.len() < 2 * N {
            return Err(Error::BufferLength);
        }
        if self.index != N {
            return Err(Error::BlockInProgress);
        }

        // Run the twist recurrence over the buffer as an extension of the
        // state vector: word j of `out` is raw sequence element N + j.
        for j in 0..out.len() {
            let a = if j < N { self.state[j] } else { out[j - N] };
            let b = if j + 1 < N {
                self.state[j + 1]
            } else {
                out[j + 1 - N]
            };
            let c = if j + M < N {
                self.state[j + M]
            } else {
                out[j + M - N]
            };

            let y = (a & UPPER_MASK) | (b & LOWER_MASK);
            out[j] = c ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }

        // retain the newest block as state before tempering overwrites it
        let split = out.len() - N;
        self.state.copy_from_slice(&out[split..]);

        for word in out.iter_mut() {
            *word = temper(*word);
        }

        Ok(())
    }

    /// Write the raw (untempered) state words to `out` as zero-padded hex,
    /// eight per line. Debugging aid; the cursor is not included.
    pub fn dump_state<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, word) in self.state.iter().enumerate() {
            write!(out, "{:08x} ", word)?;
            if i % 8 == 7 {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    // Regenerate all N state words in place from the previous block.
    //
    // Single circular pass over the reference code's three unrolled loops:
    // slots below k hold new-block words by the time k reads them, which is
    // what the recurrence calls for.
    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            self.state[k] = self.state[(k + M) % N] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
    }
}

/// Output tempering: a bijective bit mix applied to every emitted word.
pub(crate) fn temper(mut y: u32) -> u32 {
    y ^= y >> TEMPER_U;
    y ^= (y << TEMPER_S) & TEMPER_B;
    y ^= (y << TEMPER_T) & TEMPER_C;
    y ^= y >> TEMPER_L;
    y
}

impl Default for Mt19937 {
    /// Seed with the reference fallback constant.
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .field("state", &&self.state[..])
            .finish()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    /// Seed from four big-endian bytes.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_be_bytes(seed))
    }
}
