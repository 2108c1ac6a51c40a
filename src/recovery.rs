//! Reconstruct a generator from observed output.
//!
//! Tempering is a bijection, so every output word maps back to exactly one
//! raw state word. One full block of consecutive outputs therefore pins the
//! whole state vector, and the stream is predictable from there on. MT19937
//! is statistically strong but no source of secrets.

use crate::mt19937::{Mt19937, N, TEMPER_B, TEMPER_C, TEMPER_L, TEMPER_S, TEMPER_T, TEMPER_U};
use crate::Error;

/// Invert the tempering transform.
///
/// The two long-shift steps cancel in a single pass. The shift-7 step
/// recovers 7 more low bits per pass and the shift-11 step 11 more high
/// bits, so four and two passes pin all 32.
pub fn untemper(word: u32) -> u32 {
    let mut y = word ^ (word >> TEMPER_L);
    y ^= (y << TEMPER_T) & TEMPER_C;

    let mut x = y;
    for _ in 0..4 {
        x = y ^ ((x << TEMPER_S) & TEMPER_B);
    }

    let mut z = x;
    for _ in 0..2 {
        z = x ^ (z >> TEMPER_U);
    }
    z
}

/// Rebuild a generator from one full block of consecutive outputs.
///
/// The outputs must start at a block boundary, i.e. the observed generator
/// had just twisted. The result runs in lockstep with the source: its next
/// value is the one the source emits next.
///
/// errors: returns Error unless exactly N outputs are given
pub fn recover(outputs: &[u32]) -> Result<Mt19937, Error> {
    if outputs.len() != N {
        return Err(Error::OutputLength);
    }

    let mut state = [0_u32; N];
    for (slot, &output) in state.iter_mut().zip(outputs.iter()) {
        *slot = untemper(output);
    }

    // the untempered words are the block the source just emitted; a cursor
    // of N makes the next emit twist past them
    Ok(Mt19937 { state, index: N })
}
