//! Mersenne Twister MT19937 as a standalone generator, with state recovery
//! from observed output and a per-bit frequency check over the stream.

#![no_std]

pub mod monobit;
pub mod mt19937;
pub mod recovery;

pub use mt19937::Mt19937;

/// Errors reported by generation and recovery entry points.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Bulk fill needs room for at least two full state blocks
    BufferLength,
    /// Bulk fill is only valid once the current block is exhausted
    BlockInProgress,
    /// Recovery needs exactly one block of consecutive outputs
    OutputLength,
}
