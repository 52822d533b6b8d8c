//! Fixed-width random word sources
//!
//! The bulk extractor never talks to hardware directly. It pulls 64-bit
//! words from a [`WordSource`], which makes each attempt explicit:
//! `Some(word)` on success, `None` when the source could not produce a
//! value on that attempt.
//!
//! Two sources are provided:
//!
//! - [`RdRand`]
//!   The processor's `RDRAND` instruction. It can only be obtained after
//!   the capability probe succeeds.
//!
//! - [`OsWords`]
//!   A software source drawing each word from the operating system's
//!   entropy facility. It runs the same extraction path on machines
//!   without the instruction.
//!
//! Neither source retries a failed attempt. Any retry or fallback policy
//! belongs to the caller.

mod os;
mod rdrand;

pub use os::OsWords;
pub use rdrand::RdRand;

/// A producer of 64-bit random words that may fail on any attempt.
///
/// Implementations must be non-blocking: each call either returns a word
/// immediately or reports failure immediately.
pub trait WordSource {
    /// Attempts to produce one random word.
    fn next_word(&mut self) -> Option<u64>;
}
