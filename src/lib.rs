//! Hardware random bytes from the processor
//!
//! This crate is a leaf-level entropy primitive: it detects whether the
//! processor offers the `RDRAND` instruction and pulls 64-bit random words
//! from it into caller-supplied buffers of any length and alignment.
//!
//! It deliberately does very little. There is no pooling, mixing,
//! reseeding, health testing or retry policy. A higher-level generator is
//! expected to treat this crate as one of its entropy inputs and decide
//! what to do when it comes up short.
//!
//! # Module overview
//!
//! - `cpu`  
//!   The capability probe. Reports whether `RDRAND` is available, and
//!   `false` on architectures that have no such instruction.
//!
//! - `source`  
//!   The [`WordSource`] trait, one fallible 64-bit word per call, with the
//!   hardware implementation [`RdRand`] and the OS-backed software
//!   implementation [`OsWords`].
//!
//! - `extract`  
//!   The bulk extractor. Fills a buffer word by word with head, bulk and
//!   tail phases so the start and end of the buffer may fall anywhere.
//!
//! - `error`  
//!   [`Shortfall`], the single failure this crate knows about.
//!
//! - `rng` (feature `rand_core`)  
//!   [`HardwareRng`](rng::HardwareRng), an adapter implementing
//!   `rand_core::RngCore`.
//!
//! # Failure model
//!
//! Failure is numeric. [`fill_random_bytes`] returns how many leading bytes
//! it wrote; anything less than the buffer length means the hardware
//! source was unavailable or ran dry. Nothing is retried and nothing
//! panics.
//!
//! # Example
//!
//! ```
//! let mut key = [0u8; 32];
//!
//! if hwentropy::cpu_has_rdrand() {
//!     let written = hwentropy::fill_random_bytes(&mut key);
//!     assert!(written <= key.len());
//! } else {
//!     assert_eq!(hwentropy::fill_random_bytes(&mut key), 0);
//! }
//! ```

mod os;

pub mod cpu;
pub mod error;
pub mod extract;
#[cfg(feature = "rand_core")]
pub mod rng;
pub mod source;

pub use cpu::has_rdrand as cpu_has_rdrand;
pub use error::Shortfall;
pub use extract::WORD_SIZE;
pub use source::{OsWords, RdRand, WordSource};

/// Fills `buf` with bytes from the processor's `RDRAND` instruction.
///
/// Returns the number of leading bytes of `buf` that were written, between
/// `0` and `buf.len()`. The caller must compare it with `buf.len()`; a
/// smaller value means the instruction is unsupported or failed, and the
/// caller should retry or use another source.
///
/// An empty buffer returns `0` without executing the instruction.
pub fn fill_random_bytes(buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }

    match RdRand::new() {
        Some(mut source) => extract::fill_words(&mut source, buf),
        None => 0,
    }
}

/// Fills all of `buf` from `RDRAND`, or reports how far it got.
///
/// Identical to [`fill_random_bytes`] apart from the return type. No retry
/// is attempted.
pub fn try_fill_random_bytes(buf: &mut [u8]) -> Result<(), Shortfall> {
    if buf.is_empty() {
        return Ok(());
    }

    match RdRand::new() {
        Some(mut source) => extract::try_fill_words(&mut source, buf),
        None => Err(Shortfall {
            requested: buf.len(),
            written: 0,
        }),
    }
}
