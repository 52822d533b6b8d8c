//! `rand_core` adapter
//!
//! [`HardwareRng`] exposes a word source, `RDRAND` by default, through
//! [`rand_core::RngCore`], so it can be handed to any code written against
//! the `rand` ecosystem traits.
//!
//! `try_fill_bytes` reports a shortfall as an error wrapping
//! [`Shortfall`](crate::Shortfall). The infallible methods (`next_u32`,
//! `next_u64`, `fill_bytes`) cannot, and panic instead: an exhausted
//! source in a context that demanded randomness is treated as
//! unrecoverable.

use rand_core::{Error, RngCore};

use crate::extract::try_fill_words;
use crate::source::{RdRand, WordSource};

/// Random number generator reading directly from a [`WordSource`].
///
/// There is no internal state beyond the source itself; every output
/// comes straight from it.
#[derive(Clone, Copy, Debug)]
pub struct HardwareRng<S: WordSource = RdRand> {
    source: S,
}

impl HardwareRng<RdRand> {
    /// Returns the `RDRAND` generator, or `None` if the processor lacks
    /// the instruction.
    pub fn new() -> Option<Self> {
        RdRand::new().map(Self::from_source)
    }
}

impl<S: WordSource> HardwareRng<S> {
    /// Wraps an arbitrary word source.
    pub fn from_source(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: WordSource> RngCore for HardwareRng<S> {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        match self.source.next_word() {
            Some(word) => word,
            None => panic!("word source failed to produce a word"),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = try_fill_words(&mut self.source, dest) {
            panic!("{err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        try_fill_words(&mut self.source, dest).map_err(Error::new)
    }
}
