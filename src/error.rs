//! Error type for the `Result`-returning fill API.
//!
//! The core routines report failure numerically: fewer bytes written than
//! requested. [`Shortfall`] carries the same information for callers that
//! prefer `?`. It does not say whether the processor lacks the instruction
//! or the instruction failed transiently; both look the same.

use core::fmt;

/// A fill that wrote fewer bytes than requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortfall {
    /// Bytes the caller asked for.
    pub requested: usize,
    /// Leading bytes actually written.
    pub written: usize,
}

impl Shortfall {
    /// Bytes left unwritten. Zero if `written` claims more than was
    /// requested.
    pub fn missing(&self) -> usize {
        self.requested.saturating_sub(self.written)
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hardware random source exhausted after {} of {} bytes",
            self.written, self.requested
        )
    }
}

impl std::error::Error for Shortfall {}
