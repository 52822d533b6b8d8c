//! Bulk random-byte extraction
//!
//! This module fills a byte buffer with successive 64-bit words drawn from
//! a [`WordSource`]. The buffer is handled in three phases:
//!
//! - **Head**
//!   If the buffer does not start on an 8-byte boundary, one word is drawn
//!   and only the bytes needed to reach the boundary are copied.
//!
//! - **Bulk**
//!   One word per full 8-byte slot, copied whole.
//!
//! - **Tail**
//!   If fewer than 8 bytes remain, one last word is drawn and truncated.
//!
//! Words are written in little-endian byte order, so the placement of
//! every byte is the same on all targets.
//!
//! # Failure
//!
//! A failed attempt is never retried. The return value is the number of
//! bytes written, always a prefix of the buffer:
//!
//! - a failure in the head phase returns `0`,
//! - a failure in the bulk or tail phase returns the bytes written so far,
//! - a full fill returns `dest.len()`.
//!
//! An empty buffer returns `0` without touching the source.

use crate::error::Shortfall;
use crate::source::WordSource;

/// Width of one source word, in bytes.
pub const WORD_SIZE: usize = 8;

/// Fills `dest` from `source`, aligning on the buffer's memory address.
///
/// The head phase runs when `dest` does not start on a word boundary.
/// Returns the number of leading bytes of `dest` that were written.
pub fn fill_words<S: WordSource + ?Sized>(source: &mut S, dest: &mut [u8]) -> usize {
    let address = dest.as_ptr() as usize;

    fill_words_at(source, dest, address)
}

/// Fills `dest` from `source`, treating `dest[0]` as sitting at the
/// logical byte `offset` of a word-aligned stream.
///
/// Only `offset % WORD_SIZE` matters. Returns the number of leading bytes
/// of `dest` that were written.
pub fn fill_words_at<S: WordSource + ?Sized>(
    source: &mut S,
    dest: &mut [u8],
    offset: usize,
) -> usize {
    let requested = dest.len();
    if requested == 0 {
        return 0;
    }

    let misalignment = offset % WORD_SIZE;
    let mut rest = dest;

    if misalignment != 0 {
        let Some(word) = source.next_word() else {
            log::trace!("word source failed in head phase");
            return shortfall(requested, 0);
        };

        let take = (WORD_SIZE - misalignment).min(rest.len());
        let (head, tail) = core::mem::take(&mut rest).split_at_mut(take);

        head.copy_from_slice(&word.to_le_bytes()[..take]);
        rest = tail;
    }

    let mut written = requested - rest.len();
    let mut chunks = rest.chunks_exact_mut(WORD_SIZE);

    for chunk in &mut chunks {
        let Some(word) = source.next_word() else {
            log::trace!("word source failed in bulk phase");
            return shortfall(requested, written);
        };

        chunk.copy_from_slice(&word.to_le_bytes());
        written += WORD_SIZE;
    }

    let tail = chunks.into_remainder();

    if !tail.is_empty() {
        let Some(word) = source.next_word() else {
            log::trace!("word source failed in tail phase");
            return shortfall(requested, written);
        };

        let len = tail.len();
        tail.copy_from_slice(&word.to_le_bytes()[..len]);
    }

    requested
}

/// Like [`fill_words`], but a partial fill is an error.
pub fn try_fill_words<S: WordSource + ?Sized>(
    source: &mut S,
    dest: &mut [u8],
) -> Result<(), Shortfall> {
    let requested = dest.len();
    let written = fill_words(source, dest);

    if written == requested {
        Ok(())
    } else {
        Err(Shortfall { requested, written })
    }
}

fn shortfall(requested: usize, written: usize) -> usize {
    log::debug!("random fill ended short: {written} of {requested} bytes");
    written
}
