use crate::os::sys_random;
use crate::source::WordSource;

/// Software word source backed by operating system entropy.
///
/// Each word costs one call into the OS. A failing call yields `None`
/// for that attempt, exactly like a hardware failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsWords;

impl OsWords {
    /// Creates the OS-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl WordSource for OsWords {
    fn next_word(&mut self) -> Option<u64> {
        let mut bytes = [0u8; 8];

        if sys_random(&mut bytes) {
            Some(u64::from_le_bytes(bytes))
        } else {
            None
        }
    }
}
