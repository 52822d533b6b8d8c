use crate::cpu::has_rdrand;
use crate::source::WordSource;

/// The processor's `RDRAND` instruction as a word source.
///
/// Holding a value of this type proves the probe reported support, which
/// is the only precondition for executing the instruction.
#[derive(Clone, Copy, Debug)]
pub struct RdRand {
    _private: (),
}

impl RdRand {
    /// Returns the hardware source, or `None` if the processor lacks
    /// `RDRAND`.
    pub fn new() -> Option<Self> {
        if has_rdrand() {
            Some(Self { _private: () })
        } else {
            log::debug!("rdrand not advertised by cpuid");
            None
        }
    }
}

impl WordSource for RdRand {
    #[inline]
    fn next_word(&mut self) -> Option<u64> {
        // Support was established in `new`.
        unsafe { rdrand_u64() }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "rdrand")]
unsafe fn rdrand_u64() -> Option<u64> {
    let mut value = 0u64;

    match unsafe { core::arch::x86_64::_rdrand64_step(&mut value) } {
        1 => Some(value),
        _ => None,
    }
}

/// 32-bit x86 has no 64-bit form; two halves are drawn and both must
/// succeed.
#[cfg(target_arch = "x86")]
#[target_feature(enable = "rdrand")]
unsafe fn rdrand_u64() -> Option<u64> {
    use core::arch::x86::_rdrand32_step;

    let mut lo = 0u32;
    let mut hi = 0u32;

    if unsafe { _rdrand32_step(&mut lo) } != 1 {
        return None;
    }
    if unsafe { _rdrand32_step(&mut hi) } != 1 {
        return None;
    }

    Some((u64::from(hi) << 32) | u64::from(lo))
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
unsafe fn rdrand_u64() -> Option<u64> {
    None
}
