//! Processor capability probe
//!
//! This module answers a single question: does the processor executing
//! the current thread implement the `RDRAND` instruction?
//!
//! On x86 and x86_64 the answer comes from `CPUID` leaf 1, where support
//! is advertised by bit 30 of `ECX`. On every other architecture the
//! probe reports `false` instead of failing, so portable callers can use
//! it as an unconditional guard.
//!
//! The result reflects a fixed hardware property. Repeated calls within
//! one process always return the same value.

/// `CPUID` leaf holding the processor feature flags.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const FEATURE_LEAF: u32 = 1;

/// `ECX` bit advertising `RDRAND` in [`FEATURE_LEAF`].
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const RDRAND_ECX_BIT: u32 = 1 << 30;

/// Returns `true` if the processor implements `RDRAND`.
///
/// This is a pure query with no side effects and no failure mode.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn has_rdrand() -> bool {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::__cpuid;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::__cpuid;

    // CPUID is available on every x86_64 processor and on every x86
    // processor Rust targets.
    let leaf = unsafe { __cpuid(FEATURE_LEAF) };

    leaf.ecx & RDRAND_ECX_BIT != 0
}

/// Returns `true` if the processor implements `RDRAND`.
///
/// Always `false` on non-x86 architectures.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn has_rdrand() -> bool {
    false
}
