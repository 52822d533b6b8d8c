//! Operating system abstraction layer
//!
//! This module provides a platform-independent way to obtain random bytes
//! from the operating system. It backs the software word source used when
//! the processor offers no random-number instruction.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same crate-private
//! surface:
//!
//! - `sys_random(buf: &mut [u8]) -> bool`
//!   Fills `buf` completely and returns `true`, or returns `false` if the
//!   operating system refused. A `false` result leaves the buffer
//!   contents unspecified.
//!
//! Targets without a supported facility always report failure.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "windows"
)))]
mod unsupported;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "windows"
)))]
pub(crate) use unsupported::*;
