//! Linux entropy via the `getrandom` system call.
//!
//! `getrandom` reads from the kernel entropy pool and may return fewer
//! bytes than requested or be interrupted by a signal. Both cases are
//! resumed until the buffer is full; any other error is reported.

use std::io;

use libc::{c_void, getrandom};

pub(crate) fn sys_random(buf: &mut [u8]) -> bool {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }

            log::debug!("getrandom failed: {err}");
            return false;
        }

        filled += ret as usize;
    }

    true
}
