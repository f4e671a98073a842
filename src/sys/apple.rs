//! Darwin runtime variant (macOS, iOS, tvOS, watchOS, visionOS).

use std::os::raw::{c_char, c_int, c_void};

use super::{flush_std_streams, sanitize_count, sysconf_online_processors, unix_exit_code, Runtime};

#[derive(Debug, Default, Clone, Copy)]
pub struct AppleRuntime;

impl AppleRuntime {
    pub const fn new() -> Self {
        AppleRuntime
    }
}

/// Reads an integer sysctl by name. `name` must be NUL-terminated.
fn sysctl_int(name: &[u8]) -> Option<i64> {
    debug_assert_eq!(name.last(), Some(&0));
    let mut value: c_int = 0;
    let mut len = std::mem::size_of::<c_int>() as libc::size_t;
    // SAFETY: `name` is NUL-terminated, `value`/`len` describe a valid c_int
    // buffer, and no new value is written.
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr() as *const c_char,
            &mut value as *mut c_int as *mut c_void,
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }
    Some(value as i64)
}

/// Logical CPUs available in the current power/thermal state.
fn logical_processors() -> Option<i64> {
    sysctl_int(b"hw.logicalcpu\0").filter(|&n| n > 0)
}

impl Runtime for AppleRuntime {
    fn name(&self) -> &'static str {
        "apple"
    }

    fn terminate(&self, status: i32) -> ! {
        flush_std_streams();
        std::process::exit(status)
    }

    fn available_processor_count(&self) -> usize {
        sanitize_count(logical_processors().or_else(sysconf_online_processors))
    }

    fn exit_code_for(&self, status: i32) -> i32 {
        unix_exit_code(status)
    }
}
