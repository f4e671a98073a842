//! Windows runtime variant.
//!
//! `GetActiveProcessorCount(ALL_PROCESSOR_GROUPS)` counts across processor
//! groups, so hosts with more than 64 logical processors report all of them.
//! `GetSystemInfo` only sees the caller's group and is the fallback.

use winapi::um::processthreadsapi::ExitProcess;
use winapi::um::sysinfoapi::{GetSystemInfo, SYSTEM_INFO};
use winapi::um::winbase::GetActiveProcessorCount;
use winapi::um::winnt::ALL_PROCESSOR_GROUPS;

use super::{flush_std_streams, sanitize_count, Runtime};

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRuntime;

impl WindowsRuntime {
    pub const fn new() -> Self {
        WindowsRuntime
    }
}

fn active_processors() -> Option<i64> {
    // SAFETY: no preconditions; 0 signals failure.
    let n = unsafe { GetActiveProcessorCount(ALL_PROCESSOR_GROUPS) };
    if n == 0 {
        None
    } else {
        Some(n as i64)
    }
}

fn system_info_processors() -> Option<i64> {
    // SAFETY: GetSystemInfo fills the zeroed struct and cannot fail.
    let info = unsafe {
        let mut info: SYSTEM_INFO = std::mem::zeroed();
        GetSystemInfo(&mut info);
        info
    };
    match info.dwNumberOfProcessors {
        0 => None,
        n => Some(n as i64),
    }
}

impl Runtime for WindowsRuntime {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn terminate(&self, status: i32) -> ! {
        flush_std_streams();
        // SAFETY: ExitProcess ends the process and never returns.
        unsafe { ExitProcess(status as u32) };
        // ExitProcess is declared as returning; satisfy the `!` type.
        std::process::exit(status)
    }

    fn available_processor_count(&self) -> usize {
        sanitize_count(active_processors().or_else(system_info_processors))
    }
}
