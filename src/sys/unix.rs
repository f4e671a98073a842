//! Generic Unix runtime variant: the BSDs, illumos, Solaris, Haiku and other
//! POSIX hosts without a dedicated variant.

use super::{flush_std_streams, sanitize_count, sysconf_online_processors, unix_exit_code, Runtime};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnixRuntime;

impl UnixRuntime {
    pub const fn new() -> Self {
        UnixRuntime
    }
}

impl Runtime for UnixRuntime {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn terminate(&self, status: i32) -> ! {
        flush_std_streams();
        std::process::exit(status)
    }

    fn available_processor_count(&self) -> usize {
        sanitize_count(sysconf_online_processors())
    }

    fn exit_code_for(&self, status: i32) -> i32 {
        unix_exit_code(status)
    }
}
