//! Runtime variant for targets with neither Unix nor Windows host calls
//! (wasm, embedded std ports).

use super::{flush_std_streams, sanitize_count, Runtime};

#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackRuntime;

impl FallbackRuntime {
    pub const fn new() -> Self {
        FallbackRuntime
    }
}

impl Runtime for FallbackRuntime {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn terminate(&self, status: i32) -> ! {
        flush_std_streams();
        std::process::exit(status)
    }

    fn available_processor_count(&self) -> usize {
        // num_cpus already returns 1 when the target cannot tell.
        sanitize_count(i64::try_from(num_cpus::get()).ok())
    }
}
