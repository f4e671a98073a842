// rtshim — platform runtime shim: process termination and processor counting

pub mod config;
pub mod display;
pub mod sys;
pub mod workers;
pub mod threadpool;
pub mod cli;
#[cfg(feature = "c-abi")]
pub mod abi;

pub const RTSHIM_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version_string() -> &'static str {
    RTSHIM_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use sys::{available_processor_count, exit_code_for, terminate, Runtime, HOST};
pub use threadpool::WorkerPool;
