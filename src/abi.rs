//! C-ABI exports for drivers written in other languages.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! Link `target/release/librtshim.a` and declare:
//!
//! ```c
//! _Noreturn void rtshim_terminate(int status);
//! unsigned int rtshim_available_processor_count(void);
//! ```

use std::os::raw::{c_int, c_uint};

use crate::sys;

/// Ends the process with `status`. Never returns.
#[no_mangle]
pub extern "C" fn rtshim_terminate(status: c_int) -> ! {
    sys::terminate(status)
}

/// Logical processing units usable by the process, at least 1.
/// Saturates at `UINT_MAX`.
#[no_mangle]
pub extern "C" fn rtshim_available_processor_count() -> c_uint {
    c_uint::try_from(sys::available_processor_count()).unwrap_or(c_uint::MAX)
}
