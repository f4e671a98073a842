// display.rs — Leveled diagnostics for the library and the `rtshim` binary.
//
// 0 = silent; 1 = errors only; 2 = normal; 3 = informative; 4 = verbose.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

/// Highest meaningful display level.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, capped at [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

/// Applies `-v` / `-q` counts to the default level, saturating at both ends.
pub fn level_from_flags(verbose: u8, quiet: u8) -> u32 {
    (DISPLAY_LEVEL_DEFAULT + verbose as u32)
        .saturating_sub(quiet as u32)
        .min(DISPLAY_LEVEL_MAX)
}

// Write errors (closed pipe, full disk) are ignored: diagnostics must never
// unwind through the exit path.

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => {{
        let _ = ::std::io::Write::write_fmt(&mut ::std::io::stdout(), format_args!($($arg)*));
    }};
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => {{
        let _ = ::std::io::Write::write_fmt(&mut ::std::io::stderr(), format_args!($($arg)*));
    }};
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::display_level() >= $level {
            $crate::display!($($arg)*);
        }
    };
}

/// Report an error and terminate the process through the runtime shim.
///
/// Usage: `end_process!(exit_code, "message {}", arg)`
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::displaylevel!(4, "Error in {}, line {} : \n", file!(), line!());
        if $crate::display::display_level() >= 1 {
            $crate::display!("Error {} : {}\n", $error, format_args!($($arg)*));
        }
        $crate::sys::terminate($error as i32)
    }};
}
