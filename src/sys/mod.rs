//! Platform runtime shim.
//!
//! Two host operations whose implementation differs per target:
//! - [`terminate`] ends the process with an exit status and never returns;
//! - [`available_processor_count`] reports the logical processing units the
//!   current process may use, always `>= 1`.
//!
//! Each host family gets its own [`Runtime`] implementation in a submodule,
//! chosen with `#[cfg]` at build time and re-exported as [`HostRuntime`]:
//! - [`linux`]    — Linux and Android (affinity mask, then `sysconf`)
//! - [`apple`]    — Darwin targets (`sysctlbyname("hw.logicalcpu")`)
//! - [`unix`]     — remaining Unix targets (`sysconf`)
//! - [`windows`]  — `GetActiveProcessorCount` / `ExitProcess`
//! - [`fallback`] — anything else (`num_cpus`)

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::LinuxRuntime as HostRuntime;

#[cfg(target_vendor = "apple")]
pub mod apple;
#[cfg(target_vendor = "apple")]
pub use apple::AppleRuntime as HostRuntime;

#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "android", target_vendor = "apple"))
))]
pub mod unix;
#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "android", target_vendor = "apple"))
))]
pub use self::unix::UnixRuntime as HostRuntime;

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use self::windows::WindowsRuntime as HostRuntime;

#[cfg(not(any(unix, windows)))]
pub mod fallback;
#[cfg(not(any(unix, windows)))]
pub use fallback::FallbackRuntime as HostRuntime;

use std::io::Write;

/// Capability set every host variant provides.
///
/// Implementations hold no state; all methods may be called from any thread.
pub trait Runtime: Send + Sync {
    /// Short identifier of the variant ("linux", "windows", ...).
    fn name(&self) -> &'static str;

    /// Ends the current process with `status`. Destructors on this and other
    /// threads' stacks do not run.
    fn terminate(&self, status: i32) -> !;

    /// Logical processing units usable by this process. Never 0.
    fn available_processor_count(&self) -> usize;

    /// Exit code a parent process observes after `terminate(status)`.
    fn exit_code_for(&self, status: i32) -> i32 {
        status
    }
}

/// The build target's runtime variant.
pub static HOST: HostRuntime = HostRuntime::new();

/// Ends the current process with `status` via the host variant.
///
/// Any cleanup the caller needs must happen before this call.
pub fn terminate(status: i32) -> ! {
    crate::displaylevel!(4, "terminating with status {} \n", status);
    HOST.terminate(status)
}

/// Logical processing units usable by the current process, `>= 1`.
pub fn available_processor_count() -> usize {
    HOST.available_processor_count()
}

/// Parent-observed exit code for `terminate(status)` on this host.
pub fn exit_code_for(status: i32) -> i32 {
    HOST.exit_code_for(status)
}

/// Name of the runtime variant compiled into this build.
pub fn variant_name() -> &'static str {
    HOST.name()
}

/// Maps a raw host report onto the processor-count contract.
///
/// `None` (query failed or unsupported), zero and negative values become 1.
pub fn sanitize_count(raw: Option<i64>) -> usize {
    match raw {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 1,
    }
}

/// Flushes Rust's buffered standard streams ahead of a host exit call.
///
/// Errors are ignored: the process is about to end either way.
pub(crate) fn flush_std_streams() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}

/// Exit status mapping shared by the Unix-like variants: the wait status
/// carries only the low 8 bits.
#[cfg(unix)]
pub(crate) fn unix_exit_code(status: i32) -> i32 {
    status & 0xFF
}

/// `sysconf(_SC_NPROCESSORS_ONLN)`, or `None` when the host does not know.
#[cfg(unix)]
pub(crate) fn sysconf_online_processors() -> Option<i64> {
    // SAFETY: sysconf has no preconditions; -1 signals an unknown value.
    let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if n < 1 {
        None
    } else {
        Some(n as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_count_passes_positive_reports_through() {
        assert_eq!(sanitize_count(Some(8)), 8);
        assert_eq!(sanitize_count(Some(1)), 1);
    }

    #[test]
    fn sanitize_count_unavailable_is_one() {
        assert_eq!(sanitize_count(None), 1);
        assert_eq!(sanitize_count(Some(0)), 1);
        assert_eq!(sanitize_count(Some(-1)), 1);
        assert_eq!(sanitize_count(Some(i64::MIN)), 1);
    }

    #[test]
    fn host_count_at_least_one() {
        assert!(available_processor_count() >= 1);
    }

    #[test]
    fn host_count_is_stable() {
        let first = available_processor_count();
        for _ in 0..16 {
            assert_eq!(available_processor_count(), first);
        }
    }

    #[test]
    fn exit_code_for_small_statuses_is_identity() {
        assert_eq!(exit_code_for(0), 0);
        assert_eq!(exit_code_for(1), 1);
        assert_eq!(exit_code_for(42), 42);
    }

    #[cfg(unix)]
    #[test]
    fn unix_exit_code_keeps_low_byte() {
        assert_eq!(unix_exit_code(256), 0);
        assert_eq!(unix_exit_code(257), 1);
        assert_eq!(unix_exit_code(-1), 255);
    }

    #[test]
    fn variant_name_matches_target() {
        let name = variant_name();
        #[cfg(any(target_os = "linux", target_os = "android"))]
        assert_eq!(name, "linux");
        #[cfg(target_vendor = "apple")]
        assert_eq!(name, "apple");
        #[cfg(windows)]
        assert_eq!(name, "windows");
        assert!(!name.is_empty());
    }
}
