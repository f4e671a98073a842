//! Linux / Android runtime variant.
//!
//! The processor count honours the scheduler affinity mask (`taskset`,
//! cpusets), so a process pinned to 2 of 64 CPUs reports 2. When the mask
//! cannot be read, the online-CPU count from `sysconf` is used instead.

use super::{flush_std_streams, sanitize_count, sysconf_online_processors, unix_exit_code, Runtime};

#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxRuntime;

impl LinuxRuntime {
    pub const fn new() -> Self {
        LinuxRuntime
    }
}

/// Number of CPUs set in the calling thread's affinity mask.
///
/// The mask is a fixed-size `CpuSet` covering `CpuSet::count()` CPUs (1024).
/// On kernels with more possible CPUs `sched_getaffinity` fails with EINVAL
/// and the caller falls back to the online count, which ignores the mask.
#[cfg(has_sched_affinity)]
fn affinity_processors() -> Option<i64> {
    use nix::sched::{sched_getaffinity, CpuSet};
    use nix::unistd::Pid;

    // Pid 0 selects the calling thread.
    let set = sched_getaffinity(Pid::from_raw(0)).ok()?;
    let n = (0..CpuSet::count())
        .filter(|&cpu| set.is_set(cpu).unwrap_or(false))
        .count();
    if n == 0 {
        None
    } else {
        Some(n as i64)
    }
}

#[cfg(not(has_sched_affinity))]
fn affinity_processors() -> Option<i64> {
    None
}

impl Runtime for LinuxRuntime {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn terminate(&self, status: i32) -> ! {
        flush_std_streams();
        std::process::exit(status)
    }

    fn available_processor_count(&self) -> usize {
        sanitize_count(affinity_processors().or_else(sysconf_online_processors))
    }

    fn exit_code_for(&self, status: i32) -> i32 {
        unix_exit_code(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affinity_count_drives_the_result() {
        if let Some(mask) = affinity_processors() {
            assert!(mask >= 1);
            assert_eq!(LinuxRuntime::new().available_processor_count(), mask as usize);
        }
    }

    #[cfg(has_sched_affinity)]
    #[test]
    fn affinity_count_fits_fixed_cpu_set() {
        if let Some(mask) = affinity_processors() {
            assert!(mask as usize <= nix::sched::CpuSet::count());
        }
    }

    #[test]
    fn count_matches_std_available_parallelism() {
        // std also reads the affinity mask on Linux; both must agree unless a
        // cgroup quota lowers std's answer.
        let ours = LinuxRuntime::new().available_processor_count();
        let std_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert!(std_count <= ours, "std {std_count} ours {ours}");
    }

    #[test]
    fn exit_code_truncates_to_byte() {
        let rt = LinuxRuntime::new();
        assert_eq!(rt.exit_code_for(3), 3);
        assert_eq!(rt.exit_code_for(300), 44);
    }
}
