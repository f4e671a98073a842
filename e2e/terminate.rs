// e2e/terminate.rs — out-of-process checks for terminate(status)
//
// Spawns the `rtshim` binary with `exit <STATUS>` and compares the exit code
// the parent observes against exit_code_for(STATUS).

use std::path::PathBuf;
use std::process::{Command, Stdio};

use rtshim::sys::exit_code_for;

/// Locate the `rtshim` binary produced by Cargo.
fn rtshim_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_rtshim") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push(format!("rtshim{}", std::env::consts::EXE_SUFFIX));
    p
}

fn observed_exit_code(status: i32) -> i32 {
    let status = Command::new(rtshim_bin())
        .args(["exit", &status.to_string()])
        .status()
        .expect("failed to run rtshim exit");
    status.code().expect("process should exit, not be signalled")
}

#[test]
fn terminate_zero_exits_zero() {
    assert_eq!(observed_exit_code(0), 0);
}

#[test]
fn terminate_one_exits_one() {
    assert_eq!(observed_exit_code(1), 1);
}

#[test]
fn terminate_matches_platform_mapping() {
    for status in [2, 3, 42, 127, 200, 255] {
        assert_eq!(observed_exit_code(status), exit_code_for(status), "status {status}");
    }
}

#[cfg(unix)]
#[test]
fn terminate_out_of_byte_range_wraps_on_unix() {
    assert_eq!(observed_exit_code(256), 0);
    assert_eq!(observed_exit_code(257), 1);
    assert_eq!(observed_exit_code(-1), 255);
}

#[cfg(windows)]
#[test]
fn terminate_keeps_wide_codes_on_windows() {
    assert_eq!(observed_exit_code(256), 256);
    assert_eq!(observed_exit_code(-1), -1);
}

#[test]
fn terminate_logs_status_when_verbose() {
    // -vv raises the display level to 4, where the exit path logs.
    let output = Command::new(rtshim_bin())
        .args(["-vv", "exit", "5"])
        .output()
        .expect("failed to run rtshim exit");
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("terminating with status 5"),
        "stderr should carry the exit log: {stderr}"
    );
}

/// Runs `rtshim args` with stderr connected to a pipe whose read end is
/// closed straight away, and returns the exit code.
fn exit_code_with_closed_stderr(args: &[&str], envs: &[(&str, &str)]) -> Option<i32> {
    let mut child = Command::new(rtshim_bin())
        .args(args)
        .envs(envs.iter().copied())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn rtshim");
    drop(child.stderr.take());
    child.wait().expect("failed to wait for rtshim").code()
}

#[test]
fn terminate_survives_closed_stderr() {
    assert_eq!(exit_code_with_closed_stderr(&["-vv", "exit", "5"], &[]), Some(5));
}

#[test]
fn end_process_survives_closed_stderr() {
    assert_eq!(
        exit_code_with_closed_stderr(&["workers"], &[("RTSHIM_NBWORKERS", "many")]),
        Some(1)
    );
}

#[test]
fn terminate_survives_closed_stdout() {
    let mut child = Command::new(rtshim_bin())
        .args(["cores"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn rtshim");
    drop(child.stdout.take());
    let status = child.wait().expect("failed to wait for rtshim");
    assert_eq!(status.code(), Some(0));
}
