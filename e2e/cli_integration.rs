// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `rtshim` binary as a black box using std::process::Command:
// subcommand output, environment overrides, usage errors and exit codes.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `rtshim` binary produced by Cargo.
fn rtshim_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_rtshim") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push(format!("rtshim{}", std::env::consts::EXE_SUFFIX));
    p
}

fn rtshim(args: &[&str]) -> Output {
    Command::new(rtshim_bin())
        .args(args)
        .env_remove("RTSHIM_NBWORKERS")
        .output()
        .expect("failed to run rtshim")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

// ── 1. cores ──────────────────────────────────────────────────────────────────

#[test]
fn test_cli_cores_matches_library() {
    let output = rtshim(&["cores"]);
    assert!(output.status.success());
    let cores: usize = stdout_of(&output).parse().expect("numeric output");
    assert!(cores >= 1);
    assert_eq!(cores, rtshim::available_processor_count());
}

#[test]
fn test_cli_cores_is_stable() {
    let first = stdout_of(&rtshim(&["cores"]));
    let second = stdout_of(&rtshim(&["cores"]));
    assert_eq!(first, second);
}

// ── 2. workers ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_workers_default() {
    let output = rtshim(&["workers"]);
    assert!(output.status.success());
    let n: usize = stdout_of(&output).parse().unwrap();
    assert_eq!(n, rtshim::workers::default_nb_workers());
}

#[test]
fn test_cli_workers_flag() {
    let output = rtshim(&["workers", "-T", "3"]);
    assert_eq!(stdout_of(&output), "3");
}

#[test]
fn test_cli_workers_clamped() {
    let output = rtshim(&["workers", "--threads", "5000"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), rtshim::config::NB_WORKERS_MAX.to_string());
}

#[test]
fn test_cli_workers_from_env() {
    let output = Command::new(rtshim_bin())
        .arg("workers")
        .env("RTSHIM_NBWORKERS", "7")
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "7");
}

#[test]
fn test_cli_flag_overrides_env() {
    let output = Command::new(rtshim_bin())
        .args(["workers", "-T", "2"])
        .env("RTSHIM_NBWORKERS", "7")
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "2");
}

#[test]
fn test_cli_invalid_env_fails() {
    let output = Command::new(rtshim_bin())
        .arg("workers")
        .env("RTSHIM_NBWORKERS", "many")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RTSHIM_NBWORKERS"), "stderr: {stderr}");
}

#[test]
fn test_cli_quiet_suppresses_errors() {
    let output = Command::new(rtshim_bin())
        .args(["-q", "-q", "workers"])
        .env("RTSHIM_NBWORKERS", "many")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

// ── 3. pool ───────────────────────────────────────────────────────────────────

#[test]
fn test_cli_pool_runs_all_jobs() {
    let output = rtshim(&["pool", "-T", "2", "--jobs", "100"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "100 jobs completed on 2 workers");
}

#[test]
fn test_cli_pool_default_jobs() {
    let output = rtshim(&["pool"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("64 jobs completed on "));
}

// ── 4. info / version / usage ────────────────────────────────────────────────

#[test]
fn test_cli_info() {
    let output = rtshim(&["info"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains(rtshim::version_string()));
    assert!(text.contains(&format!("variant: {}", rtshim::sys::variant_name())));
    assert!(text.contains(&format!("processors: {}", rtshim::available_processor_count())));
}

#[test]
fn test_cli_version() {
    let output = rtshim(&["--version"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(rtshim::version_string()));
}

#[test]
fn test_cli_help() {
    let output = rtshim(&["--help"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    for sub in ["cores", "exit", "workers", "pool", "info"] {
        assert!(text.contains(sub), "help should list {sub}");
    }
}

#[test]
fn test_cli_missing_subcommand_is_usage_error() {
    let output = rtshim(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_unknown_subcommand_is_usage_error() {
    let output = rtshim(&["reboot"]);
    assert_eq!(output.status.code(), Some(2));
}
