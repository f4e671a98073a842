// Integration tests for sys — available_processor_count
//
//   - always >= 1
//   - stable across repeated and concurrent calls
//   - raw host reports are mapped onto the contract by sanitize_count

use rtshim::sys::{available_processor_count, sanitize_count};
use std::thread;

// ─────────────────────────────────────────────────────────────────────────────
// Host query
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn count_is_at_least_one() {
    assert!(available_processor_count() >= 1);
}

#[test]
fn count_has_sane_upper_bound() {
    let cores = available_processor_count();
    assert!(cores <= 65536, "suspiciously large processor count: {cores}");
}

#[test]
fn count_is_stable_across_calls() {
    let first = available_processor_count();
    let again: Vec<usize> = (0..100).map(|_| available_processor_count()).collect();
    assert!(again.iter().all(|&n| n == first), "{first} vs {again:?}");
}

#[test]
fn count_is_stable_across_threads() {
    let expected = available_processor_count();
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(available_processor_count))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn count_not_below_std_available_parallelism_floor() {
    // std may apply cgroup quotas on top of the host count, never raise it.
    let std_count = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    assert!(std_count <= available_processor_count());
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw report mapping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn host_reporting_eight_cores_yields_eight() {
    assert_eq!(sanitize_count(Some(8)), 8);
}

#[test]
fn unavailable_query_yields_one() {
    assert_eq!(sanitize_count(None), 1);
}

#[test]
fn zero_and_negative_reports_yield_one() {
    assert_eq!(sanitize_count(Some(0)), 1);
    assert_eq!(sanitize_count(Some(-1)), 1);
    assert_eq!(sanitize_count(Some(-4096)), 1);
}

#[test]
fn large_reports_pass_through() {
    assert_eq!(sanitize_count(Some(1024)), 1024);
}
