// Integration tests for workers.rs — worker-count sizing

use rtshim::config::{NB_WORKERS_AUTO, NB_WORKERS_MAX};
use rtshim::sys::available_processor_count;
use rtshim::workers::{default_nb_workers, resolve_nb_workers, workers_for_cores};

#[test]
fn default_is_at_least_one() {
    assert!(default_nb_workers() >= 1);
}

#[test]
fn default_never_exceeds_host_processors() {
    assert!(default_nb_workers() <= available_processor_count());
}

#[test]
fn default_follows_host_count() {
    assert_eq!(default_nb_workers(), workers_for_cores(available_processor_count()));
}

#[test]
fn eight_core_host_spares_two() {
    assert_eq!(workers_for_cores(8), 6);
}

#[test]
fn single_core_host_gets_one_worker() {
    assert_eq!(workers_for_cores(1), 1);
}

#[test]
fn spare_share_is_monotonic() {
    let mut prev = workers_for_cores(1);
    for cores in 2..=512 {
        let w = workers_for_cores(cores);
        assert!(w >= prev, "cores {cores}: {w} < {prev}");
        assert!(w < cores);
        prev = w;
    }
}

#[test]
fn resolve_clamps_to_max() {
    assert_eq!(resolve_nb_workers(NB_WORKERS_MAX * 10), NB_WORKERS_MAX);
}

#[test]
fn resolve_auto_is_bounded() {
    let n = resolve_nb_workers(NB_WORKERS_AUTO);
    assert!((1..=NB_WORKERS_MAX).contains(&n));
}
