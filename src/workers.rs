//! Worker-count sizing for drivers that spawn thread pools.
//!
//! The automatic count keeps a share of the host's processors free for the
//! driver's own I/O and the rest of the system: `1 + cores / 8` processors are
//! spared, and at least one worker is always returned.

use crate::config::{nb_workers_from_env, NB_WORKERS_AUTO, NB_WORKERS_MAX};
use crate::sys::available_processor_count;

/// Workers for `nb_cores` logical processors after sparing `1 + nb_cores / 8`.
pub fn workers_for_cores(nb_cores: usize) -> usize {
    let spared = 1 + (nb_cores >> 3);
    if nb_cores <= spared {
        1
    } else {
        nb_cores - spared
    }
}

/// Default worker count for this host.
pub fn default_nb_workers() -> usize {
    workers_for_cores(available_processor_count())
}

/// Resolves a requested worker count: [`NB_WORKERS_AUTO`] sizes from the host,
/// and the result is clamped to `1..=NB_WORKERS_MAX`.
pub fn resolve_nb_workers(requested: usize) -> usize {
    let nb = if requested == NB_WORKERS_AUTO {
        default_nb_workers()
    } else {
        requested
    };
    if nb > NB_WORKERS_MAX {
        crate::displaylevel!(
            3,
            "Requested {} threads too large => automatically reduced to {} \n",
            nb,
            NB_WORKERS_MAX
        );
        NB_WORKERS_MAX
    } else {
        crate::displaylevel!(4, "Using {} worker threads \n", nb);
        nb
    }
}

/// Worker count from the environment override, or automatic when unset.
pub fn nb_workers() -> anyhow::Result<usize> {
    let requested = nb_workers_from_env()?.unwrap_or(NB_WORKERS_AUTO);
    Ok(resolve_nb_workers(requested))
}
