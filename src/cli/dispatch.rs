// cli/dispatch.rs — Executes a parsed `rtshim` command.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;

use super::args::{Cli, Command};
use crate::config::QUEUE_SIZE_DEFAULT;
use crate::display::{level_from_flags, set_display_level};
use crate::sys;
use crate::threadpool::WorkerPool;
use crate::workers::{default_nb_workers, nb_workers, resolve_nb_workers};

/// Worker count from `-T`, else the environment override, else auto.
fn requested_workers(threads: Option<usize>) -> anyhow::Result<usize> {
    match threads {
        Some(n) => Ok(resolve_nb_workers(n)),
        None => nb_workers(),
    }
}

/// Runs `jobs` counting jobs on `pool` and returns how many completed.
fn run_counting_jobs(pool: &WorkerPool, jobs: usize) -> usize {
    let done = Arc::new(AtomicUsize::new(0));
    for _ in 0..jobs {
        let done = Arc::clone(&done);
        pool.submit_job(Box::new(move || {
            done.fetch_add(1, Ordering::Relaxed);
        }));
    }
    pool.jobs_completed();
    done.load(Ordering::Relaxed)
}

/// Executes `cli` and returns the process exit code.
///
/// `exit` never returns: it terminates the process directly.
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    set_display_level(level_from_flags(cli.verbose, cli.quiet));
    crate::displaylevel!(
        3,
        "*** rtshim v{} ({} runtime) ***\n",
        crate::RTSHIM_VERSION_STRING,
        sys::variant_name()
    );

    match cli.command {
        Command::Cores => {
            crate::displayout!("{}\n", sys::available_processor_count());
        }
        Command::Exit { status } => {
            crate::displaylevel!(
                3,
                "exit status {} observed as {} \n",
                status,
                sys::exit_code_for(status)
            );
            sys::terminate(status);
        }
        Command::Workers { threads } => {
            crate::displayout!("{}\n", requested_workers(threads)?);
        }
        Command::Pool { threads, jobs } => {
            let nb_workers = requested_workers(threads)?;
            let pool = WorkerPool::new(nb_workers, QUEUE_SIZE_DEFAULT)
                .ok_or_else(|| anyhow!("cannot start a pool of {} workers", nb_workers))?;
            let done = run_counting_jobs(&pool, jobs);
            crate::displayout!("{} jobs completed on {} workers\n", done, pool.nb_workers());
            if done != jobs {
                return Ok(1);
            }
        }
        Command::Info => {
            crate::displayout!("rtshim {}\n", crate::RTSHIM_VERSION_STRING);
            crate::displayout!("variant: {}\n", sys::variant_name());
            crate::displayout!("processors: {}\n", sys::available_processor_count());
            crate::displayout!("default workers: {}\n", default_nb_workers());
        }
    }
    Ok(0)
}
