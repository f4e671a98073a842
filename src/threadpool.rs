//! Fixed-size worker pool sized from the host's processor count.
//!
//! Jobs run on a `rayon::ThreadPool`. Bounded-queue / blocking-submit
//! semantics come from a `crossbeam_channel::bounded` channel used as a
//! semaphore holding `nb_workers + queue_size` slot tokens.

use crossbeam_channel::{bounded, Receiver, Sender};
use rayon::ThreadPool as RayonPool;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::workers::default_nb_workers;

type JobFn = Box<dyn FnOnce() + Send + 'static>;

struct PoolState {
    pending: usize, // submitted but not yet finished
}

type SharedState = Arc<(Mutex<PoolState>, Condvar)>;

// A panicking job must not wedge the pool; the counter is still consistent.
fn lock(state: &Mutex<PoolState>) -> MutexGuard<'_, PoolState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases a job's slot and pending count when dropped, including on panic.
struct SlotGuard {
    state: SharedState,
    slot_tx: Sender<()>,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let (mutex, cvar) = &*self.state;
        let mut s = lock(mutex);
        s.pending -= 1;
        if s.pending == 0 {
            cvar.notify_all();
        }
        let _ = self.slot_tx.send(());
    }
}

pub struct WorkerPool {
    pool: RayonPool,
    slot_tx: Sender<()>,
    slot_rx: Receiver<()>,
    state: SharedState,
}

impl WorkerPool {
    /// Creates a pool of `nb_workers` threads accepting `queue_size` extra
    /// queued jobs. Returns `None` if either is 0 or the threads cannot be
    /// spawned.
    pub fn new(nb_workers: usize, queue_size: usize) -> Option<Self> {
        if nb_workers < 1 || queue_size < 1 {
            return None;
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(nb_workers)
            .thread_name(|i| format!("rtshim-worker-{i}"))
            .panic_handler(|_| crate::displaylevel!(1, "rtshim: worker job panicked \n"))
            .build()
            .ok()?;

        let capacity = queue_size + nb_workers;
        let (slot_tx, slot_rx) = bounded(capacity);
        // Each token in the channel is one free slot.
        for _ in 0..capacity {
            slot_tx.send(()).ok()?;
        }

        crate::displaylevel!(4, "worker pool: {} threads, {} slots \n", nb_workers, capacity);

        Some(WorkerPool {
            pool,
            slot_tx,
            slot_rx,
            state: Arc::new((Mutex::new(PoolState { pending: 0 }), Condvar::new())),
        })
    }

    /// Creates a pool sized by [`default_nb_workers`].
    pub fn for_host(queue_size: usize) -> Option<Self> {
        Self::new(default_nb_workers(), queue_size)
    }

    /// Number of worker threads.
    pub fn nb_workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `job` on a worker. Blocks while every slot is in use.
    pub fn submit_job(&self, job: JobFn) {
        // Both channel ends live in `self`, so recv only fails if a token was
        // lost; run the job anyway rather than dropping it.
        let _ = self.slot_rx.recv();

        {
            let (mutex, _) = &*self.state;
            lock(mutex).pending += 1;
        }

        let guard = SlotGuard {
            state: Arc::clone(&self.state),
            slot_tx: self.slot_tx.clone(),
        };
        self.pool.spawn(move || {
            let _guard = guard;
            job();
        });
    }

    /// Blocks until every submitted job has finished. The pool stays usable.
    pub fn jobs_completed(&self) {
        let (mutex, cvar) = &*self.state;
        let mut s = lock(mutex);
        while s.pending > 0 {
            s = cvar.wait(s).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.jobs_completed();
    }
}
