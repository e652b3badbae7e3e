use anyhow::Context;
use std::sync::mpsc;
use std::sync::Arc;

/// Default worker count when the caller does not configure one.
pub const DEFAULT_WORKERS: usize = 4;

/// Bounded worker pool running independent blocking jobs.
///
/// One job occupies one worker start-to-finish; concurrency is across jobs,
/// never within one. The pool size bounds in-flight filesystem handles.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `workers` threads (minimum 1).
    pub fn new(workers: usize) -> anyhow::Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("sumguard-worker-{i}"))
            .build()
            .context("build worker pool")?;
        Ok(Self { pool })
    }

    /// Submit one task per job and yield `(job, output)` pairs as tasks
    /// finish — completion order, not submission order.
    ///
    /// Failures must travel inside `T` (typically a `Result`); a failed job
    /// never cancels or aborts its siblings. The returned iterator ends once
    /// every job has completed.
    pub fn run<J, T, F>(&self, jobs: Vec<J>, work: F) -> mpsc::IntoIter<(J, T)>
    where
        J: Send + 'static,
        T: Send + 'static,
        F: Fn(&J) -> T + Send + Sync + 'static,
    {
        let work = Arc::new(work);
        let (tx, rx) = mpsc::channel();

        for job in jobs {
            let tx = tx.clone();
            let work = Arc::clone(&work);
            self.pool.spawn(move || {
                let output = work(&job);
                // The receiver only disappears if the caller dropped the
                // iterator; the job's outcome is moot then.
                let _ = tx.send((job, output));
            });
        }

        rx.into_iter()
    }
}
