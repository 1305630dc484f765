use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::constants::{MAX_WORKERS_LIMIT, WORKER_THREAD_PREFIX};
use crate::error::ChunkError;

/// Process-wide pools keyed by thread count, built on first use.
static POOLS: OnceLock<DashMap<usize, Arc<ThreadPool>>> = OnceLock::new();

/// Fixed-size pool that runs one task per chunk.
///
/// Tasks are dispatched all at once but execute on at most `workers` threads,
/// so a large chunk count never turns into a large thread count. With a
/// single worker the tasks run inline on the caller's thread.
///
/// The underlying rayon pool is shared by every call with the same worker
/// cap, so repeated splits and merges reuse the same threads.
pub struct WorkerPool {
    pool: Option<Arc<ThreadPool>>,
    workers: usize,
}

impl WorkerPool {
    /// Get a pool for `tasks` tasks, never exceeding `max_workers` threads.
    pub fn new(max_workers: usize, tasks: usize) -> Result<Self, ChunkError> {
        let cap = max_workers.clamp(1, MAX_WORKERS_LIMIT);
        let workers = cap.min(tasks.max(1));
        if workers == 1 {
            return Ok(Self { pool: None, workers });
        }

        Ok(Self {
            pool: Some(shared_pool(cap)?),
            workers,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task` once per item and return after every call has finished.
    ///
    /// Items may borrow from the caller's stack; the scope join guarantees no
    /// borrow escapes this call.
    pub fn for_each<T, F>(&self, items: Vec<T>, task: F)
    where
        T: Send,
        F: Fn(T) + Sync,
    {
        match &self.pool {
            None => items.into_iter().for_each(task),
            Some(pool) => pool.scope(|scope| {
                let task = &task;
                for item in items {
                    scope.spawn(move |_| task(item));
                }
            }),
        }
    }
}

fn shared_pool(threads: usize) -> Result<Arc<ThreadPool>, ChunkError> {
    let pools = POOLS.get_or_init(DashMap::new);
    if let Some(pool) = pools.get(&threads) {
        return Ok(Arc::clone(pool.value()));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |i| format!("{WORKER_THREAD_PREFIX}-{threads}-{i}"))
        .build()
        .map_err(|e| ChunkError::WorkerPool(e.to_string()))?;

    // A concurrent caller may have inserted first; keep whichever landed.
    let entry = pools.entry(threads).or_insert_with(|| Arc::new(pool));
    Ok(Arc::clone(entry.value()))
}
