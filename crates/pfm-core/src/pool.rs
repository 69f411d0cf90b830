//! Host-owned worker pool for data-parallel decode loops.
//!
//! There is no process-wide pool: the host application builds a
//! [`WorkerPool`] once and passes it to every load call.
//!
//! # Example
//!
//! ```rust
//! use pfm_core::WorkerPool;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let pool = WorkerPool::new(2).unwrap();
//! let sum = AtomicUsize::new(0);
//! pool.parallel_for(vec![1usize, 2, 3], |_, v| {
//!     sum.fetch_add(v, Ordering::Relaxed);
//! });
//! assert_eq!(sum.into_inner(), 6);
//! ```

use crate::Result;
use rayon::prelude::*;

/// Bounded pool of worker threads backed by [`rayon::ThreadPool`].
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Creates a pool with `num_threads` workers (`0` = one per logical CPU).
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("pfm-worker-{}", index))
            .build()?;
        Ok(Self { pool })
    }

    /// Creates a pool with a single worker.
    pub fn single_threaded() -> Result<Self> {
        Self::new(1)
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `body(i, task)` for every task, returning once all have finished.
    ///
    /// Invocations may run in any order and on any worker. Each task is moved
    /// into exactly one invocation, so tasks holding disjoint `&mut` slices
    /// need no further synchronization.
    pub fn parallel_for<T, F>(&self, tasks: Vec<T>, body: F)
    where
        T: Send,
        F: Fn(usize, T) + Sync,
    {
        self.pool.install(|| {
            tasks
                .into_par_iter()
                .enumerate()
                .for_each(|(index, task)| body(index, task));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[test]
    fn thread_count_is_respected() {
        assert_eq!(WorkerPool::new(3).unwrap().num_threads(), 3);
        assert_eq!(WorkerPool::single_threaded().unwrap().num_threads(), 1);
        assert!(WorkerPool::new(0).unwrap().num_threads() >= 1);
    }

    #[test]
    fn every_task_runs_once() {
        let pool = WorkerPool::new(4).unwrap();
        let seen = Mutex::new(HashSet::new());
        pool.parallel_for((0..100).collect(), |index, task: usize| {
            assert_eq!(index, task);
            assert!(seen.lock().unwrap().insert(task));
        });
        assert_eq!(seen.into_inner().unwrap().len(), 100);
    }

    #[test]
    fn disjoint_mutable_tasks() {
        let pool = WorkerPool::new(2).unwrap();
        let mut buf = vec![0u32; 12];
        let rows: Vec<&mut [u32]> = buf.chunks_mut(4).collect();
        pool.parallel_for(rows, |y, row| row.fill(y as u32 + 1));
        assert_eq!(buf, [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn empty_task_list() {
        let pool = WorkerPool::single_threaded().unwrap();
        pool.parallel_for(Vec::<u8>::new(), |_, _| panic!("no tasks expected"));
    }
}
