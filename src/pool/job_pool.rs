//! Job pool implementation

use crate::core::{BoxError, IdGenerator, Job, PoolError, Result};
use crate::pool::config::PoolConfig;
use crate::pool::stats::{AtomicPoolStats, PoolStats};
use crate::pool::worker::{Worker, WorkerState, WorkerStats};
use crate::queue::hand_off;
use crossbeam::channel::{Receiver, RecvTimeoutError, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

/// How long teardown waits for a result before re-checking worker exit
const DRAIN_POLL: Duration = Duration::from_millis(10);

/// A fixed set of workers executing submitted jobs and handing back results
///
/// Jobs go in through [`add`](Self::add) and come back, in completion order,
/// through [`result`](Self::result). Every job submitted produces exactly one
/// retrievable job, whether its work succeeded, returned an error or panicked.
///
/// # Teardown
///
/// [`shutdown`](Self::shutdown) closes the inbound queue, waits for the workers
/// to drain it and exit, and only then lets the outbound queue close. Results
/// already produced stay retrievable; once they are drained `result` returns
/// [`PoolError::Closed`].
///
/// # Example
///
/// ```rust
/// use rust_job_pool::prelude::*;
///
/// # fn main() -> Result<()> {
/// let pool: Pool<u64, u64> = Pool::new(2)?;
/// for n in [1, 2, 3, 4] {
///     pool.add(|n: &u64| Ok(n * 2), n)?;
/// }
///
/// let mut doubled: Vec<u64> = (0..4)
///     .map(|_| pool.result().map(|job| *job.result().unwrap()))
///     .collect::<Result<_>>()?;
/// doubled.sort();
/// assert_eq!(doubled, vec![2, 4, 6, 8]);
///
/// pool.shutdown()?;
/// # Ok(())
/// # }
/// ```
pub struct Pool<A, T, E = BoxError> {
    config: PoolConfig,
    inbound: RwLock<Option<Sender<Job<A, T, E>>>>,
    outbound: Receiver<Job<A, T, E>>,
    workers: Mutex<Vec<Worker>>,
    id_func: RwLock<Option<IdGenerator>>,
    stats: Arc<AtomicPoolStats>,
}

impl<A, T, E> std::fmt::Debug for Pool<A, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("config", &self.config)
            .field("running", &self.inbound.read().is_some())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}

impl<A, T, E> Pool<A, T, E>
where
    A: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Create a pool with `num_workers` workers and start them
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidConfig`] if `num_workers` is zero,
    /// [`PoolError::SpawnError`] if a worker thread cannot be created.
    pub fn new(num_workers: usize) -> Result<Self> {
        Self::with_config(PoolConfig::new(num_workers))
    }

    /// Create a pool from a configuration and start its workers
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;

        let inbound = hand_off::<Job<A, T, E>>(config.inbound);
        let outbound = hand_off::<Job<A, T, E>>(config.outbound);
        let stats = Arc::new(AtomicPoolStats::new());

        let mut workers = Vec::with_capacity(config.num_workers);
        for id in 0..config.num_workers {
            match Worker::spawn(
                id,
                &config.thread_name_prefix,
                inbound.receiver.clone(),
                outbound.sender.clone(),
                Arc::clone(&stats),
            ) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    // Let the workers already started see a closed queue and exit
                    drop(inbound.sender);
                    for worker in workers {
                        let _ = worker.join();
                    }
                    return Err(e);
                }
            }
        }

        log::info!(
            "Job pool '{}' started: {} workers, inbound {}, outbound {}",
            config.name,
            config.num_workers,
            config.inbound.describe(),
            config.outbound.describe()
        );
        if let Some(max_unread) = config.max_unread() {
            log::debug!(
                "Job pool '{}': add may block once {} results are left unread",
                config.name,
                max_unread
            );
        }
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_pool_start(config.num_workers, &config.inbound.describe());

        let id_func = config.id_generator();
        // `outbound.sender` drops here: only workers can keep the result queue open
        Ok(Self {
            config,
            inbound: RwLock::new(Some(inbound.sender)),
            outbound: outbound.receiver,
            workers: Mutex::new(workers),
            id_func: RwLock::new(id_func),
            stats,
        })
    }

    /// Install an id generator, called once per job at submission
    ///
    /// Affects jobs submitted after this call returns. Jobs already queued keep
    /// whatever id they were given.
    pub fn set_id_func<F>(&self, generator: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.set_id_generator(Arc::new(generator));
    }

    /// Install a shared id generator such as [`id::uuid_v4`](crate::core::id::uuid_v4)
    pub fn set_id_generator(&self, generator: IdGenerator) {
        *self.id_func.write() = Some(generator);
    }

    /// Remove the id generator; later jobs carry no id
    pub fn clear_id_func(&self) {
        *self.id_func.write() = None;
    }

    /// Submit `work` bound to `args`
    ///
    /// Returns as soon as the job is queued; it does not wait for the work to
    /// run. With a bounded or rendezvous inbound queue it may wait for room or
    /// for an idle worker. Failures of the work itself are never reported
    /// here: they come back on the job through [`result`](Self::result).
    ///
    /// # Errors
    ///
    /// [`PoolError::Closed`] after [`shutdown`](Self::shutdown).
    pub fn add<F>(&self, work: F, args: A) -> Result<()>
    where
        F: FnOnce(&A) -> std::result::Result<T, E> + Send + 'static,
    {
        self.submit(Job::new(work, args))
    }

    /// Submit a job built with [`Job::new`]
    ///
    /// # Errors
    ///
    /// [`PoolError::JobAlreadyExecuted`] for a job that came back from
    /// [`result`](Self::result), [`PoolError::Closed`] after shutdown.
    pub fn submit(&self, mut job: Job<A, T, E>) -> Result<()> {
        if job.is_executed() {
            return Err(PoolError::job_already_executed(job.id()));
        }

        // Cloning the sender keeps the lock out of a possibly blocking send
        let sender = self
            .inbound
            .read()
            .clone()
            .ok_or_else(|| PoolError::closed(&self.config.name))?;

        let generator = self.id_func.read().clone();
        if let Some(generator) = generator {
            job.assign_id(generator());
        }

        self.stats.record_submission();
        if sender.send(job).is_err() {
            self.stats.revert_submission();
            return Err(PoolError::closed(&self.config.name));
        }

        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_submission(self.stats.snapshot().pending);

        Ok(())
    }

    /// Wait for the next completed job
    ///
    /// Call it once per job you expect back. Calling it with nothing
    /// outstanding blocks until another job completes, which may be never;
    /// use [`next_result`](Self::next_result) or
    /// [`result_timeout`](Self::result_timeout) when that matters.
    ///
    /// # Errors
    ///
    /// [`PoolError::Closed`] once the pool is shut down and every completed
    /// job has been retrieved.
    pub fn result(&self) -> Result<Job<A, T, E>> {
        let job = self
            .outbound
            .recv()
            .map_err(|_| PoolError::closed(&self.config.name))?;
        self.stats.record_retrieval();
        Ok(job)
    }

    /// Take a completed job if one is ready, without waiting
    pub fn try_result(&self) -> Option<Job<A, T, E>> {
        let job = self.outbound.try_recv().ok()?;
        self.stats.record_retrieval();
        Some(job)
    }

    /// Wait at most `timeout` for the next completed job
    ///
    /// # Errors
    ///
    /// [`PoolError::ResultTimeout`] if nothing completed in time,
    /// [`PoolError::Closed`] as for [`result`](Self::result).
    pub fn result_timeout(&self, timeout: Duration) -> Result<Job<A, T, E>> {
        let job = self.outbound.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => PoolError::result_timeout(timeout.as_millis() as u64),
            RecvTimeoutError::Disconnected => PoolError::closed(&self.config.name),
        })?;
        self.stats.record_retrieval();
        Ok(job)
    }

    /// Next completed job, or `None` when no submitted job is left to retrieve
    ///
    /// Waits like [`result`](Self::result) while jobs are outstanding. The
    /// outstanding count is read from the counters, so submissions racing
    /// with this call from other threads may or may not be waited for.
    pub fn next_result(&self) -> Option<Job<A, T, E>> {
        if self.stats.outstanding() == 0 {
            return None;
        }
        self.result().ok()
    }

    /// Iterate over completed jobs until none are outstanding
    ///
    /// ```rust
    /// use rust_job_pool::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let pool: Pool<&'static str, usize> = Pool::new(3)?;
    /// for word in ["job", "pool", "worker"] {
    ///     pool.add(|w: &&str| Ok(w.len()), word)?;
    /// }
    /// let total: usize = pool.results().filter_map(|job| job.into_result().ok()).sum();
    /// assert_eq!(total, 13);
    /// # Ok(())
    /// # }
    /// ```
    pub fn results(&self) -> Results<'_, A, T, E> {
        Results { pool: self }
    }

    /// Snapshot of the pool counters
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }

    /// Statistics for each worker still attached to the pool
    pub fn worker_stats(&self) -> Vec<Arc<WorkerStats>> {
        self.workers.lock().iter().map(|w| w.stats()).collect()
    }

    /// Current loop state of each worker still attached to the pool
    pub fn worker_states(&self) -> Vec<WorkerState> {
        self.workers.lock().iter().map(|w| w.state()).collect()
    }

    /// Total jobs processed across all workers
    pub fn total_jobs_processed(&self) -> u64 {
        self.workers
            .lock()
            .iter()
            .map(|w| w.stats().get_jobs_processed())
            .sum()
    }

    /// Number of workers the pool was built with
    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    /// Pool name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configuration the pool was built with
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Whether the pool still accepts jobs
    pub fn is_running(&self) -> bool {
        self.inbound.read().is_some()
    }

    /// Number of jobs waiting in the inbound queue
    pub fn queued(&self) -> usize {
        self.inbound.read().as_ref().map_or(0, |s| s.len())
    }

    /// Number of completed jobs waiting to be retrieved
    pub fn ready(&self) -> usize {
        self.outbound.len()
    }

    /// Stop accepting jobs and wait for the workers to finish
    ///
    /// # Graceful Shutdown
    ///
    /// 1. Closes the inbound queue, so later `add` calls fail
    /// 2. Waits for workers to run every queued job and exit
    /// 3. The outbound queue closes when the last worker exits
    ///
    /// Completed jobs are kept for [`result`](Self::result). With a bounded
    /// outbound queue, results must be drained while this runs or workers
    /// block on a full queue; [`finish`](Self::finish) does that for you.
    ///
    /// Calling it again is a no-op.
    pub fn shutdown(&self) -> Result<()> {
        if !self.close_inbound() {
            return Ok(());
        }
        let joined = self.join_workers(None);
        self.log_shutdown();
        joined
    }

    /// Shut down and return every completed job not yet retrieved
    ///
    /// Results are collected while waiting for the workers, so this cannot
    /// block on a full outbound queue. A worker that fails to join is logged
    /// and the jobs collected from the others are still returned.
    pub fn finish(&self) -> Vec<Job<A, T, E>> {
        let mut collected: Vec<Job<A, T, E>> = Vec::new();
        if self.close_inbound() {
            let mut sink = |job: Job<A, T, E>| collected.push(job);
            let joined = self.join_workers(Some(&mut sink));
            self.log_shutdown();
            if let Err(e) = joined {
                log::warn!(
                    "Job pool '{}': finishing without a worker: {}",
                    self.config.name,
                    e
                );
            }
        }
        collected.extend(self.outbound.try_iter());
        for _ in 0..collected.len() {
            self.stats.record_retrieval();
        }
        collected
    }

    /// Drop the pool's inbound sender; `false` if it was already gone
    fn close_inbound(&self) -> bool {
        self.inbound.write().take().is_some()
    }

    fn join_workers(&self, mut on_result: Option<&mut dyn FnMut(Job<A, T, E>)>) -> Result<()> {
        let workers = std::mem::take(&mut *self.workers.lock());
        let mut first_error = None;
        for worker in workers {
            if let Some(sink) = on_result.as_mut() {
                while !worker.is_finished() {
                    if let Ok(job) = self.outbound.recv_timeout(DRAIN_POLL) {
                        sink(job);
                    }
                }
            }
            if let Err(e) = worker.join() {
                log::error!("Job pool '{}': {}", self.config.name, e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn log_shutdown(&self) {
        let stats = self.stats.snapshot();
        log::info!(
            "Job pool '{}' shut down: {} completed, {} failed, {} panicked",
            self.config.name,
            stats.completed,
            stats.failed,
            stats.panicked
        );
        #[cfg(feature = "tracing")]
        crate::tracing::metrics::record_pool_shutdown(stats.completed, stats.unsuccessful());
    }
}

impl<A, T, E> Drop for Pool<A, T, E> {
    fn drop(&mut self) {
        // Nobody can retrieve results after this, so discard them while the
        // workers finish instead of letting them block on the outbound queue.
        if self.inbound.get_mut().take().is_none() {
            return;
        }
        for worker in std::mem::take(self.workers.get_mut()) {
            while !worker.is_finished() {
                let _ = self.outbound.recv_timeout(DRAIN_POLL);
            }
            if let Err(e) = worker.join() {
                log::error!(
                    "Failed to shut down job pool '{}' during drop: {}",
                    self.config.name,
                    e
                );
            }
        }
    }
}

/// Iterator returned by [`Pool::results`]
pub struct Results<'a, A, T, E> {
    pool: &'a Pool<A, T, E>,
}

impl<A, T, E> Iterator for Results<'_, A, T, E>
where
    A: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Item = Job<A, T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pool.next_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{id, JobError};
    use crate::queue::QueueCapacity;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Instant;

    type Doubler = Pool<u64, u64, String>;

    fn double(n: &u64) -> std::result::Result<u64, String> {
        Ok(n * 2)
    }

    #[test]
    fn test_pool_creation() {
        let pool = Doubler::new(4).expect("Failed to create pool");
        assert!(pool.is_running());
        assert_eq!(pool.num_workers(), 4);
        assert_eq!(pool.worker_stats().len(), 4);

        pool.shutdown().expect("Failed to shutdown pool");
        assert!(!pool.is_running());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = Doubler::new(0);
        assert!(matches!(result, Err(PoolError::InvalidConfig { .. })));
    }

    #[test]
    fn test_doubles_in_any_order() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        for n in 1..=4 {
            pool.add(double, n).expect("Failed to submit job");
        }

        let mut results: Vec<u64> = (0..4)
            .map(|_| *pool.result().expect("result").result().expect("value"))
            .collect();
        results.sort_unstable();
        assert_eq!(results, vec![2, 4, 6, 8]);

        pool.shutdown().expect("Failed to shutdown pool");
    }

    #[test]
    fn test_failure_is_returned_as_data() {
        let pool: Pool<(), &'static str, String> = Pool::new(3).expect("Failed to create pool");
        pool.add(
            |_| {
                thread::sleep(Duration::from_millis(50));
                Ok("ok")
            },
            (),
        )
        .expect("submit");
        pool.add(|_| Err("boom".to_string()), ()).expect("submit");

        let mut ok = 0;
        let mut boom = 0;
        for _ in 0..2 {
            let job = pool.result().expect("result");
            match (job.result(), job.error()) {
                (Some(&"ok"), None) => ok += 1,
                (None, Some(JobError::Failed(e))) if e == "boom" => boom += 1,
                other => panic!("unexpected job outcome {:?}", other),
            }
        }
        assert_eq!((ok, boom), (1, 1));

        let stats = pool.stats();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_ids_assigned_when_generator_installed() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        pool.add(double, 1).expect("submit");
        assert!(pool.result().expect("result").id().is_none());

        pool.set_id_generator(id::sequential_with_prefix("job"));
        for n in 0..10 {
            pool.add(double, n).expect("submit");
        }
        let ids: HashSet<String> = pool
            .results()
            .map(|job| job.id().expect("id assigned").to_string())
            .collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.contains("job-1"));
        assert!(ids.contains("job-10"));

        pool.clear_id_func();
        pool.add(double, 1).expect("submit");
        assert!(pool.result().expect("result").id().is_none());
    }

    #[test]
    fn test_id_func_from_config() {
        let config = PoolConfig::new(1).with_id_func(|| "fixed".to_string());
        let pool = Doubler::with_config(config).expect("Failed to create pool");
        pool.add(double, 3).expect("submit");
        assert_eq!(pool.result().expect("result").id(), Some("fixed"));
    }

    #[test]
    fn test_add_after_shutdown_fails() {
        let pool = Doubler::new(1).expect("Failed to create pool");
        pool.shutdown().expect("Failed to shutdown pool");
        let result = pool.add(double, 1);
        assert!(matches!(result, Err(PoolError::Closed { .. })));
        assert_eq!(pool.stats().submitted, 0);
    }

    #[test]
    fn test_resubmitting_executed_job_rejected() {
        let pool = Doubler::new(1).expect("Failed to create pool");
        pool.set_id_generator(id::sequential());
        pool.add(double, 21).expect("submit");
        let job = pool.result().expect("result");
        assert_eq!(job.id(), Some("1"));

        let err = pool.submit(job).expect_err("executed job resubmitted");
        assert!(
            matches!(err, PoolError::JobAlreadyExecuted { ref job_id } if job_id.as_deref() == Some("1"))
        );

        // Rejected before the generator ran or the counters moved
        let stats = pool.stats();
        assert_eq!(stats.submitted, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 0);
        pool.add(double, 1).expect("submit");
        assert_eq!(pool.result().expect("result").id(), Some("2"));
    }

    #[test]
    fn test_results_survive_shutdown() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        for n in 0..5 {
            pool.add(double, n).expect("submit");
        }
        pool.shutdown().expect("Failed to shutdown pool");

        for _ in 0..5 {
            assert!(pool.result().is_ok());
        }
        assert!(matches!(pool.result(), Err(PoolError::Closed { .. })));
        assert!(pool.stats().is_quiescent());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        pool.shutdown().expect("first shutdown");
        pool.shutdown().expect("second shutdown");
    }

    #[test]
    fn test_next_result_stops_when_nothing_outstanding() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        assert!(pool.next_result().is_none());

        pool.add(double, 1).expect("submit");
        pool.add(double, 2).expect("submit");
        assert!(pool.next_result().is_some());
        assert!(pool.next_result().is_some());
        assert!(pool.next_result().is_none());
    }

    #[test]
    fn test_result_timeout() {
        let pool = Doubler::new(1).expect("Failed to create pool");
        let err = pool
            .result_timeout(Duration::from_millis(20))
            .expect_err("nothing submitted");
        assert!(matches!(err, PoolError::ResultTimeout { timeout_ms: 20 }));

        pool.add(double, 4).expect("submit");
        let job = pool
            .result_timeout(Duration::from_secs(5))
            .expect("job completes");
        assert_eq!(job.result(), Some(&8));
    }

    #[test]
    fn test_try_result() {
        let pool = Doubler::new(1).expect("Failed to create pool");
        assert!(pool.try_result().is_none());

        pool.add(double, 1).expect("submit");
        let deadline = Instant::now() + Duration::from_secs(5);
        let job = loop {
            if let Some(job) = pool.try_result() {
                break job;
            }
            assert!(Instant::now() < deadline, "job never completed");
            thread::sleep(Duration::from_millis(1));
        };
        assert_eq!(job.result(), Some(&2));
    }

    #[test]
    fn test_finish_collects_with_bounded_outbound() {
        let config = PoolConfig::handshake(2);
        let pool = Doubler::with_config(config).expect("Failed to create pool");
        for n in 0..4 {
            pool.add(double, n).expect("submit");
        }

        let jobs = pool.finish();
        assert_eq!(jobs.len(), 4);
        let mut values: Vec<u64> = jobs.iter().filter_map(|j| j.result().copied()).collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 2, 4, 6]);

        let stats = pool.stats();
        assert_eq!(stats.retrieved, 4);
        assert!(matches!(pool.result(), Err(PoolError::Closed { .. })));
    }

    struct PanicOnDrop;

    impl Drop for PanicOnDrop {
        fn drop(&mut self) {
            panic!("panic payload dropped");
        }
    }

    #[test]
    fn test_finish_keeps_results_when_a_worker_dies() {
        let pool = Doubler::new(2).expect("Failed to create pool");
        // The worker survives the job panic but dies dropping its payload
        pool.add(|_| std::panic::panic_any(PanicOnDrop), 0)
            .expect("submit");
        for n in 1..=5 {
            pool.add(double, n).expect("submit");
        }

        let jobs = pool.finish();
        let mut values: Vec<u64> = jobs.iter().filter_map(|j| j.result().copied()).collect();
        values.sort_unstable();
        assert_eq!(values, vec![2, 4, 6, 8, 10]);
        assert_eq!(pool.stats().retrieved, 5);
        assert!(!pool.is_running());
    }

    #[test]
    fn test_more_jobs_than_workers() {
        let pool = Doubler::new(3).expect("Failed to create pool");
        let count = 500;
        for n in 0..count {
            pool.add(double, n).expect("submit");
        }

        let mut sum = 0;
        for _ in 0..count {
            sum += pool.result().expect("result").result().copied().expect("value");
        }
        assert_eq!(sum, (0..count).map(|n| n * 2).sum::<u64>());

        let stats = pool.stats();
        assert_eq!(stats.submitted, count);
        assert_eq!(stats.completed, count);
        assert!(stats.is_quiescent());
        assert_eq!(pool.total_jobs_processed(), count);
    }

    #[test]
    fn test_concurrent_submit() {
        let pool = Arc::new(Doubler::new(4).expect("Failed to create pool"));
        let counter = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let pool = Arc::clone(&pool);
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for n in 0..100 {
                        let counter = Arc::clone(&counter);
                        pool.add(
                            move |v: &u64| {
                                counter.fetch_add(1, Ordering::Relaxed);
                                Ok(*v)
                            },
                            n,
                        )
                        .expect("submit");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        for _ in 0..1000 {
            pool.result().expect("result");
        }
        assert_eq!(counter.load(Ordering::Relaxed), 1000);
        assert_eq!(pool.stats().submitted, 1000);
    }

    #[test]
    fn test_rendezvous_inbound() {
        let config = PoolConfig::new(2).with_inbound(QueueCapacity::Rendezvous);
        let pool = Doubler::with_config(config).expect("Failed to create pool");
        for n in 0..20 {
            pool.add(double, n).expect("submit");
        }
        assert_eq!(pool.results().count(), 20);
    }

    #[test]
    fn test_drop_with_unretrieved_results() {
        let config = PoolConfig::handshake(1);
        let pool = Doubler::with_config(config).expect("Failed to create pool");
        pool.add(double, 1).expect("submit");
        pool.add(double, 2).expect("submit");
        // Outbound holds one result, the worker blocks on the second
        drop(pool);
    }
}
