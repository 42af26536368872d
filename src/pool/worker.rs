//! Worker thread implementation

use crate::core::{Job, JobError, PoolError, Result};
use crate::pool::stats::{AtomicPoolStats, Outcome};
use crossbeam::channel::{Receiver, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "tracing")]
use tracing::{debug, span, Level};

/// Statistics for a worker thread
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total number of jobs processed, whatever the outcome
    pub jobs_processed: AtomicU64,
    /// Total number of jobs whose work returned an error
    pub jobs_failed: AtomicU64,
    /// Total number of jobs that panicked
    pub jobs_panicked: AtomicU64,
    /// Total time spent processing jobs (microseconds)
    pub total_processing_time_us: AtomicU64,
}

impl WorkerStats {
    /// Create new worker statistics
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, outcome: Outcome, elapsed: Duration) {
        self.jobs_processed.fetch_add(1, Ordering::Relaxed);
        match outcome {
            Outcome::Succeeded => {}
            Outcome::Failed => {
                self.jobs_failed.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Panicked => {
                self.jobs_panicked.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.total_processing_time_us
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Get total jobs processed
    pub fn get_jobs_processed(&self) -> u64 {
        self.jobs_processed.load(Ordering::Relaxed)
    }

    /// Get total jobs failed
    pub fn get_jobs_failed(&self) -> u64 {
        self.jobs_failed.load(Ordering::Relaxed)
    }

    /// Get total jobs panicked
    pub fn get_jobs_panicked(&self) -> u64 {
        self.jobs_panicked.load(Ordering::Relaxed)
    }

    /// Get average processing time per job in microseconds
    pub fn get_average_processing_time_us(&self) -> f64 {
        let total = self.total_processing_time_us.load(Ordering::Relaxed);
        let count = self.jobs_processed.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }
}

/// Where a worker is in its loop
///
/// `Waiting --dequeue--> Executing --outbound push--> Waiting`, until the
/// inbound queue closes and the worker moves to `Stopped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WorkerState {
    /// Blocked on the inbound queue
    Waiting = 0,
    /// Running a job or handing it to the outbound queue
    Executing = 1,
    /// Inbound queue closed and drained; the thread has exited or is exiting
    Stopped = 2,
}

impl WorkerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkerState::Waiting,
            1 => WorkerState::Executing,
            _ => WorkerState::Stopped,
        }
    }
}

#[derive(Debug)]
struct StateCell(AtomicU8);

impl StateCell {
    fn new() -> Self {
        StateCell(AtomicU8::new(WorkerState::Waiting as u8))
    }

    fn set(&self, state: WorkerState) {
        self.0.store(state as u8, Ordering::Release);
    }

    fn get(&self) -> WorkerState {
        WorkerState::from_u8(self.0.load(Ordering::Acquire))
    }
}

/// A worker thread that moves jobs from the inbound to the outbound queue
#[derive(Debug)]
pub struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
    stats: Arc<WorkerStats>,
    state: Arc<StateCell>,
}

impl Worker {
    /// Spawn a worker thread
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier for this worker, also recorded on each job it runs
    /// * `thread_name_prefix` - Thread is named `{prefix}-{id}`
    /// * `inbound` - Queue the worker takes jobs from
    /// * `outbound` - Queue finished jobs are pushed to
    /// * `pool_stats` - Pool-wide counters updated on every transition
    ///
    /// # Shutdown Behavior
    ///
    /// The worker exits once the inbound queue is closed and empty, then drops
    /// its outbound sender. When the last worker has done so, the outbound queue
    /// reports disconnection to result consumers.
    pub(crate) fn spawn<A, T, E>(
        id: usize,
        thread_name_prefix: &str,
        inbound: Receiver<Job<A, T, E>>,
        outbound: Sender<Job<A, T, E>>,
        pool_stats: Arc<AtomicPoolStats>,
    ) -> Result<Self>
    where
        A: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let stats = Arc::new(WorkerStats::new());
        let state = Arc::new(StateCell::new());
        let stats_clone = Arc::clone(&stats);
        let state_clone = Arc::clone(&state);

        let thread = thread::Builder::new()
            .name(format!("{}-{}", thread_name_prefix, id))
            .spawn(move || {
                Self::run(id, inbound, outbound, &pool_stats, &stats_clone, &state_clone);
            })
            .map_err(|e| PoolError::spawn_with_source(id, "Cannot create worker thread", e))?;

        Ok(Self {
            id,
            thread: Some(thread),
            stats,
            state,
        })
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get worker statistics
    pub fn stats(&self) -> Arc<WorkerStats> {
        Arc::clone(&self.stats)
    }

    /// Current position in the worker loop
    pub fn state(&self) -> WorkerState {
        self.state.get()
    }

    /// Whether the thread has exited
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Join the worker thread
    pub fn join(mut self) -> Result<()> {
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| PoolError::join(self.id, "Worker panicked"))?;
        }
        Ok(())
    }

    /// Main worker loop
    fn run<A, T, E>(
        id: usize,
        inbound: Receiver<Job<A, T, E>>,
        outbound: Sender<Job<A, T, E>>,
        pool_stats: &AtomicPoolStats,
        stats: &WorkerStats,
        state: &StateCell,
    ) {
        #[cfg(feature = "tracing")]
        let worker_span = span!(Level::DEBUG, "worker", id = id);
        #[cfg(feature = "tracing")]
        let _guard = worker_span.enter();

        #[cfg(feature = "tracing")]
        debug!("worker started");

        // recv fails only once every inbound sender is gone and the queue is empty
        while let Ok(mut job) = inbound.recv() {
            state.set(WorkerState::Executing);
            pool_stats.record_start();

            #[cfg(feature = "tracing")]
            crate::tracing::metrics::record_worker_busy(id);

            let (outcome, elapsed) = Self::execute_job(id, &mut job);
            stats.record(outcome, elapsed);
            pool_stats.record_finish(outcome);

            #[cfg(feature = "tracing")]
            crate::tracing::metrics::record_worker_idle(id);

            if outbound.send(job).is_err() {
                // Only possible once the result receiver is gone
                log::warn!("Worker {}: result queue closed, discarding finished job", id);
            }
            state.set(WorkerState::Waiting);
        }

        state.set(WorkerState::Stopped);
        log::debug!(
            "Worker {}: inbound queue closed, exiting after {} jobs",
            id,
            stats.get_jobs_processed()
        );
        #[cfg(feature = "tracing")]
        debug!(
            jobs_processed = stats.get_jobs_processed(),
            jobs_failed = stats.get_jobs_failed(),
            "worker shutting down"
        );
    }

    /// Run one job with panic protection and record its outcome on the job
    fn execute_job<A, T, E>(id: usize, job: &mut Job<A, T, E>) -> (Outcome, Duration) {
        #[cfg(feature = "tracing")]
        let job_span = span!(parent: job.span(), Level::DEBUG, "job_execution", job_id = ?job.id());
        #[cfg(feature = "tracing")]
        let _job_guard = job_span.enter();

        let Some(work) = job.take_work() else {
            job.complete(id, Duration::ZERO, Err(JobError::NotExecuted));
            return (Outcome::Failed, Duration::ZERO);
        };

        let start = Instant::now();
        let panic_result = catch_unwind(AssertUnwindSafe(|| work(job.args())));
        let elapsed = start.elapsed();

        let (outcome, recorded) = match panic_result {
            Ok(Ok(value)) => {
                #[cfg(feature = "tracing")]
                {
                    debug!(duration_ms = elapsed.as_millis() as u64, "job completed");
                    crate::tracing::metrics::record_completion(elapsed, true);
                }
                (Outcome::Succeeded, Ok(value))
            }
            Ok(Err(e)) => {
                // The error is data for the caller; only note it
                log::debug!("Worker {}: job {:?} returned an error", id, job.id());
                #[cfg(feature = "tracing")]
                crate::tracing::metrics::record_completion(elapsed, false);
                (Outcome::Failed, Err(JobError::Failed(e)))
            }
            Err(panic_info) => {
                let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Worker {}: job {:?} panicked: {}", id, job.id(), message);
                #[cfg(feature = "tracing")]
                crate::tracing::metrics::record_panic(elapsed);
                (Outcome::Panicked, Err(JobError::Panicked { message }))
            }
        };

        job.complete(id, elapsed, recorded);
        (outcome, elapsed)
    }
}
