//! Tracing integration for observability.
//!
//! With the `tracing` feature enabled, every [`Job`](crate::core::Job) captures
//! the span that is current when it is created. Workers execute the job inside
//! a `job_execution` span whose parent is that captured span, so work submitted
//! from inside a request span shows up under it even though it runs on a pool
//! thread.
//!
//! The [`metrics`] functions emit counter and gauge style events that can be
//! turned into metrics by a subscriber layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use rust_job_pool::prelude::*;
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env()
//!         .add_directive("rust_job_pool=trace".parse().unwrap()))
//!     .init();
//!
//! let pool: Pool<u32, u32> = Pool::new(4)?;
//! let request = tracing::info_span!("request", id = 7);
//! request.in_scope(|| pool.add(|n: &u32| Ok(n + 1), 41))?;
//! ```

/// Metrics recording functions for observability.
///
/// These functions emit tracing events that can be consumed by
/// metrics collection systems like Prometheus via tracing-opentelemetry.
#[cfg(feature = "tracing")]
pub mod metrics {
    use std::time::Duration;

    /// Records a job submission event.
    #[inline]
    pub fn record_submission(pending: u64) {
        tracing::trace!(
            counter.jobs_submitted = 1,
            gauge.jobs_pending = pending,
            "job submitted"
        );
    }

    /// Records job completion with timing.
    #[inline]
    pub fn record_completion(duration: Duration, success: bool) {
        let duration_ms = duration.as_millis() as u64;
        if success {
            tracing::trace!(
                counter.jobs_completed = 1,
                histogram.job_duration_ms = duration_ms,
                "job completed successfully"
            );
        } else {
            tracing::trace!(
                counter.jobs_failed = 1,
                histogram.job_duration_ms = duration_ms,
                "job returned an error"
            );
        }
    }

    /// Records a job panic event.
    #[inline]
    pub fn record_panic(duration: Duration) {
        tracing::trace!(
            counter.jobs_panicked = 1,
            histogram.job_duration_ms = duration.as_millis() as u64,
            "job panicked"
        );
    }

    /// Records worker becoming busy.
    #[inline]
    pub fn record_worker_busy(worker_id: usize) {
        tracing::trace!(gauge.workers_busy = 1, worker_id, "worker busy");
    }

    /// Records worker becoming idle.
    #[inline]
    pub fn record_worker_idle(worker_id: usize) {
        tracing::trace!(gauge.workers_busy = -1i64, worker_id, "worker idle");
    }

    /// Records pool startup.
    #[inline]
    pub fn record_pool_start(num_workers: usize, inbound: &str) {
        tracing::info!(workers = num_workers, inbound, "job pool started");
    }

    /// Records pool shutdown.
    #[inline]
    pub fn record_pool_shutdown(jobs_completed: u64, jobs_unsuccessful: u64) {
        tracing::info!(
            jobs_completed,
            jobs_unsuccessful,
            "job pool shutdown complete"
        );
    }
}
