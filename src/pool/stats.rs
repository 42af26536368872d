//! Pool-wide job counters.
//!
//! Counters are updated with independent atomic operations. A [`PoolStats`]
//! snapshot reads them one by one, so it is only eventually consistent: while
//! jobs are moving, `pending + running + completed` may briefly differ from
//! `submitted`. Use the snapshot for observability, not to decide when work is
//! finished.

use crossbeam_utils::CachePadded;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of the pool counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Jobs accepted by `add` (monotonic)
    pub submitted: u64,
    /// Submitted but not yet picked up by a worker
    pub pending: u64,
    /// Picked up by a worker and still executing
    pub running: u64,
    /// Finished executing, whatever the outcome (monotonic)
    pub completed: u64,
    /// Completed jobs whose work returned an error
    pub failed: u64,
    /// Completed jobs whose work panicked
    pub panicked: u64,
    /// Completed jobs handed to a caller by `result` (monotonic)
    pub retrieved: u64,
}

impl PoolStats {
    /// Jobs not yet finished executing
    pub fn in_flight(&self) -> u64 {
        self.pending + self.running
    }

    /// Jobs submitted but not yet retrieved
    pub fn outstanding(&self) -> u64 {
        self.submitted.saturating_sub(self.retrieved)
    }

    /// Completed jobs that ended in an error or panic
    pub fn unsuccessful(&self) -> u64 {
        self.failed + self.panicked
    }

    /// Whether nothing is queued or executing and every submission completed
    pub fn is_quiescent(&self) -> bool {
        self.pending == 0 && self.running == 0 && self.submitted == self.completed
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Shared, lock-free counters behind [`PoolStats`]
#[derive(Debug, Default)]
pub struct AtomicPoolStats {
    submitted: CachePadded<AtomicU64>,
    pending: CachePadded<AtomicU64>,
    running: CachePadded<AtomicU64>,
    completed: CachePadded<AtomicU64>,
    failed: AtomicU64,
    panicked: AtomicU64,
    retrieved: CachePadded<AtomicU64>,
}

impl AtomicPoolStats {
    /// Creates zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// A job is about to enter the inbound queue
    pub fn record_submission(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        self.pending.fetch_add(1, Ordering::Relaxed);
    }

    /// The inbound queue refused a job that was counted as submitted
    pub fn revert_submission(&self) {
        self.pending.fetch_sub(1, Ordering::Relaxed);
        self.submitted.fetch_sub(1, Ordering::Relaxed);
    }

    /// A worker took a job: pending → running
    pub fn record_start(&self) {
        self.pending.fetch_sub(1, Ordering::Relaxed);
        self.running.fetch_add(1, Ordering::Relaxed);
    }

    /// A worker finished a job: running → completed
    pub fn record_finish(&self, outcome: Outcome) {
        match outcome {
            Outcome::Succeeded => {}
            Outcome::Failed => {
                self.failed.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Panicked => {
                self.panicked.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.running.fetch_sub(1, Ordering::Relaxed);
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// A caller took a completed job
    pub fn record_retrieval(&self) {
        self.retrieved.fetch_add(1, Ordering::Relaxed);
    }

    /// Jobs submitted but not yet retrieved
    pub fn outstanding(&self) -> u64 {
        let retrieved = self.retrieved.load(Ordering::Relaxed);
        self.submitted
            .load(Ordering::Relaxed)
            .saturating_sub(retrieved)
    }

    /// Returns a snapshot of the current counters
    pub fn snapshot(&self) -> PoolStats {
        PoolStats {
            submitted: self.submitted.load(Ordering::Relaxed),
            pending: self.pending.load(Ordering::Relaxed),
            running: self.running.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            panicked: self.panicked.load(Ordering::Relaxed),
            retrieved: self.retrieved.load(Ordering::Relaxed),
        }
    }
}

/// How a job's execution ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The work returned a value
    Succeeded,
    /// The work returned an error
    Failed,
    /// The work panicked
    Panicked,
}
