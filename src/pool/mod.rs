//! Job pool and worker implementations

pub mod config;
pub mod job_pool;
pub mod stats;
pub mod worker;

pub use config::PoolConfig;
pub use job_pool::{Pool, Results};
pub use stats::{AtomicPoolStats, Outcome, PoolStats};
pub use worker::{Worker, WorkerState, WorkerStats};

use crate::core::{Args, BoxError};
use std::any::Any;

/// Result value of a dynamically typed job
pub type DynValue = Box<dyn Any + Send>;

/// Pool whose jobs take positional [`Args`] and return any value
///
/// Work functions read their arguments with [`Args::get`], which reports a
/// type mismatch as an error instead of panicking.
pub type DynPool = Pool<Args, DynValue, BoxError>;
