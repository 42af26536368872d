//! Convenient re-exports for common types

pub use crate::args;
pub use crate::core::{id, ArgError, Args, BoxError, IdGenerator, Job, JobError, PoolError, Result};
pub use crate::pool::{
    DynPool, DynValue, Pool, PoolConfig, PoolStats, WorkerState, WorkerStats,
};
pub use crate::queue::QueueCapacity;
