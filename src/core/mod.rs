//! Core types for the job pool

pub mod args;
pub mod error;
pub mod id;
pub mod job;

pub use args::Args;
pub use error::{ArgError, BoxError, JobError, PoolError, Result};
pub use id::IdGenerator;
pub use job::{Job, JobFn};
