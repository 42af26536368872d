//! # Rust Job Pool
//!
//! A bounded-concurrency job pool: a fixed set of worker threads runs submitted
//! work functions and hands each finished job back to the caller.
//!
//! ## Features
//!
//! - **Fixed Workers**: N worker threads started at construction, never more
//! - **Hand-off Queues**: rendezvous, bounded or unbounded crossbeam channels
//! - **Errors as Data**: a failing or panicking job comes back like any other
//! - **Job Ids**: optional id generator applied at submission
//! - **Statistics**: lock-free pool counters and per-worker statistics
//! - **Graceful Shutdown**: drain submitted work, then close the result queue
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_job_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool: Pool<u64, u64> = Pool::new(2)?;
//!
//! for n in 1..=4 {
//!     pool.add(|n: &u64| Ok(n * 2), n)?;
//! }
//!
//! // Results arrive in completion order
//! let mut doubled = Vec::new();
//! for _ in 0..4 {
//!     let job = pool.result()?;
//!     doubled.push(*job.result().expect("doubling never fails"));
//! }
//! doubled.sort();
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! pool.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Failures and Job Ids
//!
//! ```rust
//! use rust_job_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let pool: Pool<i32, i32, String> = Pool::new(2)?;
//! pool.set_id_generator(id::sequential_with_prefix("req"));
//!
//! pool.add(
//!     |n: &i32| if *n < 0 { Err(format!("negative input {}", n)) } else { Ok(*n) },
//!     -1,
//! )?;
//!
//! let job = pool.result()?;
//! assert_eq!(job.id(), Some("req-1"));
//! assert!(matches!(job.error(), Some(JobError::Failed(msg)) if msg == "negative input -1"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pool Configuration
//!
//! ```rust
//! use rust_job_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = PoolConfig::new(8)
//!     .with_inbound(QueueCapacity::Bounded(1000))
//!     .with_name("fetchers")
//!     .with_thread_name_prefix("fetch");
//!
//! let pool: Pool<String, usize> = Pool::with_config(config)?;
//! # pool.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Dynamic Arguments
//!
//! ```rust
//! use rust_job_pool::{args, prelude::*};
//!
//! # fn main() -> Result<()> {
//! let pool = DynPool::new(2)?;
//! pool.add(
//!     |a: &Args| {
//!         let name: &String = a.get(0)?;
//!         let times: &usize = a.get(1)?;
//!         Ok(Box::new(name.repeat(*times)) as DynValue)
//!     },
//!     args!["ab".to_string(), 3usize],
//! )?;
//!
//! let value = pool.result()?.into_result().expect("arguments match");
//! assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("ababab"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Statistics
//!
//! ```rust
//! use rust_job_pool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! # let pool: Pool<(), ()> = Pool::new(2)?;
//! # for _ in 0..10 {
//! #     pool.add(|_| Ok(()), ())?;
//! # }
//! # for _ in 0..10 {
//! #     pool.result()?;
//! # }
//! let stats = pool.stats();
//! println!("{} submitted, {} completed", stats.submitted, stats.completed);
//!
//! for (i, worker) in pool.worker_stats().iter().enumerate() {
//!     println!("Worker {}: {} jobs processed", i, worker.get_jobs_processed());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod pool;
pub mod prelude;
pub mod queue;
pub mod tracing;

pub use crate::core::{ArgError, Args, BoxError, IdGenerator, Job, JobError, PoolError, Result};
pub use crate::pool::{DynPool, DynValue, Pool, PoolConfig, PoolStats, WorkerState, WorkerStats};
pub use crate::queue::QueueCapacity;
