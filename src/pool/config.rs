//! Pool configuration

use crate::core::{IdGenerator, PoolError, Result};
use crate::queue::QueueCapacity;
use std::sync::Arc;

/// Configuration for a job pool
#[derive(Clone)]
pub struct PoolConfig {
    /// Number of worker threads, fixed for the pool's lifetime
    pub num_workers: usize,
    /// Buffering of the submitter → worker queue.
    /// Default: unbounded, so submission never waits on workers
    pub inbound: QueueCapacity,
    /// Buffering of the worker → result consumer queue.
    /// Default: unbounded, so workers never wait on consumers
    pub outbound: QueueCapacity,
    /// Pool name used in logs and errors
    pub name: String,
    /// Thread name prefix
    pub thread_name_prefix: String,
    /// Id generator installed at construction
    id_generator: Option<IdGenerator>,
}

impl std::fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolConfig")
            .field("num_workers", &self.num_workers)
            .field("inbound", &self.inbound)
            .field("outbound", &self.outbound)
            .field("name", &self.name)
            .field("thread_name_prefix", &self.thread_name_prefix)
            .field(
                "id_generator",
                &self.id_generator.as_ref().map(|_| "<id generator>"),
            )
            .finish()
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            inbound: QueueCapacity::Unbounded,
            outbound: QueueCapacity::Unbounded,
            name: "pool".to_string(),
            thread_name_prefix: "pool-worker".to_string(),
            id_generator: None,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with the given number of workers
    ///
    /// Zero is accepted here and rejected by [`validate`](Self::validate), so a
    /// pool is never built without workers.
    #[must_use]
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            ..Default::default()
        }
    }

    /// Tight hand-off layout: submissions go directly to an idle worker, and
    /// finished jobs buffer up to one per worker.
    ///
    /// With this layout a caller that submits everything before reading results
    /// can block once more than `2 * num_workers` jobs are outstanding.
    #[must_use]
    pub fn handshake(num_workers: usize) -> Self {
        Self::new(num_workers)
            .with_inbound(QueueCapacity::Rendezvous)
            .with_outbound(QueueCapacity::Bounded(num_workers.max(1)))
    }

    /// Set inbound queue buffering
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_inbound(mut self, capacity: QueueCapacity) -> Self {
        self.inbound = capacity;
        self
    }

    /// Set outbound queue buffering
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_outbound(mut self, capacity: QueueCapacity) -> Self {
        self.outbound = capacity;
        self
    }

    /// Set pool name
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set thread name prefix
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Install an id generator, called once per submitted job
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_id_func<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.id_generator = Some(Arc::new(generator));
        self
    }

    /// Install a shared id generator such as [`id::sequential`](crate::core::id::sequential)
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_id_generator(mut self, generator: IdGenerator) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Unread jobs the pool can hold before `add` may block indefinitely
    ///
    /// `None` when either queue can always make progress: an unbounded inbound
    /// queue never blocks submitters, and an unbounded outbound queue lets
    /// workers keep draining the inbound one. Otherwise it is one job per
    /// worker plus both buffers.
    pub fn max_unread(&self) -> Option<usize> {
        if !(self.inbound.may_block() && self.outbound.may_block()) {
            return None;
        }
        Some(self.num_workers + self.inbound.limit()? + self.outbound.limit()?)
    }

    pub(crate) fn id_generator(&self) -> Option<IdGenerator> {
        self.id_generator.clone()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            return Err(PoolError::invalid_config(
                "num_workers",
                "Number of workers must be greater than 0",
            ));
        }
        self.inbound.validate("inbound")?;
        self.outbound.validate("outbound")?;
        Ok(())
    }
}
