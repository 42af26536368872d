//! Error types for the job pool

/// Result type for pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Boxed error used as the default job error type
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the pool itself (construction, submission, retrieval, teardown)
///
/// Failures of the submitted work are not pool errors: they are recorded on the
/// job as a [`JobError`] and handed back through [`Pool::result`].
///
/// [`Pool::result`]: crate::pool::Pool::result
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PoolError {
    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// Failed to spawn a worker thread
    #[error("Failed to spawn worker thread #{worker_id}: {message}")]
    SpawnError {
        /// ID of the worker that failed to spawn
        worker_id: usize,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to join a worker thread
    #[error("Failed to join worker thread #{worker_id}: {message}")]
    JoinError {
        /// ID of the worker that failed to join
        worker_id: usize,
        /// Error message
        message: String,
    },

    /// The pool has been shut down: no more submissions, and no more results
    /// once the completed jobs have been drained
    #[error("Job pool '{pool_name}' is closed")]
    Closed {
        /// Name of the pool
        pool_name: String,
    },

    /// No completed job arrived within the requested wait
    #[error("No result available after {timeout_ms}ms")]
    ResultTimeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// A job that already ran was submitted again
    #[error("Job has already been executed and cannot be resubmitted")]
    JobAlreadyExecuted {
        /// Id the job was given on its first submission, if any
        job_id: Option<String>,
    },

    /// General error
    #[error("{0}")]
    Other(String),
}

impl PoolError {
    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        PoolError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(
        worker_id: usize,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PoolError::SpawnError {
            worker_id,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a join error
    pub fn join(worker_id: usize, message: impl Into<String>) -> Self {
        PoolError::JoinError {
            worker_id,
            message: message.into(),
        }
    }

    /// Create a closed error
    pub fn closed(pool_name: impl Into<String>) -> Self {
        PoolError::Closed {
            pool_name: pool_name.into(),
        }
    }

    /// Create a result timeout error
    pub fn result_timeout(timeout_ms: u64) -> Self {
        PoolError::ResultTimeout { timeout_ms }
    }

    /// Create an already-executed error
    pub fn job_already_executed(job_id: Option<&str>) -> Self {
        PoolError::JobAlreadyExecuted {
            job_id: job_id.map(str::to_string),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PoolError::Other(msg.into())
    }

    /// Whether this error means the pool will never yield anything again
    pub fn is_closed(&self) -> bool {
        matches!(self, PoolError::Closed { .. })
    }
}

/// Failure recorded on a job by the worker that ran it
#[derive(Debug, thiserror::Error)]
pub enum JobError<E> {
    /// The work returned an error
    #[error("{0}")]
    Failed(E),

    /// The work panicked; the worker recovered and kept running
    #[error("job panicked: {message}")]
    Panicked {
        /// Panic payload rendered as text
        message: String,
    },

    /// The job carries neither a result nor an error
    #[error("job has not been executed")]
    NotExecuted,
}

impl<E> JobError<E> {
    /// The error returned by the work, if that is what happened
    pub fn as_failed(&self) -> Option<&E> {
        match self {
            JobError::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the work panicked
    pub fn is_panic(&self) -> bool {
        matches!(self, JobError::Panicked { .. })
    }

    /// Consume and return the work's own error, if any
    pub fn into_failed(self) -> Option<E> {
        match self {
            JobError::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors from typed access to dynamic [`Args`](crate::core::Args)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// Fewer arguments were bound than the work expects
    #[error("argument #{index} missing ({len} bound)")]
    Missing {
        /// Requested position
        index: usize,
        /// Number of bound arguments
        len: usize,
    },

    /// The argument exists but has a different type
    #[error("argument #{index} is not a {expected}")]
    TypeMismatch {
        /// Requested position
        index: usize,
        /// Name of the requested type
        expected: &'static str,
    },
}
