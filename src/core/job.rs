//! Job type: a unit of work, its bound arguments and its recorded outcome

use crate::core::error::{BoxError, JobError};
use std::fmt;
use std::time::Duration;

/// The callable carried by a job
///
/// It borrows the job's arguments so they stay on the job and can be inspected
/// by whoever retrieves the result.
pub type JobFn<A, T, E> = Box<dyn FnOnce(&A) -> std::result::Result<T, E> + Send + 'static>;

/// One unit of submitted work plus its eventual result or error
///
/// A job is owned by exactly one party at a time: the submitter until it is
/// queued, a single worker while it runs, and finally the caller that takes it
/// from [`Pool::result`](crate::pool::Pool::result). The hand-off channels move
/// it by value, so no locking is involved.
pub struct Job<A, T, E = BoxError> {
    id: Option<String>,
    args: A,
    work: Option<JobFn<A, T, E>>,
    result: Option<T>,
    error: Option<JobError<E>>,
    worker_id: Option<usize>,
    elapsed: Option<Duration>,
    #[cfg(feature = "tracing")]
    span: tracing::Span,
}

impl<A, T, E> Job<A, T, E> {
    /// Create a job binding `work` to `args`
    pub fn new<F>(work: F, args: A) -> Self
    where
        F: FnOnce(&A) -> std::result::Result<T, E> + Send + 'static,
    {
        Self {
            id: None,
            args,
            work: Some(Box::new(work)),
            result: None,
            error: None,
            worker_id: None,
            elapsed: None,
            #[cfg(feature = "tracing")]
            span: tracing::Span::current(),
        }
    }

    /// Identifier assigned at submission, if an id generator was installed
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Arguments bound at submission
    pub fn args(&self) -> &A {
        &self.args
    }

    /// Value produced by the work, if it succeeded
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Error recorded for the work, if it failed or panicked
    pub fn error(&self) -> Option<&JobError<E>> {
        self.error.as_ref()
    }

    /// Whether the job ran and produced a value
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the job has been run by a worker
    pub fn is_executed(&self) -> bool {
        self.work.is_none()
    }

    /// Worker that executed the job
    pub fn worker_id(&self) -> Option<usize> {
        self.worker_id
    }

    /// Time spent inside the work
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Take the outcome, discarding the metadata
    pub fn into_result(self) -> std::result::Result<T, JobError<E>> {
        self.into_parts().2
    }

    /// Split the job into its id, arguments and outcome
    pub fn into_parts(self) -> (Option<String>, A, std::result::Result<T, JobError<E>>) {
        let outcome = match (self.result, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(err)) => Err(err),
            (None, None) => Err(JobError::NotExecuted),
        };
        (self.id, self.args, outcome)
    }

    /// Id is set once, before the job is queued
    pub(crate) fn assign_id(&mut self, id: String) {
        debug_assert!(self.id.is_none(), "job id assigned twice");
        self.id = Some(id);
    }

    /// Take the callable out for execution; `None` if it already ran
    pub(crate) fn take_work(&mut self) -> Option<JobFn<A, T, E>> {
        self.work.take()
    }

    /// Record the outcome of the run
    pub(crate) fn complete(
        &mut self,
        worker_id: usize,
        elapsed: Duration,
        outcome: std::result::Result<T, JobError<E>>,
    ) {
        self.worker_id = Some(worker_id);
        self.elapsed = Some(elapsed);
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(err) => self.error = Some(err),
        }
    }

    #[cfg(feature = "tracing")]
    pub(crate) fn span(&self) -> &tracing::Span {
        &self.span
    }
}

impl<A: fmt::Debug, T: fmt::Debug, E: fmt::Debug> fmt::Debug for Job<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("args", &self.args)
            .field("executed", &self.is_executed())
            .field("result", &self.result)
            .field("error", &self.error)
            .field("worker_id", &self.worker_id)
            .field("elapsed", &self.elapsed)
            .finish()
    }
}
