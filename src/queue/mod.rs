//! Hand-off queues between submitters, workers and result consumers.
//!
//! A pool owns two queues built on crossbeam channels:
//!
//! - **inbound**: submitters → workers, carrying jobs waiting to run
//! - **outbound**: workers → result consumers, carrying finished jobs
//!
//! Both are MPMC and FIFO at the point of transfer. Their buffering is chosen
//! per queue with [`QueueCapacity`]:
//!
//! ```rust
//! use rust_job_pool::queue::QueueCapacity;
//!
//! assert_eq!(QueueCapacity::Unbounded.describe(), "unbounded");
//! assert_eq!(QueueCapacity::Bounded(8).describe(), "bounded(8)");
//! assert_eq!(QueueCapacity::Rendezvous.describe(), "rendezvous");
//! ```
//!
//! Closing a queue means dropping every sender. Receivers then drain whatever is
//! still buffered and report disconnection, which is what lets workers and
//! result consumers stop cleanly.

mod hand_off;

pub use hand_off::{hand_off, HandOff};

use crate::core::{PoolError, Result};

/// Buffering of a hand-off queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QueueCapacity {
    /// No buffer: a send completes only when a receiver takes the item
    Rendezvous,
    /// Buffer of at most `n` items; senders wait while it is full
    Bounded(usize),
    /// Senders never wait
    #[default]
    Unbounded,
}

impl QueueCapacity {
    /// Maximum number of buffered items, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        match self {
            QueueCapacity::Rendezvous => Some(0),
            QueueCapacity::Bounded(n) => Some(*n),
            QueueCapacity::Unbounded => None,
        }
    }

    /// Whether a send may wait for a receiver
    pub fn may_block(&self) -> bool {
        !matches!(self, QueueCapacity::Unbounded)
    }

    /// Human-readable form used in logs
    pub fn describe(&self) -> String {
        match self {
            QueueCapacity::Rendezvous => "rendezvous".to_string(),
            QueueCapacity::Bounded(n) => format!("bounded({})", n),
            QueueCapacity::Unbounded => "unbounded".to_string(),
        }
    }

    /// Reject a zero-sized bounded buffer, which is spelled `Rendezvous`
    pub fn validate(&self, parameter: &str) -> Result<()> {
        if let QueueCapacity::Bounded(0) = self {
            return Err(PoolError::invalid_config(
                parameter,
                "Bounded(0) is not a buffer; use QueueCapacity::Rendezvous",
            ));
        }
        Ok(())
    }
}
