//! Channel construction for the hand-off queues.

use super::QueueCapacity;
use crossbeam::channel::{self, Receiver, Sender};

/// Both ends of a hand-off queue
#[derive(Debug)]
pub struct HandOff<T> {
    /// Sending half; the queue closes once every clone is dropped
    pub sender: Sender<T>,
    /// Receiving half
    pub receiver: Receiver<T>,
}

/// Create a hand-off queue with the given buffering
///
/// # Example
///
/// ```rust
/// use rust_job_pool::queue::{hand_off, QueueCapacity};
///
/// let queue = hand_off::<u32>(QueueCapacity::Bounded(2));
/// queue.sender.send(1).unwrap();
/// queue.sender.send(2).unwrap();
/// assert!(queue.sender.try_send(3).is_err());
/// assert_eq!(queue.receiver.recv().unwrap(), 1);
/// ```
pub fn hand_off<T>(capacity: QueueCapacity) -> HandOff<T> {
    let (sender, receiver) = match capacity {
        QueueCapacity::Rendezvous => channel::bounded(0),
        QueueCapacity::Bounded(n) => channel::bounded(n),
        QueueCapacity::Unbounded => channel::unbounded(),
    };
    HandOff { sender, receiver }
}
