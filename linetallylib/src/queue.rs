//! Closed work queue drained concurrently by the worker pool.

use std::path::PathBuf;

use crossbeam_channel::{unbounded, Receiver};

/// A thread-safe FIFO of discovered file paths.
///
/// The queue is filled once at construction and never replenished; the
/// sending side is dropped immediately, so `try_dequeue` never blocks and
/// returns `None` exactly when the batch is exhausted. The channel
/// guarantees each path is delivered to at most one caller.
pub struct WorkQueue {
    rx: Receiver<PathBuf>,
}

impl WorkQueue {
    /// Build a queue holding the whole batch of paths.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let (tx, rx) = unbounded();
        for path in paths {
            tx.send(path).expect("receiver is held for the queue lifetime");
        }
        Self { rx }
    }

    /// Take one path, or `None` when the queue is permanently empty.
    pub fn try_dequeue(&self) -> Option<PathBuf> {
        self.rx.try_recv().ok()
    }

    /// Number of paths still queued.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether the queue has been drained.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
