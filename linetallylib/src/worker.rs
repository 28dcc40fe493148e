//! A single unit of concurrent execution draining the work queue.

use std::collections::HashMap;

use crate::counter::count_newlines_with;
use crate::error::LinetallyError;
use crate::grouping::Grouping;
use crate::queue::WorkQueue;
use crate::stats::Tally;

/// What one worker produced: its private tallies plus the per-file errors
/// it ran into. Neither is shared while the worker runs.
#[derive(Debug, Default)]
pub struct WorkerReport {
    /// Tallies accumulated by this worker alone
    pub tallies: HashMap<String, Tally>,
    /// Per-file failures; these never abort the batch
    pub errors: Vec<LinetallyError>,
}

/// A worker owns one read buffer and one private tally set for its whole
/// run. It dequeues until the queue reports empty, then hands back its
/// report for merging.
pub struct Worker {
    grouping: Grouping,
    buffer: Vec<u8>,
    tallies: HashMap<String, Tally>,
    errors: Vec<LinetallyError>,
}

impl Worker {
    /// Create a worker with its own buffer of `buffer_size` bytes.
    pub fn new(grouping: Grouping, buffer_size: usize) -> Self {
        Self {
            grouping,
            buffer: vec![0u8; buffer_size],
            tallies: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Drain the queue. For every path the group's file count is bumped
    /// before the read is attempted, so a file that vanished between
    /// discovery and read still registers in `files` while contributing no
    /// lines.
    pub fn run(mut self, queue: &WorkQueue) -> WorkerReport {
        while let Some(path) = queue.try_dequeue() {
            let key = self.grouping.key_for(&path);
            let tally = self.tallies.entry(key).or_default();
            tally.files += 1;

            match count_newlines_with(&path, &mut self.buffer) {
                Ok(lines) => tally.lines += lines,
                Err(e) => self.errors.push(e),
            }
        }

        WorkerReport {
            tallies: self.tallies,
            errors: self.errors,
        }
    }
}
