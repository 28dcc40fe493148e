//! High-level scan API: discovery, the worker pool, and the merge barrier.
//!
//! This module provides the main entry points for running the pipeline.
//! The queue is filled once before any worker starts; a fixed pool of
//! workers drains it, each merging its private tallies into the shared
//! aggregate as it finishes; the summary is built only after every worker
//! has been joined.

use std::path::{Path, PathBuf};
use std::thread;

use crate::aggregate::Aggregator;
use crate::error::LinetallyError;
use crate::filter::{discover_files, FilterConfig};
use crate::grouping::Grouping;
use crate::queue::WorkQueue;
use crate::stats::{build_summary, SummaryRow};
use crate::worker::Worker;
use crate::Result;

/// Default read chunk size in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Options for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File filter configuration
    pub filter: FilterConfig,
    /// Grouping strategy for tally buckets
    pub grouping: Grouping,
    /// Read buffer size in bytes
    pub buffer_size: usize,
    /// Worker pool size (1 = sequential)
    pub threads: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            filter: FilterConfig::new(),
            grouping: Grouping::Extension,
            buffer_size: DEFAULT_BUFFER_SIZE,
            threads: 1,
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set the grouping strategy.
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the read buffer size.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the worker pool size.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Result of processing an already-discovered batch of files.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Summary rows, sorted by descending line count
    pub rows: Vec<SummaryRow>,
    /// Per-file failures collected from all workers
    pub errors: Vec<LinetallyError>,
}

/// Result of a full scan: discovery plus processing.
#[derive(Debug)]
pub struct ScanReport {
    /// Summary rows, sorted by descending line count
    pub rows: Vec<SummaryRow>,
    /// Number of files discovery produced
    pub discovered: usize,
    /// Walk and per-file failures, in the order encountered
    pub errors: Vec<LinetallyError>,
}

/// Process a batch of files through the worker pool.
///
/// Every path is queued before the first worker starts. Each worker owns
/// its buffer and private tallies and merges into the shared aggregate
/// exactly once, on completion. The same code path serves `threads == 1`;
/// thread count never changes the aggregate result.
pub fn scan_files(files: Vec<PathBuf>, options: &ScanOptions) -> Result<ScanOutcome> {
    if options.buffer_size == 0 {
        return Err(LinetallyError::InvalidBufferSize);
    }
    let threads = options.threads.max(1);
    let grouping = options.grouping;
    let buffer_size = options.buffer_size;

    let queue = WorkQueue::new(files);
    let aggregator = Aggregator::new();

    let errors: Vec<LinetallyError> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    let report = Worker::new(grouping, buffer_size).run(&queue);
                    aggregator.merge(report.tallies);
                    report.errors
                })
            })
            .collect();

        // Joining every handle is the merge barrier; the shared set is not
        // read before this completes
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker thread panicked"))
            .collect()
    });

    let rows = build_summary(aggregator.into_tallies());
    Ok(ScanOutcome { rows, errors })
}

/// Scan a directory tree end to end.
///
/// Discovers files per `options.filter`, processes them with
/// [`scan_files`], and returns the rows together with the discovered-file
/// count and every error collected along the way.
pub fn scan_directory(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanReport> {
    let discovery = discover_files(root, &options.filter)?;
    let discovered = discovery.files.len();
    let mut errors = discovery.errors;

    let outcome = scan_files(discovery.files, options)?;
    errors.extend(outcome.errors);

    Ok(ScanReport {
        rows: outcome.rows,
        discovered,
        errors,
    })
}
