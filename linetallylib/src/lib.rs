//! # linetallylib
//!
//! A line-count aggregator library that scans a directory tree, filters files
//! with glob patterns, counts newline bytes in each match, and groups the
//! totals by file extension or by containing directory.
//!
//! ## Overview
//!
//! Unlike language-aware LOC counters, this library counts raw newline bytes
//! (`0x0A`) with a fixed-size read buffer, so binary files and text files are
//! treated identically. The pipeline is:
//!
//! - **Discovery**: walk the tree, apply include/exclude globs plus a
//!   built-in exclusion list (VCS metadata, build output, binary artifacts)
//! - **Queue**: load every discovered path into a closed work queue
//! - **Workers**: a fixed pool drains the queue, each worker tallying into
//!   its own private map with its own read buffer
//! - **Merge**: each finished worker folds its tallies into the shared
//!   aggregate under one lock acquisition
//! - **Summary**: rows sorted by descending line count, ready for rendering
//!
//! ## Example
//!
//! ```rust
//! use linetallylib::{scan_directory, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "one\ntwo\n").unwrap();
//! fs::write(dir.path().join("b.rs"), "fn main() {}\n").unwrap();
//!
//! let report = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
//! assert_eq!(report.discovered, 2);
//!
//! let txt = report.rows.iter().find(|r| r.group == ".txt").unwrap();
//! assert_eq!(txt.files, 1);
//! assert_eq!(txt.lines, 2);
//! ```

pub mod aggregate;
pub mod counter;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod queue;
pub mod scanner;
pub mod stats;
pub mod worker;

pub use aggregate::Aggregator;
pub use counter::{count_newlines, count_newlines_with};
pub use error::LinetallyError;
pub use filter::{discover_files, Discovery, FilterConfig};
pub use grouping::Grouping;
pub use queue::WorkQueue;
pub use scanner::{scan_directory, scan_files, ScanOptions, ScanOutcome, ScanReport};
pub use stats::{build_summary, SummaryRow, Tally};
pub use worker::{Worker, WorkerReport};

/// Result type for linetallylib operations
pub type Result<T> = std::result::Result<T, LinetallyError>;
