//! Core data structures for grouped line-count statistics

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// File and line counts for one group.
///
/// `files` counts every file routed to the group, including files whose
/// read later failed; `lines` sums only successful newline counts. File
/// presence and read success are tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Number of files routed to this group
    pub files: u64,
    /// Sum of newline counts of the successfully read files
    pub lines: u64,
}

impl Tally {
    /// Create a new zeroed tally
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            lines: self.lines + other.lines,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.lines += other.lines;
    }
}

/// One row of the final summary, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Group key (extension or directory)
    pub group: String,
    /// Number of files in the group
    pub files: u64,
    /// Total newline count of the group
    pub lines: u64,
}

/// Build the ordered summary from merged tallies.
///
/// One row per group, sorted by descending line count. The sort is stable;
/// order among equal line counts follows map iteration and is unspecified.
pub fn build_summary(tallies: HashMap<String, Tally>) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = tallies
        .into_iter()
        .map(|(group, tally)| SummaryRow {
            group,
            files: tally.files,
            lines: tally.lines,
        })
        .collect();

    rows.sort_by(|a, b| b.lines.cmp(&a.lines));
    rows
}
