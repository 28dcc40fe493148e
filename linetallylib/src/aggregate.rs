//! Merging per-worker tallies into the shared result set.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::stats::Tally;

/// Owns the shared tally set during the merge phase.
///
/// Each finishing worker calls [`merge`](Aggregator::merge) once; the whole
/// private set lands inside a single critical section, so concurrent merges
/// cannot interleave partial key updates or lose counts. The shared set is
/// read only after every worker has been joined.
#[derive(Debug, Default)]
pub struct Aggregator {
    shared: Mutex<HashMap<String, Tally>>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one worker's private tallies into the shared set.
    pub fn merge(&self, private: HashMap<String, Tally>) {
        let mut shared = self.shared.lock().expect("aggregator mutex poisoned");
        for (key, tally) in private {
            *shared.entry(key).or_default() += tally;
        }
    }

    /// Consume the aggregator and return the merged tallies.
    pub fn into_tallies(self) -> HashMap<String, Tally> {
        self.shared.into_inner().expect("aggregator mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn private(key: &str, files: u64, lines: u64) -> HashMap<String, Tally> {
        let mut map = HashMap::new();
        map.insert(key.to_string(), Tally { files, lines });
        map
    }

    #[test]
    fn test_merge_creates_missing_keys() {
        let aggregator = Aggregator::new();
        aggregator.merge(private(".txt", 2, 10));

        let tallies = aggregator.into_tallies();
        assert_eq!(tallies[".txt"], Tally { files: 2, lines: 10 });
    }

    #[test]
    fn test_merge_adds_onto_existing_keys() {
        let aggregator = Aggregator::new();
        aggregator.merge(private(".txt", 2, 10));
        aggregator.merge(private(".txt", 1, 5));

        let tallies = aggregator.into_tallies();
        assert_eq!(tallies[".txt"], Tally { files: 3, lines: 15 });
    }

    #[test]
    fn test_concurrent_merges_lose_nothing() {
        let aggregator = Aggregator::new();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        aggregator.merge(private(".rs", 1, 3));
                    }
                });
            }
        });

        let tallies = aggregator.into_tallies();
        assert_eq!(tallies[".rs"], Tally { files: 800, lines: 2400 });
    }
}
