//! Frequency tally and most-frequent-value selection
//!
//! Sprint 1-2: Tally core
//! Sprint 3: Summary table for -c mode

use std::collections::HashMap;

use thiserror::Error;

/// Errors for tally selection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// No maximum exists for an empty input, so selection fails rather
    /// than returning a sentinel.
    #[error("cannot select a most frequent value from empty input")]
    EmptyInput,
}

/// Occurrence record for a single distinct value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStats {
    /// Number of times this value was recorded
    pub count: u64,
    /// Rank assigned when the value was first recorded (0-based)
    pub first_seen: usize,
}

/// The most frequent value and its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub value: String,
    pub count: u64,
}

/// Tracks occurrence counts for every distinct value in a stream
///
/// Values are ranked at first encounter, so iteration over [`entries`]
/// follows input order no matter how the backing map hashes. Ties on the
/// maximum count resolve to the value seen first.
///
/// [`entries`]: FrequencyTally::entries
#[derive(Debug, Default)]
pub struct FrequencyTally {
    /// Map from value to its occurrence record
    stats: HashMap<String, ValueStats>,
    /// Total number of recorded values (including repeats)
    recorded: u64,
}

impl FrequencyTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a value
    pub fn record(&mut self, value: &str) {
        let next_rank = self.stats.len();
        let entry = self
            .stats
            .entry(value.to_string())
            .or_insert_with(|| ValueStats {
                count: 0,
                first_seen: next_rank,
            });
        entry.count += 1;
        self.recorded += 1;
    }

    /// Record every value yielded by an iterator, in order
    pub fn record_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.record(value.as_ref());
        }
    }

    /// Total number of recorded values, counting repeats
    pub fn total(&self) -> u64 {
        self.recorded
    }

    /// Number of distinct values recorded
    pub fn distinct(&self) -> usize {
        self.stats.len()
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Get access to the stats map for export
    pub fn stats_map(&self) -> &HashMap<String, ValueStats> {
        &self.stats
    }

    /// Distinct values with their records, in first-seen order
    pub fn entries(&self) -> Vec<(&str, &ValueStats)> {
        let mut entries: Vec<_> = self.stats.iter().map(|(v, s)| (v.as_str(), s)).collect();
        entries.sort_by_key(|(_, s)| s.first_seen);
        entries
    }

    /// Distinct values sorted by descending count, first-seen order on ties
    pub fn sorted_by_count(&self) -> Vec<(&str, &ValueStats)> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first_seen.cmp(&b.1.first_seen)));
        entries
    }

    /// Select the most frequent value and its count
    ///
    /// Scans distinct values in first-seen order and keeps the running
    /// maximum only on a strictly greater count, so the first value to
    /// reach the maximum wins ties.
    pub fn most_frequent(&self) -> Result<Mode, TallyError> {
        let mut best: Option<(&str, u64)> = None;
        for (value, stats) in self.entries() {
            let better = match best {
                None => true,
                Some((_, count)) => stats.count > count,
            };
            if better {
                best = Some((value, stats.count));
            }
        }
        best.map(|(value, count)| Mode {
            value: value.to_string(),
            count,
        })
        .ok_or(TallyError::EmptyInput)
    }

    /// Render the frequency table for -c mode
    ///
    /// Columns match the strace summary layout: percent share, call count,
    /// value, with a totals line at the bottom. `top` limits the table to
    /// the N most frequent values.
    pub fn format_summary(&self, top: Option<usize>) -> String {
        let mut out = String::new();

        if self.is_empty() {
            out.push_str("No values tallied.\n");
            return out;
        }

        let total = self.recorded;
        let mut entries = self.sorted_by_count();
        let shown = entries.len();
        if let Some(n) = top {
            entries.truncate(n);
        }

        out.push_str(" share     count  value\n");
        out.push_str("------ --------- ----------------\n");

        for (value, stats) in &entries {
            let share = (stats.count as f64 / total as f64) * 100.0;
            out.push_str(&format!("{:6.2} {:>9}  {}\n", share, stats.count, value));
        }

        out.push_str("------ --------- ----------------\n");
        let suppressed = shown - entries.len();
        if suppressed > 0 {
            out.push_str(&format!(
                "100.00 {:>9}  total ({} distinct, {} not shown)\n",
                total,
                self.distinct(),
                suppressed
            ));
        } else {
            out.push_str(&format!(
                "100.00 {:>9}  total ({} distinct)\n",
                total,
                self.distinct()
            ));
        }

        out
    }

    /// Print the frequency table to stdout
    pub fn print_summary(&self, top: Option<usize>) {
        print!("{}", self.format_summary(top));
    }
}
