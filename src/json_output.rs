//! JSON output format for frequency reports
//!
//! Sprint 4: --format json implementation

use serde::{Deserialize, Serialize};

use crate::tally::FrequencyTally;

/// A single frequency-table entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEntry {
    /// The tallied value
    pub value: String,
    /// Number of occurrences
    pub count: u64,
    /// Share of the total input, in percent
    pub share_percent: f64,
}

/// The most frequent value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMode {
    pub value: String,
    pub count: u64,
}

/// Summary statistics for the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total number of tallied values
    pub total_values: u64,
    /// Number of distinct values
    pub distinct_values: u64,
    /// Most frequent value (absent for an empty report)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<JsonMode>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Frequency entries, most frequent first
    pub entries: Vec<JsonEntry>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Create an empty JSON report
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "moda-json-v1".to_string(),
            entries: Vec::new(),
            summary: JsonSummary {
                total_values: 0,
                distinct_values: 0,
                mode: None,
            },
        }
    }

    /// Build a report from a tally, limited to the `top` most frequent entries
    pub fn from_tally(tally: &FrequencyTally, top: Option<usize>) -> Self {
        let mut report = Self::new();
        let total = tally.total();

        let mut sorted = tally.sorted_by_count();
        if let Some(n) = top {
            sorted.truncate(n);
        }

        for (value, stats) in sorted {
            report.entries.push(JsonEntry {
                value: value.to_string(),
                count: stats.count,
                share_percent: (stats.count as f64 / total as f64) * 100.0,
            });
        }

        report.summary.total_values = total;
        report.summary.distinct_values = tally.distinct() as u64;
        report.summary.mode = tally.most_frequent().ok().map(|mode| JsonMode {
            value: mode.value,
            count: mode.count,
        });

        report
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}
