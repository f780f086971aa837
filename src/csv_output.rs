//! CSV output format for frequency reports
//!
//! Sprint 4: --format csv for spreadsheet analysis and machine parsing

use crate::tally::FrequencyTally;

/// CSV record for a single frequency-table row
#[derive(Debug, Clone)]
pub struct CsvEntry {
    pub value: String,
    pub count: u64,
    pub share_percent: f64,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvReport {
    entries: Vec<CsvEntry>,
}

impl CsvReport {
    /// Create an empty CSV report
    pub fn new() -> Self {
        Self::default()
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
            report.entries.push(CsvEntry {
                value: value.to_string(),
                count: stats.count,
                share_percent: (stats.count as f64 / total as f64) * 100.0,
            });
        }

        report
    }

    /// Add a row
    pub fn add_entry(&mut self, entry: CsvEntry) {
        self.entries.push(entry);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str("value,count,share_percent\n");

        for entry in &self.entries {
            output.push_str(&Self::escape_field(&entry.value));
            output.push(',');
            output.push_str(&entry.count.to_string());
            output.push(',');
            output.push_str(&format!("{:.2}", entry.share_percent));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(values: &[&str]) -> FrequencyTally {
        let mut tally = FrequencyTally::new();
        tally.record_all(values);
        tally
    }

    #[test]
    fn test_csv_header() {
        let report = CsvReport::new();
        assert_eq!(report.to_csv(), "value,count,share_percent\n");
    }

    #[test]
    fn test_csv_escape_field_simple() {
        assert_eq!(CsvReport::escape_field("hello"), "hello");
    }

    #[test]
    fn test_csv_escape_field_with_comma() {
        assert_eq!(CsvReport::escape_field("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_csv_escape_field_with_quote() {
        assert_eq!(CsvReport::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_rows_sorted_by_count() {
        let csv = CsvReport::from_tally(&tally_of(&["b", "a", "a"]), None).to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "value,count,share_percent");
        assert_eq!(lines[1], "a,2,66.67");
        assert_eq!(lines[2], "b,1,33.33");
    }

    #[test]
    fn test_csv_value_with_delimiter_is_quoted() {
        let mut report = CsvReport::new();
        report.add_entry(CsvEntry {
            value: "a,b".to_string(),
            count: 2,
            share_percent: 100.0,
        });

        let csv = report.to_csv();
        assert!(csv.contains("\"a,b\",2,100.00"));
    }

    #[test]
    fn test_csv_top_limits_rows() {
        let csv = CsvReport::from_tally(&tally_of(&["a", "a", "b", "c"]), Some(1)).to_csv();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("a,2,50.00"));
    }
}
