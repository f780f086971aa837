//! Count-distribution statistics for --stats-extended
//!
//! Sprint 6: SIMD-accelerated aggregates via Trueno

use crate::tally::FrequencyTally;

/// Aggregate totals for a tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyTotals {
    pub total_values: u64,
    pub distinct_values: u64,
}

/// Distribution of occurrence counts across distinct values
#[derive(Debug, Clone, PartialEq)]
pub struct CountDistribution {
    pub mean: f32,
    pub stddev: f32,
    pub min: f32,
    pub max: f32,
    pub median: f32, // P50
    pub p90: f32,
    pub p99: f32,
}

/// Calculate totals using Trueno for high-performance SIMD operations
pub fn totals_with_trueno(tally: &FrequencyTally) -> TallyTotals {
    if tally.is_empty() {
        return TallyTotals {
            total_values: 0,
            distinct_values: 0,
        };
    }

    let counts: Vec<f32> = tally.stats_map().values().map(|s| s.count as f32).collect();
    let total_values = trueno::Vector::from_slice(&counts).sum().unwrap_or(0.0) as u64;

    TallyTotals {
        total_values,
        distinct_values: tally.distinct() as u64,
    }
}

/// Calculate percentile from sorted data
fn calculate_percentile(sorted_data: &[f32], percentile: f32) -> f32 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f32;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f32;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}

/// Compute the distribution of occurrence counts, `None` for an empty tally
pub fn count_distribution(tally: &FrequencyTally) -> Option<CountDistribution> {
    if tally.is_empty() {
        return None;
    }

    let counts: Vec<f32> = tally.stats_map().values().map(|s| s.count as f32).collect();
    let v = trueno::Vector::from_slice(&counts);

    let mean = v.mean().unwrap_or(0.0);
    let stddev = v.stddev().unwrap_or(0.0);
    let min = v.min().unwrap_or(0.0);
    let max = v.max().unwrap_or(0.0);

    // Trueno has no built-in percentile function
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = calculate_percentile(&sorted, 50.0);
    let p90 = calculate_percentile(&sorted, 90.0);
    let p99 = calculate_percentile(&sorted, 99.0);

    Some(CountDistribution {
        mean,
        stddev,
        min,
        max,
        median,
        p90,
        p99,
    })
}

/// Print extended statistics to stderr
pub fn print_extended_summary(tally: &FrequencyTally) {
    let Some(dist) = count_distribution(tally) else {
        eprintln!("No values tallied.");
        return;
    };
    let totals = totals_with_trueno(tally);

    eprintln!("\n=== Count Distribution (SIMD-accelerated via Trueno) ===\n");
    eprintln!(
        "{} values, {} distinct:",
        totals.total_values, totals.distinct_values
    );
    eprintln!("  Mean:         {:.2}", dist.mean);
    eprintln!("  Std Dev:      {:.2}", dist.stddev);
    eprintln!("  Min:          {:.2}", dist.min);
    eprintln!("  Max:          {:.2}", dist.max);
    eprintln!("  Median (P50): {:.2}", dist.median);
    eprintln!("  P90:          {:.2}", dist.p90);
    eprintln!("  P99:          {:.2}", dist.p99);
    eprintln!();
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
    fn test_totals_empty() {
        let totals = totals_with_trueno(&FrequencyTally::new());
        assert_eq!(totals.total_values, 0);
        assert_eq!(totals.distinct_values, 0);
    }

    #[test]
    fn test_totals_match_running_counter() {
        let tally = tally_of(&["a", "b", "b", "c", "c", "c"]);
        let totals = totals_with_trueno(&tally);
        assert_eq!(totals.total_values, tally.total());
        assert_eq!(totals.distinct_values, 3);
    }

    #[test]
    fn test_distribution_empty_is_none() {
        assert!(count_distribution(&FrequencyTally::new()).is_none());
    }

    #[test]
    fn test_distribution_uniform_counts() {
        let tally = tally_of(&["a", "b", "c"]);
        let dist = count_distribution(&tally).unwrap();
        assert_eq!(dist.mean, 1.0);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 1.0);
        assert_eq!(dist.median, 1.0);
    }

    #[test]
    fn test_distribution_mixed_counts() {
        // counts are [4, 1, 1]
        let tally = tally_of(&["a", "a", "a", "a", "b", "c"]);
        let dist = count_distribution(&tally).unwrap();
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 4.0);
        assert!((dist.mean - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_percentile_single_sample() {
        assert_eq!(calculate_percentile(&[7.0], 99.0), 7.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(calculate_percentile(&sorted, 50.0), 2.5);
        assert_eq!(calculate_percentile(&sorted, 0.0), 1.0);
        assert_eq!(calculate_percentile(&sorted, 100.0), 4.0);
    }

    #[test]
    fn test_print_extended_summary_does_not_panic() {
        print_extended_summary(&FrequencyTally::new());
        print_extended_summary(&tally_of(&["x", "x", "y"]));
    }
}
