//! Self-profiling infrastructure for Moda
//!
//! Sprint 7: Internal timing to measure where a run spends its time. The
//! context owns all mutable counters; callers thread `&mut` access through
//! a single owner rather than sharing state.

use std::time::{Duration, Instant};

/// Categories of operations that can be profiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfilingCategory {
    /// Time spent reading input
    Read,
    /// Time spent parsing filter expressions
    Filtering,
    /// Time spent recording values into the tally
    Tallying,
    /// Time spent formatting output
    Formatting,
}

/// Profiling context that tracks time spent in various operations
#[derive(Debug, Default)]
pub struct ProfilingContext {
    /// Total number of values processed
    value_count: u64,
    read_time: Duration,
    filtering_time: Duration,
    tallying_time: Duration,
    formatting_time: Duration,
    /// Total wall clock time
    start_time: Option<Instant>,
}

impl ProfilingContext {
    /// Create a new profiling context
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record that a value was processed
    pub fn record_value(&mut self) {
        self.value_count += 1;
    }

    /// Measure the time taken by an operation
    ///
    /// # Example
    /// ```
    /// use moda::profiling::{ProfilingContext, ProfilingCategory};
    ///
    /// let mut ctx = ProfilingContext::new();
    /// let result = ctx.measure(ProfilingCategory::Formatting, || {
    ///     format!("test")
    /// });
    /// assert_eq!(result, "test");
    /// ```
    pub fn measure<F, R>(&mut self, category: ProfilingCategory, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        self.record_time(category, elapsed);
        result
    }

    /// Record time spent in a category
    pub fn record_time(&mut self, category: ProfilingCategory, duration: Duration) {
        match category {
            ProfilingCategory::Read => self.read_time += duration,
            ProfilingCategory::Filtering => self.filtering_time += duration,
            ProfilingCategory::Tallying => self.tallying_time += duration,
            ProfilingCategory::Formatting => self.formatting_time += duration,
        }
    }

    /// Get the total wall clock time since profiling started
    pub fn wall_time(&self) -> Duration {
        self.start_time
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }

    /// Get the total number of values processed
    pub fn value_count(&self) -> u64 {
        self.value_count
    }

    /// Get time spent in a specific category
    pub fn time_in_category(&self, category: ProfilingCategory) -> Duration {
        match category {
            ProfilingCategory::Read => self.read_time,
            ProfilingCategory::Filtering => self.filtering_time,
            ProfilingCategory::Tallying => self.tallying_time,
            ProfilingCategory::Formatting => self.formatting_time,
        }
    }

    /// Get total accounted time (sum of all categories)
    pub fn accounted_time(&self) -> Duration {
        self.read_time + self.filtering_time + self.tallying_time + self.formatting_time
    }

    /// Print profiling summary to stderr
    pub fn print_summary(&self) {
        let wall = self.wall_time();
        let accounted = self.accounted_time();

        eprintln!("\n=== Moda Self-Profiling Results ===");
        eprintln!("Values processed:   {}", self.value_count);
        eprintln!("Total wall time:    {:.3}s", wall.as_secs_f64());
        eprintln!();
        eprintln!("Breakdown:");
        self.print_category("Input read", self.read_time, accounted);
        self.print_category("Filtering", self.filtering_time, accounted);
        self.print_category("Tallying", self.tallying_time, accounted);
        self.print_category("Formatting", self.formatting_time, accounted);
        eprintln!();
    }

    fn print_category(&self, name: &str, time: Duration, total: Duration) {
        if time > Duration::ZERO && total > Duration::ZERO {
            eprintln!(
                "  - {:14} {:.3}s ({:.1}%)",
                format!("{}:", name),
                time.as_secs_f64(),
                time.as_secs_f64() / total.as_secs_f64() * 100.0
            );
        }
    }
}
