//! CLI argument parsing for Moda

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for frequency reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "moda")]
#[command(version)]
#[command(about = "Pure Rust frequency analyzer for value streams", long_about = None)]
pub struct Cli {
    /// Input file with values to tally (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Filter values before tallying (e.g., -e only=a,b or -e drop=/^#/)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Show the full frequency table instead of only the most frequent value
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Split lines on DELIM instead of ASCII whitespace
    #[arg(short = 'd', long = "delimiter", value_name = "DELIM")]
    pub delimiter: Option<char>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Limit table output to the N most frequent values
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Show count-distribution statistics (mean, stddev, percentiles)
    #[arg(long = "stats-extended")]
    pub stats_extended: bool,

    /// Enable self-profiling to measure Moda's own overhead
    #[arg(long = "profile-self")]
    pub profile_self: bool,

    /// Enable TRACE-level debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
