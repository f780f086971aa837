use anyhow::Result;
use clap::Parser;
use moda::cli::{Cli, OutputFormat};
use moda::csv_output::CsvReport;
use moda::distribution;
use moda::filter::ValueFilter;
use moda::input;
use moda::json_output::JsonReport;
use moda::profiling::{ProfilingCategory, ProfilingContext};
use moda::tally::FrequencyTally;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut profiling = ProfilingContext::new();

    let raw = profiling.measure(ProfilingCategory::Read, || {
        input::read_input(cli.input.as_deref())
    })?;
    let tokens = input::tokenize(&raw, cli.delimiter);
    tracing::debug!(tokens = tokens.len(), "input tokenized");

    let filter = profiling.measure(ProfilingCategory::Filtering, || match &cli.filter {
        Some(expr) => ValueFilter::from_expr(expr),
        None => Ok(ValueFilter::all()),
    })?;

    let mut tally = FrequencyTally::new();
    let start = Instant::now();
    for token in &tokens {
        if filter.should_count(token) {
            tally.record(token);
            profiling.record_value();
        }
    }
    profiling.record_time(ProfilingCategory::Tallying, start.elapsed());
    tracing::debug!(
        total = tally.total(),
        distinct = tally.distinct(),
        "tally built"
    );

    // Empty input (or everything filtered out) is an error, not a sentinel
    let mode = tally.most_frequent()?;

    match cli.format {
        OutputFormat::Text => {
            if cli.summary {
                let table =
                    profiling.measure(ProfilingCategory::Formatting, || {
                        tally.format_summary(cli.top)
                    });
                print!("{}", table);
            } else {
                println!(
                    "most frequent: {} ({} of {})",
                    mode.value,
                    mode.count,
                    tally.total()
                );
            }
        }
        OutputFormat::Json => {
            let json = profiling.measure(ProfilingCategory::Formatting, || {
                JsonReport::from_tally(&tally, cli.top).to_json()
            })?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let csv = profiling.measure(ProfilingCategory::Formatting, || {
                CsvReport::from_tally(&tally, cli.top).to_csv()
            });
            print!("{}", csv);
        }
    }

    if cli.stats_extended {
        distribution::print_extended_summary(&tally);
    }

    if cli.profile_self {
        profiling.print_summary();
    }

    Ok(())
}
