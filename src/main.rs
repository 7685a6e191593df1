//! flume-metrics-collector - Flume agent metrics as InfluxDB line protocol
//!
//! Polls every configured Flume agent over HTTP, extracts the numeric
//! counters from their JSON payloads, and prints one line-protocol record
//! per reported entity to standard output.

use std::io;

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod collector;
mod config;
mod metrics;
mod utils;

use collector::Collector;
use config::{CliArgs, CollectorConfig, SAMPLE_CONFIG};

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Diagnostics go to stderr; stdout carries only line-protocol records.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    if args.print_sample_config {
        print!("{}", SAMPLE_CONFIG);
        return Ok(());
    }

    setup_logging(args.verbose, args.quiet);

    let config = match &args.config {
        Some(path) => CollectorConfig::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
        None => {
            info!("No configuration file given, using the embedded sample");
            CollectorConfig::sample()
        }
    };

    let servers = config.servers.len();
    let collector = Collector::new(config);
    let report = collector.run(io::stdout())?;

    info!(
        "Collected {} lines from {}/{} servers",
        report.lines,
        servers - report.failures.len(),
        servers
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
