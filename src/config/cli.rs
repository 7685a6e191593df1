//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Collect Apache Flume agent metrics as InfluxDB line protocol
#[derive(Parser, Debug, Clone)]
#[command(name = "flume-metrics-collector")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the TOML configuration file
    ///
    /// When omitted, the embedded sample configuration is used.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Print the embedded sample configuration and exit
    #[arg(long = "print-sample-config")]
    pub print_sample_config: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
