//! Configuration module

pub mod cli;
pub mod collector_config;

pub use cli::CliArgs;
pub use collector_config::{CollectorConfig, SAMPLE_CONFIG};
