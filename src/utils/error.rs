//! Error types for flume-metrics-collector

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {0}")]
    ConfigIo(#[source] io::Error),

    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    #[error("Worker thread for {0} panicked")]
    WorkerPanic(String),
}

/// Per-server fetch errors
///
/// These are recoverable: a failing server contributes zero output lines
/// and the remaining servers are unaffected.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport failure for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid metrics payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CollectorError>;
