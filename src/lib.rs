//! flume-metrics-collector library
//!
//! Polls a fleet of Apache Flume agents over HTTP and renders their
//! numeric metrics as InfluxDB line protocol.

pub mod collector;
pub mod config;
pub mod metrics;
pub mod utils;
