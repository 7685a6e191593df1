//! Fetching and fan-out collection
//!
//! This module provides the concurrent gathering system:
//! - Fetcher: one HTTP GET plus JSON decode per server
//! - Collector: thread-per-server fan-out with a join barrier and
//!   per-server error isolation

pub mod fetcher;
pub mod orchestrator;

pub use fetcher::Fetcher;
pub use orchestrator::{Collector, GatherReport};
