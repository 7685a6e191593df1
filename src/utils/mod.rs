//! Utility modules

pub mod error;

pub use error::{CollectorError, FetchError, Result};
