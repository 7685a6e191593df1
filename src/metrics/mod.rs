//! Metrics pipeline: payload model, coercion, filtering, rendering
//!
//! This module provides:
//! - MetricsDocument: the two-level map one agent reports
//! - FieldValue: string values coerced into tagged integers/floats
//! - FieldFilters: per-entity-type field allow-lists
//! - format_line: line-protocol rendering of one entity

pub mod document;
pub mod filter;
pub mod line;
pub mod value;

pub use document::MetricsDocument;
pub use filter::FieldFilters;
pub use line::{format_line, MEASUREMENT_PREFIX};
pub use value::{FieldValue, NotNumeric};
