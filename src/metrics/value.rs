//! Numeric coercion for string-typed field values
//!
//! Flume reports every field value as a JSON string regardless of its
//! logical type; numeric meaning is recovered by parsing.

use std::fmt;

use thiserror::Error;

/// Signal that a raw value parses as neither integer nor float
///
/// Routinely produced for status strings and booleans; the field is
/// silently dropped from output rather than reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value is not numeric")]
pub struct NotNumeric;

/// A field value coerced to its numeric representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Parsed as a base-10 signed integer
    Integer(i64),
    /// Parsed as a float after the integer parse failed
    Float(f64),
}

impl FieldValue {
    /// Coerce a raw string value, trying integer first, then float
    pub fn parse(raw: &str) -> Result<Self, NotNumeric> {
        if let Ok(int) = raw.parse::<i64>() {
            return Ok(FieldValue::Integer(int));
        }
        if let Ok(float) = raw.parse::<f64>() {
            return Ok(FieldValue::Float(float));
        }
        Err(NotNumeric)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integers must render without a decimal point
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
        }
    }
}
