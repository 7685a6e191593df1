//! Collector configuration loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metrics::FieldFilters;
use crate::utils::{CollectorError, Result};

/// Embedded sample configuration, used when no file is given
pub const SAMPLE_CONFIG: &str = r#"## NOTE This collector only reads numerical measurements, strings and
## booleans will be ignored.
##
name = "agents_metrics"
## URL of each server in the service's cluster
servers = [
  "http://localhost:8000/flume01.json",
  "http://localhost:8000/flume02.json",
]
## Specific metrics could be selected for each type, instead of
## collecting all metrics as they come from flume.
[filters]
channel = [
  "EventPutSuccessCount",
  "EventPutAttemptCount",
]
"#;

/// Complete collector configuration
///
/// Immutable after load; shared read-only by every worker.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Measurement name, emitted with the fixed `flume_` prefix
    pub name: String,
    /// Metrics endpoint of every server in the fleet
    pub servers: Vec<String>,
    /// Per-entity-type field allow-lists
    #[serde(default)]
    pub filters: FieldFilters,
}

impl CollectorConfig {
    /// Parse a TOML document into a validated configuration
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: CollectorConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(CollectorError::ConfigIo)?;
        Self::from_toml_str(&raw)
    }

    /// The embedded sample configuration
    pub fn sample() -> Self {
        Self::from_toml_str(SAMPLE_CONFIG).expect("embedded sample configuration is valid")
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CollectorError::Config(
                "measurement name must not be empty".to_string(),
            ));
        }
        if self.servers.is_empty() {
            return Err(CollectorError::Config(
                "at least one server URL is required".to_string(),
            ));
        }
        Ok(())
    }
}
