//! Per-entity-type field allow-lists

use serde::{Deserialize, Serialize};

/// Allow-lists restricting which fields survive for each entity type
///
/// One list per recognized Flume entity type. An empty list disables
/// filtering for that type; every numeric field passes. Loaded once from
/// configuration and shared read-only across workers.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldFilters {
    pub source: Vec<String>,
    pub channel: Vec<String>,
    pub sink: Vec<String>,
}

impl FieldFilters {
    /// Allow-list for an entity type as it appears in entity keys
    fn list_for(&self, entity_type: &str) -> Option<&[String]> {
        match entity_type {
            "SOURCE" => Some(&self.source),
            "CHANNEL" => Some(&self.channel),
            "SINK" => Some(&self.sink),
            _ => None,
        }
    }

    /// Whether a field passes the filter for the given entity type
    ///
    /// Membership is exact and case-sensitive. Types with an empty or
    /// absent allow-list pass every field, as do unrecognized types.
    pub fn allows(&self, entity_type: &str, field: &str) -> bool {
        match self.list_for(entity_type) {
            Some(list) if !list.is_empty() => list.iter().any(|allowed| allowed == field),
            _ => true,
        }
    }
}
