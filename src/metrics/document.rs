//! In-memory model of one agent's metrics payload

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

/// One agent's full metrics payload
///
/// A two-level mapping from entity key (`"<TYPE>.<name>"`) to field name to
/// raw string value. Created fresh per fetch and owned exclusively by the
/// worker that fetched it.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct MetricsDocument {
    entities: HashMap<String, HashMap<String, String>>,
}

impl MetricsDocument {
    /// Decode a JSON body into a document
    ///
    /// Any shape other than an object of objects of strings is a decode
    /// failure.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Number of entity keys in the document, malformed ones included
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities as `(type, name, fields)`
    ///
    /// Entity keys split at their first `.`. A key without a separator
    /// cannot be attributed to an entity type; it is skipped with a
    /// warning and does not disturb enumeration of its siblings.
    /// Iteration order is unspecified.
    pub fn entities(&self) -> impl Iterator<Item = (&str, &str, &HashMap<String, String>)> {
        self.entities
            .iter()
            .filter_map(|(key, fields)| match key.split_once('.') {
                Some((entity_type, name)) => Some((entity_type, name, fields)),
                None => {
                    warn!("skipping entity key {:?}: missing type separator", key);
                    None
                }
            })
    }
}
