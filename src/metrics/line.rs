//! Line-protocol rendering
//!
//! Composes one measurement line per entity:
//! `flume_<name>,type=<TYPE>,name=<name> field=value,...`

use std::collections::HashMap;

use super::filter::FieldFilters;
use super::value::FieldValue;

/// Fixed prefix applied to every measurement name
pub const MEASUREMENT_PREFIX: &str = "flume_";

/// Render one line-protocol record for a single entity
///
/// Tags are the fixed `type`/`name` pair, in that order. Fields that do
/// not coerce to a number, or that the allow-list rejects, are dropped.
/// Field order within the line is unspecified. A line whose every field
/// was dropped still renders, with an empty field segment.
pub fn format_line(
    measurement_name: &str,
    entity_type: &str,
    entity_name: &str,
    fields: &HashMap<String, String>,
    filters: &FieldFilters,
) -> String {
    let tags = format!("type={},name={}", entity_type, entity_name);

    let rendered: Vec<String> = fields
        .iter()
        .filter_map(|(key, raw)| {
            let value = FieldValue::parse(raw).ok()?;
            filters
                .allows(entity_type, key)
                .then(|| format!("{}={}", key, value))
        })
        .collect();

    format!(
        "{}{},{} {}",
        MEASUREMENT_PREFIX,
        measurement_name,
        tags,
        rendered.join(",")
    )
}
