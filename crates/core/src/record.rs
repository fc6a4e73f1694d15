use serde::{Deserialize, Serialize};

/// One sensor measurement entry.
///
/// Field names are part of the wire contract: they serialize exactly as
/// written here, so downstream consumers of the JSON API see `record_id`,
/// `name`, `value`, `unit`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique id within the catalog, also the filter/sort key.
    pub record_id: i64,
    /// Free-text label, e.g. `"Sensor_X"`.
    pub name: String,
    /// Measurement value.
    pub value: f64,
    /// Measurement unit label.
    pub unit: String,
    /// ISO-8601 timestamp with UTC designator. Passed through verbatim,
    /// never parsed or validated.
    pub timestamp: String,
}

impl Record {
    pub fn new(
        record_id: i64,
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            record_id,
            name: name.into(),
            value,
            unit: unit.into(),
            timestamp: timestamp.into(),
        }
    }
}
