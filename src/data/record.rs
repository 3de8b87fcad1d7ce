use serde::{Deserialize, Serialize};

/// One observed sensor reading tagged with its variable kind, source node
/// and numeric value.
///
/// Records arrive already merged and labeled from an upstream
/// data-preparation collaborator. Serialized inputs may carry additional
/// fields; they are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Measurement kind, e.g. "pH" or "Moisture". Open-ended, not an enum.
    pub variable: String,
    /// Numeric identifier of the originating sensor node.
    #[serde(rename = "nodeId")]
    pub node_id: f64,
    /// Measured value.
    pub value: f64,
}

impl MeasurementRecord {
    /// Create a new record with the given variable label.
    pub fn new(variable: &str, node_id: f64, value: f64) -> Self {
        Self {
            variable: variable.to_string(),
            node_id,
            value,
        }
    }
}

/// Parse a merged JSON array of records.
///
/// Per-record fields beyond `variable`, `nodeId` and `value` are ignored.
pub fn merged_from_json(json: &str) -> Result<Vec<MeasurementRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Lenient variant of [`merged_from_json`] for untrusted payloads: a missing
/// or malformed payload yields an empty vector, so the chart renders empty
/// instead of failing.
pub fn merged_from_json_lenient(json: Option<&str>) -> Vec<MeasurementRecord> {
    match json {
        Some(s) => merged_from_json(s).unwrap_or_default(),
        None => Vec::new(),
    }
}
