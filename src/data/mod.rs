//! Measurement records and series partitioning.

mod partition;
mod record;

pub use partition::{partition_records, ScatterSeriesPair, MOISTURE_VARIABLE, PH_VARIABLE};
pub use record::{merged_from_json, merged_from_json_lenient, MeasurementRecord};
