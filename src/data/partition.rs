use super::MeasurementRecord;

/// Variable label selecting the pH series.
pub const PH_VARIABLE: &str = "pH";
/// Variable label selecting the moisture series.
pub const MOISTURE_VARIABLE: &str = "Moisture";

/// The two series plotted by the comparison view, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeriesPair {
    pub ph: Vec<MeasurementRecord>,
    pub moisture: Vec<MeasurementRecord>,
}

impl ScatterSeriesPair {
    /// pH points as (node_id, value) pairs for plotting.
    pub fn ph_points(&self) -> Vec<[f64; 2]> {
        Self::points(&self.ph)
    }

    /// Moisture points as (node_id, value) pairs for plotting.
    pub fn moisture_points(&self) -> Vec<[f64; 2]> {
        Self::points(&self.moisture)
    }

    fn points(records: &[MeasurementRecord]) -> Vec<[f64; 2]> {
        records.iter().map(|r| [r.node_id, r.value]).collect()
    }
}

/// Partition merged records by their discriminant `variable` field.
///
/// Stable and order-preserving: each subset keeps the relative input order.
/// Records whose variable is neither "pH" nor "Moisture" are excluded from
/// both series; the comparison is deliberately limited to these two
/// variables. The input is never mutated.
pub fn partition_records(merged: &[MeasurementRecord]) -> ScatterSeriesPair {
    let mut out = ScatterSeriesPair::default();
    for record in merged {
        if record.variable == PH_VARIABLE {
            out.ph.push(record.clone());
        } else if record.variable == MOISTURE_VARIABLE {
            out.moisture.push(record.clone());
        }
    }
    out
}
