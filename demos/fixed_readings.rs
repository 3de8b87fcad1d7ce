//! Demo: fixed pH / moisture readings
//!
//! What it demonstrates
//! - Building merged `MeasurementRecord` data by hand.
//! - Opening the comparison view in a native window with the default config.
//!
//! How to run
//! ```bash
//! cargo run --example fixed_readings
//! ```
//! You should see two scatter series, pH in red and moisture in violet,
//! spread over twelve sensor nodes.

use sensorscatter::{run_scatter_window, MeasurementRecord, ScatterViewConfig};

fn main() -> eframe::Result<()> {
    let mut merged = Vec::new();
    for node in 1u32..=12 {
        let node_id = node as f64;
        merged.push(MeasurementRecord::new(
            "pH",
            node_id,
            5.5 + 0.15 * ((node % 5) as f64),
        ));
        merged.push(MeasurementRecord::new(
            "Moisture",
            node_id,
            30.0 + 1.5 * (((node * 7) % 11) as f64),
        ));
        if node % 4 == 0 {
            // Variables outside the comparison are excluded from both series.
            merged.push(MeasurementRecord::new("Temp", node_id, 21.0));
        }
    }

    run_scatter_window(merged, ScatterViewConfig::default())
}
