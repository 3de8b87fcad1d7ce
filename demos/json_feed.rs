//! Demo: ingesting a merged JSON payload
//!
//! What it demonstrates
//! - Parsing upstream JSON with `merged_from_json_lenient` (extra per-record
//!   fields are ignored, malformed payloads render an empty chart).
//! - Reading the process-wide API endpoint configuration.
//!
//! How to run
//! ```bash
//! SENSOR_API_LINK=https://sensors.example/api cargo run --example json_feed
//! ```

use sensorscatter::{api_endpoint, merged_from_json_lenient, run_scatter_window, ScatterViewConfig};

fn main() -> eframe::Result<()> {
    // Fetching from the endpoint is the host's job; this demo uses an inline
    // payload shaped like the upstream merge output.
    match api_endpoint() {
        Some(endpoint) => eprintln!("Sensor API endpoint configured: {endpoint}"),
        None => eprintln!("SENSOR_API_LINK not set; using inline demo payload"),
    }

    let payload = r#"[
        {"variable": "pH",       "nodeId": 1, "value": 6.5, "timestamp": "2026-08-30T10:00:00Z"},
        {"variable": "pH",       "nodeId": 2, "value": 6.9},
        {"variable": "pH",       "nodeId": 3, "value": 5.8},
        {"variable": "Moisture", "nodeId": 1, "value": 40.0},
        {"variable": "Moisture", "nodeId": 2, "value": 35.5},
        {"variable": "Moisture", "nodeId": 3, "value": 47.2},
        {"variable": "Temp",     "nodeId": 1, "value": 22.0}
    ]"#;
    let merged = merged_from_json_lenient(Some(payload));

    run_scatter_window(merged, ScatterViewConfig::default())
}
