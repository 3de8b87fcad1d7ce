//! SensorScatter crate root: re-exports and module wiring.
//!
//! This crate provides an embeddable scatter plot comparing two
//! sensor-derived variables (pH and soil moisture) across sensor nodes,
//! built on egui/eframe:
//! - `data`: measurement records, series partitioning, JSON ingestion
//! - `config`: view configuration and the process-wide API endpoint
//! - `view`: the scatter comparison view itself
//! - `run`: helpers to open the view in a native window

pub mod config;
pub mod data;
pub mod run;
pub mod view;

// Public re-exports for a compact external API
pub use config::{api_endpoint, ScatterViewConfig, SeriesLook, ViewFeatures};
pub use data::{
    merged_from_json, merged_from_json_lenient, partition_records, MeasurementRecord,
    ScatterSeriesPair,
};
pub use run::run_scatter_window;
pub use view::ScatterComparisonView;
