//! Configuration types for the scatter comparison view.

use eframe::egui::Color32;
use egui_plot::MarkerShape;
use once_cell::sync::Lazy;

// ─────────────────────────────────────────────────────────────────────────────
// API endpoint – process-wide, loaded once
// ─────────────────────────────────────────────────────────────────────────────

/// Environment variable naming the sensor API endpoint.
pub const API_ENDPOINT_VAR: &str = "SENSOR_API_LINK";

// Read once on first access, frozen for the lifetime of the process.
static API_ENDPOINT: Lazy<Option<String>> =
    Lazy::new(|| std::env::var(API_ENDPOINT_VAR).ok());

/// Sensor API endpoint, read from `SENSOR_API_LINK` once on first access.
///
/// The view itself performs no network calls; this is exposed for the host's
/// data-preparation collaborator that fetches and merges raw readings before
/// they reach the view. Returns `None` if the variable is unset.
pub fn api_endpoint() -> Option<&'static str> {
    API_ENDPOINT.as_deref()
}

// ─────────────────────────────────────────────────────────────────────────────
// Series look
// ─────────────────────────────────────────────────────────────────────────────

/// Visual style for one scatter series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLook {
    pub color: Color32,
    pub radius: f32,
    pub marker: MarkerShape,
}

impl SeriesLook {
    /// A circle-marker look with the given color and default radius.
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            radius: 3.0,
            marker: MarkerShape::Circle,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual view features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused view for embedded dashboards.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFeatures {
    /// Show the plot legend.
    pub legend: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Show X/Y axis labels.
    pub axis_labels: bool,
    /// Show the nearest-point hover tooltip.
    pub tooltip: bool,
    /// Show the card heading above the plot.
    pub heading: bool,
}

impl Default for ViewFeatures {
    fn default() -> Self {
        Self {
            legend: true,
            grid: true,
            axis_labels: true,
            tooltip: true,
            heading: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for [`crate::ScatterComparisonView`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterViewConfig {
    /// Heading rendered above the plot.
    pub title: String,
    /// Plot height in points. Width follows the available space.
    pub plot_height: f32,
    /// Feature toggles.
    pub features: ViewFeatures,
    /// Look of the pH series.
    pub ph_look: SeriesLook,
    /// Look of the moisture series.
    pub moisture_look: SeriesLook,
    /// X axis label.
    pub x_axis_label: String,
    /// Y axis label.
    pub y_axis_label: String,
}

impl Default for ScatterViewConfig {
    fn default() -> Self {
        Self {
            title: "Sensor pH & Moisture Distribution".to_string(),
            plot_height: 400.0,
            features: ViewFeatures::default(),
            ph_look: SeriesLook::new(Color32::from_rgb(0xff, 0x00, 0x00)),
            moisture_look: SeriesLook::new(Color32::from_rgb(0x88, 0x84, 0xd8)),
            x_axis_label: "Sensor Node".to_string(),
            y_axis_label: "Value".to_string(),
        }
    }
}
