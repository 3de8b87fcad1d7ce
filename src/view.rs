//! The scatter comparison view: partition-then-render over egui_plot.
//!
//! This module encapsulates the chart rendering:
//! - partitioning merged records into the pH and moisture series
//! - drawing both series as points with grid, axis labels and legend
//! - nearest-point hover tooltip

use eframe::egui::{self, Align2, RichText};
use egui_plot::{Legend, Plot, PlotPoint, Points, Text};

use crate::config::{ScatterViewConfig, SeriesLook};
use crate::data::{
    partition_records, MeasurementRecord, ScatterSeriesPair, MOISTURE_VARIABLE, PH_VARIABLE,
};

/// Normalized pointer distance (fraction of the visible span) within which a
/// point is considered hovered.
const HOVER_SNAP_FRACTION: f64 = 0.02;

/// Scatter plot comparing pH and soil moisture readings across sensor nodes.
///
/// The view is a pure function of its input slice: it holds no data, no
/// caches and no render state, only its configuration. Call
/// [`ScatterComparisonView::ui`] from the host's update loop each frame.
pub struct ScatterComparisonView {
    cfg: ScatterViewConfig,
}

impl Default for ScatterComparisonView {
    fn default() -> Self {
        Self::new(ScatterViewConfig::default())
    }
}

impl ScatterComparisonView {
    /// Create a view with the given configuration.
    pub fn new(cfg: ScatterViewConfig) -> Self {
        Self { cfg }
    }

    /// Current configuration.
    pub fn config(&self) -> &ScatterViewConfig {
        &self.cfg
    }

    /// Mutable access for hosts that reconfigure the view at runtime.
    pub fn config_mut(&mut self) -> &mut ScatterViewConfig {
        &mut self.cfg
    }

    /// Render the titled card with the comparison plot.
    ///
    /// `merged_data` may be empty; the chart then renders with no points.
    /// Records whose variable is neither "pH" nor "Moisture" are not drawn.
    pub fn ui(&self, ui: &mut egui::Ui, merged_data: &[MeasurementRecord]) {
        let series = partition_records(merged_data);
        egui::Frame::group(ui.style())
            .fill(ui.visuals().panel_fill)
            .show(ui, |ui| {
                if self.cfg.features.heading {
                    ui.vertical_centered(|ui| {
                        ui.heading(&self.cfg.title);
                    });
                    ui.add_space(8.0);
                }
                self.plot(ui, &series);
            });
    }

    fn plot(&self, ui: &mut egui::Ui, series: &ScatterSeriesPair) {
        let mut plot = Plot::new("sensor_scatter_comparison")
            .height(self.cfg.plot_height)
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .show_grid(self.cfg.features.grid);
        if self.cfg.features.legend {
            plot = plot.legend(Legend::default());
        }
        if self.cfg.features.axis_labels {
            plot = plot
                .x_axis_label(self.cfg.x_axis_label.clone())
                .y_axis_label(self.cfg.y_axis_label.clone());
        }

        let moisture_pts = series.moisture_points();
        let ph_pts = series.ph_points();

        plot.show(ui, |plot_ui| {
            plot_ui.points(Self::series_points(
                MOISTURE_VARIABLE,
                moisture_pts,
                &self.cfg.moisture_look,
            ));
            plot_ui.points(Self::series_points(PH_VARIABLE, ph_pts, &self.cfg.ph_look));

            if self.cfg.features.tooltip {
                self.hover_tooltip(plot_ui, series);
            }
        });
    }

    fn series_points(name: &str, pts: Vec<[f64; 2]>, look: &SeriesLook) -> Points<'static> {
        Points::new(name.to_string(), pts)
            .name(name)
            .radius(look.radius.max(0.5))
            .shape(look.marker)
            .color(look.color)
    }

    /// Show a tooltip for the plotted point nearest to the pointer, if any
    /// is within the snap distance.
    fn hover_tooltip(&self, plot_ui: &mut egui_plot::PlotUi, series: &ScatterSeriesPair) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };

        // Distances are normalized per axis so snapping feels uniform
        // regardless of the axis scales.
        let bounds = plot_ui.plot_bounds();
        let xr = bounds.range_x();
        let yr = bounds.range_y();
        let x_span = (xr.end() - xr.start()).abs().max(f64::EPSILON);
        let y_span = (yr.end() - yr.start()).abs().max(f64::EPSILON);

        let mut best: Option<(&MeasurementRecord, &SeriesLook, f64)> = None;
        let candidates = series
            .ph
            .iter()
            .map(|r| (r, &self.cfg.ph_look))
            .chain(series.moisture.iter().map(|r| (r, &self.cfg.moisture_look)));
        for (record, look) in candidates {
            let dx = (record.node_id - pointer.x) / x_span;
            let dy = (record.value - pointer.y) / y_span;
            let d2 = dx * dx + dy * dy;
            if best.map_or(true, |(_, _, best_d2)| d2 < best_d2) {
                best = Some((record, look, d2));
            }
        }

        if let Some((record, look, d2)) = best {
            if d2 <= HOVER_SNAP_FRACTION * HOVER_SNAP_FRACTION {
                let label = format!(
                    "{}\n{} = {}\n{} = {}",
                    record.variable, self.cfg.x_axis_label, record.node_id, self.cfg.y_axis_label,
                    record.value
                );
                let rich = RichText::new(label).color(look.color);
                plot_ui.text(
                    Text::new(
                        "hover_lbl",
                        PlotPoint::new(record.node_id, record.value),
                        rich,
                    )
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }
        }
    }
}
