//! Top-level entry point for running the comparison view as a native window.
//!
//! The [`run_scatter_window`] function is the primary API for standalone
//! use. Embedded hosts call [`ScatterComparisonView::ui`] from their own
//! update loop instead.

use eframe::egui;

use crate::config::ScatterViewConfig;
use crate::data::MeasurementRecord;
use crate::view::ScatterComparisonView;

struct ScatterApp {
    view: ScatterComparisonView,
    merged_data: Vec<MeasurementRecord>,
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.ui(ui, &self.merged_data);
        });
    }
}

/// Open the comparison view in a native window with the given merged data.
///
/// The call blocks until the window is closed. Failures from the windowing
/// or rendering backend are returned to the caller.
pub fn run_scatter_window(
    merged_data: Vec<MeasurementRecord>,
    cfg: ScatterViewConfig,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = eframe::NativeOptions::default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 560.0));
    }

    let app = ScatterApp {
        view: ScatterComparisonView::new(cfg),
        merged_data,
    };
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
