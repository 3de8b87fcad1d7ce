use eframe::egui;
use sensorscatter::{MeasurementRecord, ScatterComparisonView, ScatterViewConfig};

/// Run one headless egui frame rendering the view over `merged`.
fn render_once(view: &ScatterComparisonView, merged: &[MeasurementRecord]) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            view.ui(ui, merged);
        });
    });
}

#[test]
fn renders_empty_input_without_error() {
    let view = ScatterComparisonView::default();
    render_once(&view, &[]);
}

#[test]
fn rendering_does_not_mutate_input() {
    let merged = vec![
        MeasurementRecord::new("pH", 1.0, 6.5),
        MeasurementRecord::new("Moisture", 1.0, 40.0),
        MeasurementRecord::new("Temp", 1.0, 22.0),
    ];
    let before = merged.clone();
    let view = ScatterComparisonView::default();
    render_once(&view, &merged);
    assert_eq!(merged, before);
}

#[test]
fn rerendering_unchanged_input_leaves_view_config_untouched() {
    let merged = vec![
        MeasurementRecord::new("pH", 2.0, 7.1),
        MeasurementRecord::new("Moisture", 2.0, 33.0),
    ];
    let view = ScatterComparisonView::default();
    let cfg_before = view.config().clone();
    render_once(&view, &merged);
    render_once(&view, &merged);
    assert_eq!(*view.config(), cfg_before);
}

#[test]
fn view_renders_with_features_disabled() {
    let mut cfg = ScatterViewConfig::default();
    cfg.features.legend = false;
    cfg.features.grid = false;
    cfg.features.axis_labels = false;
    cfg.features.tooltip = false;
    cfg.features.heading = false;
    let view = ScatterComparisonView::new(cfg);
    render_once(&view, &[MeasurementRecord::new("pH", 1.0, 6.0)]);
}
