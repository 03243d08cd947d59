use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::FrequencyChart;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Bar chart of how often each number was drawn, colored by band.
pub fn render_frequency_chart(ui: &mut egui::Ui, chart: &FrequencyChart) {
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|bar| {
            let color = DesignSystem::band_color(bar.band);
            Bar::new(bar.number as f64, bar.count as f64)
                .name(format!("{}\n{}", bar.tooltip_title, bar.tooltip_body))
                .fill(color.gamma_multiply(DesignSystem::CHART_FILL_ALPHA))
                .stroke(egui::Stroke::new(1.0, color))
                .width(0.8)
        })
        .collect();

    let series = BarChart::new("출현 빈도", bars)
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| bar.name.clone()));

    Plot::new("frequency_chart")
        .height(260.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_grid([false, true])
        .include_y(0.0)
        .include_y(chart.max_count as f64 * 1.1)
        .show(ui, |plot_ui| plot_ui.bar_chart(series));
}

/// Horizontal confidence gauge that eases toward `confidence` (0-100).
pub fn render_confidence_bar(ui: &mut egui::Ui, id: egui::Id, confidence: f64, label: &str) {
    let target = (confidence / 100.0).clamp(0.0, 1.0) as f32;
    let fraction = ui.ctx().animate_value_with_time(id, target, 0.6);

    ui.add(
        egui::ProgressBar::new(fraction)
            .fill(DesignSystem::confidence_color(confidence))
            .desired_height(8.0)
            .corner_radius(4.0),
    );
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
}
