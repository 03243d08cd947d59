use crate::interfaces::components::balls::render_ball_row;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::Ball;
use eframe::egui;

/// A card showing a single headline value
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    value_color: egui::Color32,
    context: Option<&str>,
) {
    Card::new().title(title).min_height(90.0).show(ui, |ui| {
        ui.label(
            egui::RichText::new(value)
                .size(28.0)
                .strong()
                .color(value_color),
        );

        if let Some(ctx) = context {
            ui.label(
                egui::RichText::new(ctx)
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
    });
}

/// A card holding a row of balls, or a muted placeholder when empty.
pub fn render_ball_card(ui: &mut egui::Ui, title: &str, balls: &[Ball], accent: egui::Color32) {
    Card::new()
        .title(title)
        .min_height(90.0)
        .accent(accent)
        .show(ui, |ui| {
            if balls.is_empty() {
                ui.label(egui::RichText::new("-").color(DesignSystem::TEXT_MUTED));
            } else {
                render_ball_row(ui, balls, DesignSystem::BALL_SIZE_SMALL);
            }
        });
}

/// A small rounded label, e.g. for the data mode or a boost
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}
