use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::Ball;
use eframe::egui;

/// Paints one lotto ball in its band color.
pub fn render_ball(ui: &mut egui::Ui, ball: &Ball, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let color = DesignSystem::band_color(ball.band);
        painter.circle_filled(rect.center(), size / 2.0, color);
        // highlight
        painter.circle_filled(
            rect.center() - egui::vec2(size * 0.15, size * 0.15),
            size * 0.18,
            egui::Color32::from_white_alpha(40),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            ball.number.to_string(),
            egui::FontId::proportional(size * 0.45),
            egui::Color32::WHITE,
        );
    }
    response.on_hover_text(ball.band.label())
}

pub fn render_ball_row(ui: &mut egui::Ui, balls: &[Ball], size: f32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for ball in balls {
            render_ball(ui, ball, size);
        }
    });
}
