use crate::domain::band::NumberBand;
use eframe::egui;

/// Dark dashboard design system
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(15, 23, 42); // #0F172A
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(30, 41, 59); // #1E293B
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(39, 52, 73);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(99, 102, 241); // #6366F1
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(139, 92, 246); // #8B5CF6

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
    pub const HOT: egui::Color32 = egui::Color32::from_rgb(249, 115, 22);
    pub const COLD: egui::Color32 = egui::Color32::from_rgb(56, 189, 248);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const ROUNDING_LARGE: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub const BALL_SIZE: f32 = 34.0;
    pub const BALL_SIZE_SMALL: f32 = 26.0;

    /// Opacity of frequency bars relative to their ball color.
    pub const CHART_FILL_ALPHA: f32 = 0.6;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_CARD;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_SECONDARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Ball color of a number band.
    pub fn band_color(band: NumberBand) -> egui::Color32 {
        let [r, g, b] = band.rgb();
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn confidence_color(confidence: f64) -> egui::Color32 {
        if confidence >= 80.0 {
            Self::SUCCESS
        } else if confidence >= 60.0 {
            Self::WARNING
        } else {
            Self::DANGER
        }
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
