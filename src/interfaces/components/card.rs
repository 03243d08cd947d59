use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A titled card container with standard styling
pub struct Card {
    title: Option<String>,
    subtitle: Option<String>,
    min_height: f32,
    accent: Option<egui::Color32>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            min_height: 0.0,
            accent: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Muted text shown right of the title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Highlights the border and adds a glow in `color`.
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let mut frame = DesignSystem::card_frame();

        if let Some(color) = self.accent {
            frame = frame
                .stroke(egui::Stroke::new(1.5, color))
                .shadow(egui::epaint::Shadow {
                    offset: [0, 4],
                    blur: 15,
                    spread: 0,
                    color: color.linear_multiply(0.15),
                });
        }

        frame.show(ui, |ui| {
            // min_width misbehaves inside ScrollArea
            if self.min_height > 0.0 {
                ui.set_min_height(self.min_height);
            }

            if self.title.is_some() || self.subtitle.is_some() {
                ui.horizontal(|ui| {
                    if let Some(title) = &self.title {
                        ui.label(
                            egui::RichText::new(title)
                                .size(13.0)
                                .color(DesignSystem::TEXT_SECONDARY)
                                .strong(),
                        );
                    }
                    if let Some(subtitle) = &self.subtitle {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(subtitle)
                                    .size(11.0)
                                    .color(DesignSystem::TEXT_MUTED),
                            );
                        });
                    }
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
