use crate::application::controller::DashboardController;
use crate::interfaces::dashboard::render_dashboard;
use crate::interfaces::design_system::DesignSystem;
use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const HANGUL_FONT: &str = "hangul";

/// Repaint interval while requests are outstanding, so results show up
/// without user input.
const BUSY_REPAINT: Duration = Duration::from_millis(100);
const IDLE_REPAINT: Duration = Duration::from_millis(500);

/// The desktop application: one dashboard window.
pub struct DashboardApp {
    controller: DashboardController,
    alert: Option<String>,
}

impl DashboardApp {
    pub fn new(mut controller: DashboardController) -> Self {
        controller.start();
        Self {
            controller,
            alert: None,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Apply completed fetches ---
        self.controller.poll();
        if self.alert.is_none() {
            self.alert = self.controller.take_alert();
        }

        // --- 2. Dashboard ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| render_dashboard(ui, &mut self.controller));
            });

        // --- 3. Overlays ---
        if self.controller.is_loader_visible() {
            render_loader(ctx);
        }
        if let Some(message) = &self.alert {
            let mut dismissed = false;
            egui::Window::new("알림")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new(message).color(DesignSystem::TEXT_PRIMARY));
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    if ui.button("확인").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.alert = None;
            }
        }

        let next = if self.controller.is_busy() {
            BUSY_REPAINT
        } else {
            self.controller
                .loader_remaining()
                .unwrap_or(IDLE_REPAINT)
                .min(IDLE_REPAINT)
        };
        ctx.request_repaint_after(next);
    }
}

fn render_loader(ctx: &egui::Context) {
    let rect = ctx.available_rect();
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("loader_dim"),
    ))
    .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(150));

    egui::Area::new(egui::Id::new("loader"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            DesignSystem::card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("예측 데이터를 분석하는 중...")
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                });
            });
        });
}

/// Installs a Hangul-capable font ahead of the defaults. Without one the
/// Korean labels render as boxes; that is logged, not fatal.
pub fn configure_fonts(ctx: &egui::Context, font_path: Option<&Path>) {
    let Some(path) = font_path else {
        warn!("No LOTTO_FONT_PATH set; Korean text may not render");
        return;
    };

    match load_font(path) {
        Ok(data) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts
                .font_data
                .insert(HANGUL_FONT.to_owned(), Arc::new(data));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .insert(0, HANGUL_FONT.to_owned());
            }
            ctx.set_fonts(fonts);
            info!("Loaded UI font from {}", path.display());
        }
        Err(e) => warn!("{:#}", e),
    }
}

fn load_font(path: &Path) -> Result<egui::FontData> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    Ok(egui::FontData::from_owned(bytes))
}
