use crate::application::controller::DashboardController;
use crate::interfaces::components::balls::render_ball_row;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::{render_confidence_bar, render_frequency_chart};
use crate::interfaces::components::metrics::{
    render_ball_card, render_metric_card, render_status_pill,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{
    DataMode, EnginePanel, MountPoint, PredictionCard, Screen, WeightPanel,
};
use eframe::egui;

/// Choices offered by the set count selector.
pub const SET_COUNT_CHOICES: [usize; 5] = [1, 3, 5, 10, 20];

/// Renders the dashboard content into the central panel
pub fn render_dashboard(ui: &mut egui::Ui, controller: &mut DashboardController) {
    render_header(ui, controller.screen());
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_controls(ui, controller);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let screen = controller.screen();
    render_stats_row(ui, screen);
    ui.add_space(DesignSystem::SPACING_LARGE);

    if screen.is_mounted(MountPoint::PredictionSets) {
        render_prediction_grid(ui, &screen.prediction_cards);
        ui.add_space(DesignSystem::SPACING_LARGE);
    }

    if screen.is_mounted(MountPoint::EngineGrid) {
        render_engine_grid(ui, &screen.engine_panels);
        ui.add_space(DesignSystem::SPACING_LARGE);
    }

    if screen.is_mounted(MountPoint::EngineWeights) {
        render_weight_list(ui, &screen.weight_panels);
        ui.add_space(DesignSystem::SPACING_LARGE);
    }

    if let Some(chart) = &screen.frequency_chart {
        Card::new().title("번호별 출현 빈도").show(ui, |ui| {
            render_frequency_chart(ui, chart);
        });
    }
}

fn render_header(ui: &mut egui::Ui, screen: &Screen) {
    let Some(header) = &screen.header else {
        if screen.is_mounted(MountPoint::RoundHeader) {
            ui.heading(
                egui::RichText::new("로또 예측 분석")
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
        }
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(&header.title)
                .size(26.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        let mode_color = match header.mode {
            DataMode::Realtime => DesignSystem::SUCCESS,
            DataMode::Historical => DesignSystem::WARNING,
        };
        render_status_pill(ui, header.mode.label(), mode_color);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(exported) = &header.exported_at {
                ui.label(
                    egui::RichText::new(format!("업데이트 {}", exported))
                        .size(12.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            if let Some(range) = &header.sum_range {
                render_status_pill(ui, range, DesignSystem::ACCENT_PRIMARY);
            }
        });
    });
}

/// Round lookup, reset and set count controls.
fn render_controls(ui: &mut egui::Ui, controller: &mut DashboardController) {
    let screen = controller.screen();
    if !screen.is_mounted(MountPoint::RoundSelector)
        && !screen.reset_visible
        && !screen.is_mounted(MountPoint::PredictionSets)
    {
        return;
    }

    let show_selector = screen.is_mounted(MountPoint::RoundSelector);
    let show_reset = screen.reset_visible;
    let round_choices = screen.round_choices.clone();
    let busy = controller.is_busy();

    let mut search: Option<String> = None;
    let mut reset = false;
    let mut set_count = controller.set_count();

    ui.horizontal(|ui| {
        if show_selector {
            ui.label(egui::RichText::new("회차 조회").color(DesignSystem::TEXT_SECONDARY));
            let response = ui.add(
                egui::TextEdit::singleline(controller.round_input_mut())
                    .hint_text("예: 1100")
                    .desired_width(90.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.add_enabled(!busy, egui::Button::new("조회")).clicked() || submitted {
                search = Some(controller.round_input().to_string());
            }

            if !round_choices.is_empty() {
                egui::ComboBox::from_id_salt("recent_rounds")
                    .selected_text("최근 회차")
                    .show_ui(ui, |ui| {
                        for round in &round_choices {
                            if ui.selectable_label(false, format!("제 {}회", round)).clicked() {
                                search = Some(round.to_string());
                            }
                        }
                    });
            }
        }

        if show_reset && ui.add_enabled(!busy, egui::Button::new("최신 회차로")).clicked() {
            reset = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt("set_count")
                .selected_text(format!("{}세트", set_count))
                .show_ui(ui, |ui| {
                    for choice in SET_COUNT_CHOICES {
                        ui.selectable_value(&mut set_count, choice, format!("{}세트", choice));
                    }
                });
            ui.label(egui::RichText::new("표시 세트").color(DesignSystem::TEXT_SECONDARY));
        });
    });

    if let Some(input) = search {
        *controller.round_input_mut() = input.clone();
        controller.on_search_round(&input);
    }
    if reset {
        controller.on_reset_to_latest();
    }
    if set_count != controller.set_count() {
        controller.on_set_count_change(set_count);
    }
}

fn render_stats_row(ui: &mut egui::Ui, screen: &Screen) {
    ui.columns(5, |columns| {
        if let Some(total) = &screen.total_draws {
            render_metric_card(
                &mut columns[0],
                "누적 추첨",
                total,
                DesignSystem::TEXT_PRIMARY,
                None,
            );
        }
        if screen.is_mounted(MountPoint::LatestDraw) {
            render_ball_card(
                &mut columns[1],
                "최근 당첨 번호",
                &screen.latest_draw,
                DesignSystem::BORDER_SUBTLE,
            );
        }
        if screen.is_mounted(MountPoint::HotNumbers) {
            render_ball_card(&mut columns[2], "핫 넘버", &screen.hot_numbers, DesignSystem::HOT);
        }
        if screen.is_mounted(MountPoint::ColdNumbers) {
            render_ball_card(
                &mut columns[3],
                "콜드 넘버",
                &screen.cold_numbers,
                DesignSystem::COLD,
            );
        }
        if screen.is_mounted(MountPoint::OverdueNumbers) {
            render_ball_card(
                &mut columns[4],
                "지연 번호",
                &screen.overdue_numbers,
                DesignSystem::WARNING,
            );
        }
    });
}

fn render_prediction_grid(ui: &mut egui::Ui, cards: &[PredictionCard]) {
    ui.label(
        egui::RichText::new("앙상블 예측 번호")
            .size(18.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    for row in cards.chunks(2) {
        ui.columns(2, |columns| {
            for (column, card) in columns.iter_mut().zip(row) {
                render_prediction_card(column, card);
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }
}

fn render_prediction_card(ui: &mut egui::Ui, card: &PredictionCard) {
    let stars = format!(
        "{}{}",
        "★".repeat(card.stars as usize),
        "☆".repeat(5usize.saturating_sub(card.stars as usize))
    );

    let mut frame = Card::new().title(&card.title).subtitle(stars);
    if card.rank == 1 {
        frame = frame.accent(DesignSystem::ACCENT_PRIMARY);
    }

    frame.show(ui, |ui| {
        render_ball_row(ui, &card.balls, DesignSystem::BALL_SIZE);
        ui.add_space(DesignSystem::SPACING_SMALL);

        render_confidence_bar(
            ui,
            egui::Id::new(("confidence", card.rank)),
            card.confidence,
            &card.confidence_label,
        );

        let sum_color = match card.sum_in_range {
            Some(true) => DesignSystem::SUCCESS,
            Some(false) => DesignSystem::DANGER,
            None => DesignSystem::TEXT_SECONDARY,
        };
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("합계 {}", card.summary.sum))
                    .size(12.0)
                    .color(sum_color),
            );
            ui.label(
                egui::RichText::new(format!(
                    "홀짝 {}:{}  AC {}",
                    card.summary.odd, card.summary.even, card.summary.ac_value
                ))
                .size(12.0)
                .color(DesignSystem::TEXT_MUTED),
            );
        });
    });
}

fn render_engine_grid(ui: &mut egui::Ui, panels: &[EnginePanel]) {
    ui.label(
        egui::RichText::new("엔진별 예측")
            .size(18.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    for row in panels.chunks(3) {
        ui.columns(3, |columns| {
            for (column, panel) in columns.iter_mut().zip(row) {
                Card::new().title(&panel.label).show(column, |ui| {
                    render_ball_row(ui, &panel.balls, DesignSystem::BALL_SIZE_SMALL);
                });
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }
}

fn render_weight_list(ui: &mut egui::Ui, panels: &[WeightPanel]) {
    Card::new().title("엔진 가중치").show(ui, |ui| {
        egui::Grid::new("engine_weights")
            .num_columns(3)
            .spacing([24.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for panel in panels {
                    ui.label(egui::RichText::new(&panel.label).color(DesignSystem::TEXT_PRIMARY));
                    ui.add(
                        egui::ProgressBar::new(panel.weight.clamp(0.0, 1.0) as f32)
                            .text(panel.weight_label.as_str())
                            .desired_width(220.0),
                    );
                    match &panel.boost_label {
                        Some(boost) => render_status_pill(ui, boost, DesignSystem::HOT),
                        None => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });
    });
}
