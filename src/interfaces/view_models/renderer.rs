//! Projection of payloads onto the dashboard [`Screen`].
//!
//! Every function here fully replaces the region it owns, so rendering the
//! same input twice yields the same screen. Regions whose mount point is
//! absent are skipped silently.

use crate::application::state::AppState;
use crate::domain::combination::{CombinationSummary, star_rating};
use crate::domain::engine::engine_label;
use crate::domain::prediction::{
    HotCold, NumberStat, PredictionPayload, PredictionSet, StatsPayload, is_boosted,
};
use crate::interfaces::view_models::screen::{
    Ball, DataMode, EnginePanel, MountPoint, PredictionCard, RoundHeader, Screen, WeightPanel,
};
use chrono::Local;
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub const HOT_COUNT: usize = 6;
pub const COLD_COUNT: usize = 6;
pub const OVERDUE_COUNT: usize = 5;

/// Repaints every prediction-driven region from the cached payload.
/// Does nothing before the first successful load.
pub fn render_dashboard(screen: &mut Screen, state: &AppState, set_count: usize) {
    let Some(payload) = state.prediction() else {
        return;
    };

    update_round_header(screen, payload, state.is_historical());
    render_summary_stats(screen, &payload.hot_cold);
    render_prediction_sets(screen, payload, set_count);
    render_engine_insights(screen, &payload.engine_predictions);
    render_engine_weights(screen, payload);
}

pub fn update_round_header(screen: &mut Screen, payload: &PredictionPayload, historical: bool) {
    if screen.is_mounted(MountPoint::RoundHeader) {
        let mode = if historical {
            DataMode::Historical
        } else {
            DataMode::Realtime
        };
        screen.header = Some(RoundHeader {
            round: payload.next_round,
            title: format!("제 {}회 예측 분석 결과", payload.next_round),
            mode,
            exported_at: payload.exported_at().map(|t| {
                t.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            }),
            sum_range: payload
                .sum_range
                .map(|(lo, hi)| format!("최적 합계 {}~{}", lo, hi)),
        });
    }

    screen.reset_visible = historical && screen.is_mounted(MountPoint::ResetControl);
}

pub fn render_summary_stats(screen: &mut Screen, hot_cold: &HotCold) {
    if screen.is_mounted(MountPoint::HotNumbers) {
        screen.hot_numbers = leading_numbers(&hot_cold.hot, HOT_COUNT);
    }
    if screen.is_mounted(MountPoint::ColdNumbers) {
        screen.cold_numbers = leading_numbers(&hot_cold.cold, COLD_COUNT);
    }
    if screen.is_mounted(MountPoint::OverdueNumbers) {
        screen.overdue_numbers = leading_numbers(&hot_cold.overdue, OVERDUE_COUNT);
    }
}

/// First `count` sets in received order; never more than available.
pub fn visible_sets(sets: &[PredictionSet], count: usize) -> &[PredictionSet] {
    &sets[..count.min(sets.len())]
}

pub fn render_prediction_sets(screen: &mut Screen, payload: &PredictionPayload, count: usize) {
    if !screen.is_mounted(MountPoint::PredictionSets) {
        return;
    }

    screen.prediction_cards = visible_sets(&payload.predicted_sets, count)
        .iter()
        .enumerate()
        .map(|(index, set)| {
            let mut card = render_prediction_set(set, index);
            card.sum_in_range = payload.sum_range.map(|range| card.summary.sum_within(range));
            card
        })
        .collect();
}

/// Card for the set at zero-based `index`.
pub fn render_prediction_set(set: &PredictionSet, index: usize) -> PredictionCard {
    let rank = index + 1;
    PredictionCard {
        rank,
        title: format!("앙상블 세트 {}", rank),
        balls: ball_row(&set.numbers),
        confidence: set.confidence,
        confidence_label: format!("신뢰도 {:.1}%", set.confidence),
        stars: star_rating(set.confidence),
        summary: CombinationSummary::of(&set.numbers),
        sum_in_range: None,
    }
}

pub fn render_engine_insights(screen: &mut Screen, predictions: &BTreeMap<String, Vec<u8>>) {
    if !screen.is_mounted(MountPoint::EngineGrid) {
        return;
    }

    screen.engine_panels = predictions
        .iter()
        .map(|(key, numbers)| EnginePanel {
            key: key.clone(),
            label: engine_label(key).to_string(),
            balls: ball_row(numbers),
        })
        .collect();
}

/// Engines by descending weight (ties by key), annotated when boosted.
pub fn render_engine_weights(screen: &mut Screen, payload: &PredictionPayload) {
    if !screen.is_mounted(MountPoint::EngineWeights) {
        return;
    }

    let mut panels: Vec<WeightPanel> = payload
        .final_weights
        .iter()
        .map(|(key, &weight)| {
            let boost = payload.boost_for(key);
            WeightPanel {
                key: key.clone(),
                label: engine_label(key).to_string(),
                weight,
                weight_label: format!("{:.1}%", weight * 100.0),
                boost,
                boost_label: is_boosted(boost)
                    .then(|| format!("+{:.1}% 부스트", (boost - 1.0) * 100.0)),
            }
        })
        .collect();

    panels.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    screen.weight_panels = panels;
}

pub fn render_stats(screen: &mut Screen, stats: &StatsPayload) {
    if screen.is_mounted(MountPoint::TotalDraws) {
        screen.total_draws = Some(format!("{}회", format_thousands(stats.total_draws)));
    }
    if screen.is_mounted(MountPoint::LatestDraw) {
        screen.latest_draw = ball_row(&stats.latest_draw);
    }
    if screen.is_mounted(MountPoint::RoundSelector) {
        // newest first
        screen.round_choices = stats.rounds.iter().rev().copied().collect();
    }
}

pub fn ball_row(numbers: &[u8]) -> Vec<Ball> {
    numbers.iter().map(|&n| Ball::new(n)).collect()
}

fn leading_numbers(stats: &[NumberStat], count: usize) -> Vec<Ball> {
    stats
        .iter()
        .take(count)
        .map(|s| Ball::new(s.number()))
        .collect()
}

/// `1203` -> `"1,203"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::band::NumberBand;
    use crate::interfaces::view_models::text_report::format_screen;
    use serde_json::json;

    fn payload() -> PredictionPayload {
        serde_json::from_value(json!({
            "next_round": 1104,
            "hot_cold": {
                "hot": [[7, 20], [12, 19], [33, 18], [1, 17], [45, 16], [27, 15], [9, 14]],
                "cold": [[3, 2]],
                "overdue": [[5, 15], [6, 14], [8, 13], [10, 12], [11, 11], [13, 10]]
            },
            "predicted_sets": [
                {"numbers": [1, 2, 3, 4, 5, 6], "confidence": 87.3},
                {"numbers": [11, 18, 25, 32, 39, 44], "confidence": 80.06}
            ],
            "engine_predictions": {
                "statistical": [1, 2, 3, 4, 5, 6],
                "AdvancedPattern": [7, 8, 9, 10, 11, 12],
                "mystery": [40, 41]
            },
            "final_weights": {"statistical": 0.25, "gap": 0.4, "lstm": 0.35},
            "dynamic_boosts": {"gap": 1.15, "lstm": 1.0004},
            "sum_range": [100, 175]
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_truncation_drops_frequencies() {
        let mut screen = Screen::full();
        render_summary_stats(&mut screen, &payload().hot_cold);

        assert_eq!(screen.hot_numbers.len(), 6);
        assert_eq!(screen.hot_numbers[0], Ball::new(7));
        assert_eq!(screen.cold_numbers.len(), 1);
        let overdue: Vec<u8> = screen.overdue_numbers.iter().map(|b| b.number).collect();
        assert_eq!(overdue, vec![5, 6, 8, 10, 11]);
    }

    #[test]
    fn test_prediction_card() {
        let set = &payload().predicted_sets[0];
        let card = render_prediction_set(set, 0);

        assert_eq!(card.rank, 1);
        assert_eq!(card.balls.len(), 6);
        assert!(card.balls.iter().all(|b| b.band == NumberBand::OneToTen));
        assert_eq!(card.confidence_label, "신뢰도 87.3%");
        assert_eq!(card.stars, 5);
        assert_eq!(card.summary.sum, 21);
    }

    #[test]
    fn test_confidence_uses_one_decimal() {
        let card = render_prediction_set(&payload().predicted_sets[1], 1);
        assert_eq!(card.rank, 2);
        assert_eq!(card.confidence_label, "신뢰도 80.1%");
    }

    #[test]
    fn test_render_prediction_set_is_idempotent() {
        let set = &payload().predicted_sets[1];
        assert_eq!(render_prediction_set(set, 3), render_prediction_set(set, 3));
    }

    #[test]
    fn test_set_count_larger_than_available() {
        let payload = payload();
        assert_eq!(visible_sets(&payload.predicted_sets, 10).len(), 2);
        assert_eq!(visible_sets(&payload.predicted_sets, 1).len(), 1);
        assert!(visible_sets(&[], 5).is_empty());

        let mut screen = Screen::full();
        render_prediction_sets(&mut screen, &payload, 10);
        assert_eq!(screen.prediction_cards.len(), 2);
        assert_eq!(screen.prediction_cards[0].sum_in_range, Some(false));
        assert_eq!(screen.prediction_cards[1].sum_in_range, Some(true));
    }

    #[test]
    fn test_sets_keep_received_order() {
        let mut payload = payload();
        payload.predicted_sets.reverse();
        let mut screen = Screen::full();
        render_prediction_sets(&mut screen, &payload, 10);
        assert_eq!(screen.prediction_cards[0].confidence, 80.06);
    }

    #[test]
    fn test_engine_labels_and_fallback() {
        let mut screen = Screen::full();
        render_engine_insights(&mut screen, &payload().engine_predictions);

        let labels: Vec<&str> = screen.engine_panels.iter().map(|p| p.label.as_str()).collect();
        assert!(labels.contains(&"통계 분석"));
        assert!(labels.contains(&"심화 패턴 분석"));
        assert!(labels.contains(&"mystery"));
    }

    #[test]
    fn test_weights_sorted_and_boost_annotated() {
        let mut screen = Screen::full();
        render_engine_weights(&mut screen, &payload());

        let keys: Vec<&str> = screen.weight_panels.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["gap", "lstm", "statistical"]);

        assert_eq!(screen.weight_panels[0].weight_label, "40.0%");
        assert_eq!(
            screen.weight_panels[0].boost_label.as_deref(),
            Some("+15.0% 부스트")
        );
        // within epsilon of 1.0
        assert_eq!(screen.weight_panels[1].boost_label, None);
        // absent from dynamic_boosts
        assert_eq!(screen.weight_panels[2].boost, 1.0);
        assert_eq!(screen.weight_panels[2].boost_label, None);
    }

    #[test]
    fn test_header_and_reset_visibility() {
        let mut state = AppState::new();
        state.set_prediction(payload());

        let mut screen = Screen::full();
        render_dashboard(&mut screen, &state, 10);
        let header = screen.header.clone().unwrap();
        assert_eq!(header.title, "제 1104회 예측 분석 결과");
        assert_eq!(header.mode, DataMode::Realtime);
        assert_eq!(header.sum_range.as_deref(), Some("최적 합계 100~175"));
        assert!(!screen.reset_visible);

        state.set_historical(true);
        render_dashboard(&mut screen, &state, 10);
        assert_eq!(screen.header.as_ref().unwrap().mode, DataMode::Historical);
        assert!(screen.reset_visible);
    }

    #[test]
    fn test_unmounted_regions_are_left_alone() {
        let mut state = AppState::new();
        state.set_prediction(payload());

        let mut screen = Screen::without(&[
            MountPoint::PredictionSets,
            MountPoint::EngineWeights,
            MountPoint::ResetControl,
        ]);
        state.set_historical(true);
        render_dashboard(&mut screen, &state, 10);

        assert!(screen.prediction_cards.is_empty());
        assert!(screen.weight_panels.is_empty());
        assert!(!screen.reset_visible);
        assert!(!screen.engine_panels.is_empty());
    }

    #[test]
    fn test_render_dashboard_twice_is_identical() {
        let mut state = AppState::new();
        state.set_prediction(payload());

        let mut screen = Screen::full();
        render_dashboard(&mut screen, &state, 2);
        let first = screen.clone();
        let first_report = format_screen(&screen);

        render_dashboard(&mut screen, &state, 2);
        assert_eq!(screen, first);
        assert_eq!(format_screen(&screen), first_report);
        assert_eq!(screen.prediction_cards.len(), 2);
        assert_eq!(screen.engine_panels.len(), 3);
        assert_eq!(screen.weight_panels.len(), 3);
    }

    #[test]
    fn test_render_without_payload_is_noop() {
        let mut screen = Screen::full();
        render_dashboard(&mut screen, &AppState::new(), 10);
        assert_eq!(screen, Screen::full());
    }

    #[test]
    fn test_stats_region() {
        let stats = StatsPayload {
            total_draws: 1203,
            latest_draw: vec![3, 9, 14, 22, 31, 45],
            rounds: vec![1201, 1202, 1203],
        };
        let mut screen = Screen::full();
        render_stats(&mut screen, &stats);

        assert_eq!(screen.total_draws.as_deref(), Some("1,203회"));
        assert_eq!(screen.latest_draw.len(), 6);
        assert_eq!(screen.round_choices, vec![1203, 1202, 1201]);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
