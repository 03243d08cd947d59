//! Plain-text projection of a [`Screen`], used by the headless snapshot.

use crate::interfaces::view_models::screen::{Ball, FrequencyChart, Screen};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::fmt::Write;

/// Width of the longest frequency bar, in characters.
const BAR_WIDTH: f64 = 40.0;

pub fn format_balls(balls: &[Ball]) -> String {
    balls
        .iter()
        .map(|b| format!("{:2}", b.number))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn format_screen(screen: &Screen) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(&mut out, screen);
    out
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn write_screen(out: &mut String, screen: &Screen) -> std::fmt::Result {
    if let Some(header) = &screen.header {
        writeln!(out, "=== {} [{}] ===", header.title, header.mode.label())?;
        if let Some(exported) = &header.exported_at {
            writeln!(out, "업데이트: {}", exported)?;
        }
        if let Some(range) = &header.sum_range {
            writeln!(out, "{}", range)?;
        }
    }
    if screen.reset_visible {
        writeln!(out, "(최신 회차로 돌아가기 가능)")?;
    }

    if let Some(total) = &screen.total_draws {
        writeln!(out, "누적 추첨: {}", total)?;
    }
    if !screen.latest_draw.is_empty() {
        writeln!(out, "최근 당첨: {}", format_balls(&screen.latest_draw))?;
    }

    let summaries = [
        ("핫 넘버", &screen.hot_numbers),
        ("콜드 넘버", &screen.cold_numbers),
        ("지연 번호", &screen.overdue_numbers),
    ];
    for (title, balls) in summaries {
        if !balls.is_empty() {
            writeln!(out, "{}: {}", title, format_balls(balls))?;
        }
    }

    if !screen.prediction_cards.is_empty() {
        let mut table = new_table(vec!["세트", "번호", "신뢰도", "별점", "합계", "홀짝", "AC"]);
        for card in &screen.prediction_cards {
            let sum = match card.sum_in_range {
                Some(true) => format!("{} (적정)", card.summary.sum),
                Some(false) => format!("{} (범위 밖)", card.summary.sum),
                None => card.summary.sum.to_string(),
            };
            table.add_row(vec![
                card.title.clone(),
                format_balls(&card.balls),
                card.confidence_label.clone(),
                "*".repeat(card.stars as usize),
                sum,
                format!("{}:{}", card.summary.odd, card.summary.even),
                card.summary.ac_value.to_string(),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    if !screen.engine_panels.is_empty() {
        let mut table = new_table(vec!["엔진", "예측 번호"]);
        for panel in &screen.engine_panels {
            table.add_row(vec![panel.label.clone(), format_balls(&panel.balls)]);
        }
        writeln!(out, "{table}")?;
    }

    if !screen.weight_panels.is_empty() {
        let mut table = new_table(vec!["엔진", "가중치", "부스트"]);
        for panel in &screen.weight_panels {
            table.add_row(vec![
                panel.label.clone(),
                panel.weight_label.clone(),
                panel.boost_label.clone().unwrap_or_default(),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    if let Some(chart) = &screen.frequency_chart {
        writeln!(out, "{}", frequency_table(chart))?;
    }

    Ok(())
}

fn frequency_table(chart: &FrequencyChart) -> Table {
    let mut table = new_table(vec!["번호", "출현", "분포"]);
    let scale = chart.max_count.max(1) as f64;
    for bar in &chart.bars {
        let width = ((bar.count as f64 / scale) * BAR_WIDTH).round() as usize;
        table.add_row(vec![bar.label.clone(), bar.count.to_string(), "#".repeat(width)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{PredictionSet, StatsPayload};
    use crate::interfaces::view_models::renderer::{
        ball_row, render_engine_insights, render_prediction_set, render_stats,
    };
    use std::collections::BTreeMap;

    /// Terminal columns taken by `s`; Hangul syllables are double width.
    fn display_width(s: &str) -> usize {
        s.chars()
            .map(|c| if ('\u{AC00}'..='\u{D7A3}').contains(&c) { 2 } else { 1 })
            .sum()
    }

    #[test]
    fn test_balls_are_padded() {
        let balls = ball_row(&[3, 45]);
        assert_eq!(format_balls(&balls), " 3 - 45");
    }

    #[test]
    fn test_report_is_stable() {
        let mut screen = Screen::full();
        render_stats(
            &mut screen,
            &StatsPayload {
                total_draws: 1203,
                latest_draw: vec![3, 9, 14, 22, 31, 45],
                rounds: vec![],
            },
        );
        screen.prediction_cards = vec![render_prediction_set(
            &PredictionSet {
                numbers: vec![1, 2, 3, 4, 5, 6],
                confidence: 87.3,
            },
            0,
        )];

        let first = format_screen(&screen);
        let second = format_screen(&screen);
        assert_eq!(first, second);
        assert!(first.contains("1,203회"));
        assert!(first.contains("신뢰도 87.3%"));
    }

    #[test]
    fn test_engine_columns_align_with_mixed_labels() {
        let mut screen = Screen::full();
        let predictions: BTreeMap<String, Vec<u8>> = [
            ("statistical", vec![1, 2, 3, 4, 5, 6]),
            ("mystery", vec![1, 2, 3, 4, 5, 6]),
            ("advanced_pattern", vec![1, 2, 3, 4, 5, 6]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        render_engine_insights(&mut screen, &predictions);

        let report = format_screen(&screen);
        let ball_columns: Vec<usize> = report
            .lines()
            .filter(|line| line.contains(" 1 - "))
            .map(|line| {
                let start = line.find(" 1 - ").unwrap();
                display_width(&line[..start])
            })
            .collect();

        assert_eq!(ball_columns.len(), 3);
        assert!(ball_columns.iter().all(|c| *c == ball_columns[0]));
        assert!(report.contains("심화 패턴 분석"));
        assert!(report.contains("mystery"));
    }

    #[test]
    fn test_empty_screen_renders_nothing() {
        assert!(format_screen(&Screen::full()).is_empty());
    }
}
