use crate::domain::band::NumberBand;
use crate::domain::prediction::FrequencyPayload;
use crate::interfaces::view_models::screen::{FrequencyBar, FrequencyChart, MountPoint, Screen};
use tracing::warn;

/// Builds one bar per number, in ascending numeric order ("9" before "10"),
/// colored with the same bands as the balls.
pub fn build_frequency_chart(payload: &FrequencyPayload) -> FrequencyChart {
    let mut entries: Vec<(u32, &String, u64)> = payload
        .0
        .iter()
        .filter_map(|(key, &count)| match key.trim().parse::<u32>() {
            Ok(number) => Some((number, key, count)),
            Err(_) => {
                warn!("Skipping non-numeric frequency key {:?}", key);
                None
            }
        })
        .collect();
    entries.sort_by_key(|(number, _, _)| *number);

    let bars: Vec<FrequencyBar> = entries
        .into_iter()
        .map(|(number, key, count)| FrequencyBar {
            number,
            label: key.trim().to_string(),
            count,
            band: NumberBand::of(number),
            tooltip_title: format!("{}번", number),
            tooltip_body: format!("총 {}회 출현", count),
        })
        .collect();

    let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);
    FrequencyChart { bars, max_count }
}

/// Draws the chart into its region; without a mount point this is a no-op.
pub fn render_frequency_chart(screen: &mut Screen, payload: &FrequencyPayload) {
    if !screen.is_mounted(MountPoint::FrequencyChart) {
        return;
    }
    screen.frequency_chart = Some(build_frequency_chart(payload));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn payload(entries: &[(&str, u64)]) -> FrequencyPayload {
        FrequencyPayload(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_numeric_label_order() {
        let chart = build_frequency_chart(&payload(&[("9", 1), ("10", 2), ("2", 3)]));
        assert_eq!(chart.labels(), vec!["2", "9", "10"]);
        assert_eq!(chart.max_count, 3);
    }

    #[test]
    fn test_bars_share_ball_bands() {
        let chart = build_frequency_chart(&payload(&[("10", 5), ("11", 6), ("45", 7)]));
        let bands: Vec<NumberBand> = chart.bars.iter().map(|b| b.band).collect();
        assert_eq!(
            bands,
            vec![
                NumberBand::OneToTen,
                NumberBand::ElevenToTwenty,
                NumberBand::FortyOneToFortyFive
            ]
        );
        assert_eq!(chart.bars[2].tooltip_title, "45번");
        assert_eq!(chart.bars[2].tooltip_body, "총 7회 출현");
    }

    #[test]
    fn test_full_domain() {
        let entries: Vec<(String, u64)> = (1..=45).rev().map(|n| (n.to_string(), n as u64)).collect();
        let freq = FrequencyPayload(entries.into_iter().collect());
        let chart = build_frequency_chart(&freq);
        let numbers: Vec<u32> = chart.bars.iter().map(|b| b.number).collect();
        assert_eq!(numbers, (1..=45).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_numeric_keys_are_skipped() {
        let chart = build_frequency_chart(&payload(&[("bonus", 1), ("3", 2)]));
        assert_eq!(chart.labels(), vec!["3"]);
    }

    #[test]
    fn test_missing_mount_point_is_noop() {
        let mut screen = Screen::without(&[MountPoint::FrequencyChart]);
        render_frequency_chart(&mut screen, &payload(&[("1", 1)]));
        assert!(screen.frequency_chart.is_none());
    }
}
