use crate::domain::band::NumberBand;
use crate::domain::combination::CombinationSummary;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Regions of the dashboard a renderer can write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MountPoint {
    RoundHeader,
    RoundSelector,
    ResetControl,
    TotalDraws,
    LatestDraw,
    HotNumbers,
    ColdNumbers,
    OverdueNumbers,
    PredictionSets,
    EngineGrid,
    EngineWeights,
    FrequencyChart,
    Loader,
}

impl MountPoint {
    pub const ALL: [MountPoint; 13] = [
        MountPoint::RoundHeader,
        MountPoint::RoundSelector,
        MountPoint::ResetControl,
        MountPoint::TotalDraws,
        MountPoint::LatestDraw,
        MountPoint::HotNumbers,
        MountPoint::ColdNumbers,
        MountPoint::OverdueNumbers,
        MountPoint::PredictionSets,
        MountPoint::EngineGrid,
        MountPoint::EngineWeights,
        MountPoint::FrequencyChart,
        MountPoint::Loader,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::RoundHeader => "round-header",
            MountPoint::RoundSelector => "round-selector",
            MountPoint::ResetControl => "reset-control",
            MountPoint::TotalDraws => "total-draws",
            MountPoint::LatestDraw => "latest-draw",
            MountPoint::HotNumbers => "hot-numbers",
            MountPoint::ColdNumbers => "cold-numbers",
            MountPoint::OverdueNumbers => "overdue-numbers",
            MountPoint::PredictionSets => "prediction-sets",
            MountPoint::EngineGrid => "engine-grid",
            MountPoint::EngineWeights => "engine-weights",
            MountPoint::FrequencyChart => "frequency-chart",
            MountPoint::Loader => "loader",
        }
    }
}

impl FromStr for MountPoint {
    type Err = anyhow::Error;

    /// Accepts the kebab-case id, with `_` allowed in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        MountPoint::ALL
            .into_iter()
            .find(|m| m.id() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown panel: {}", s))
    }
}

/// A colored number ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub number: u8,
    pub band: NumberBand,
}

impl Ball {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            band: NumberBand::of(number as u32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Realtime,
    Historical,
}

impl DataMode {
    pub fn label(&self) -> &'static str {
        match self {
            DataMode::Realtime => "실시간 분석",
            DataMode::Historical => "과거 데이터",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundHeader {
    pub round: u32,
    pub title: String,
    pub mode: DataMode,
    pub exported_at: Option<String>,
    pub sum_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    /// 1-based rank in the received order.
    pub rank: usize,
    pub title: String,
    pub balls: Vec<Ball>,
    pub confidence: f64,
    pub confidence_label: String,
    pub stars: u8,
    pub summary: CombinationSummary,
    /// Whether the sum lies inside the payload's optimal range, when known.
    pub sum_in_range: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnginePanel {
    pub key: String,
    pub label: String,
    pub balls: Vec<Ball>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightPanel {
    pub key: String,
    pub label: String,
    pub weight: f64,
    pub weight_label: String,
    pub boost: f64,
    /// Present only for engines boosted above 1.0.
    pub boost_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyBar {
    pub number: u32,
    pub label: String,
    pub count: u64,
    pub band: NumberBand,
    pub tooltip_title: String,
    pub tooltip_body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyChart {
    pub bars: Vec<FrequencyBar>,
    pub max_count: u64,
}

impl FrequencyChart {
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Retained content of every dashboard region.
///
/// Renderers overwrite whole regions; regions whose mount point is absent are
/// never written and stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    mounted: BTreeSet<MountPoint>,
    pub header: Option<RoundHeader>,
    /// The reset-to-latest control is offered only while viewing history.
    pub reset_visible: bool,
    pub round_choices: Vec<u32>,
    pub total_draws: Option<String>,
    pub latest_draw: Vec<Ball>,
    pub hot_numbers: Vec<Ball>,
    pub cold_numbers: Vec<Ball>,
    pub overdue_numbers: Vec<Ball>,
    pub prediction_cards: Vec<PredictionCard>,
    pub engine_panels: Vec<EnginePanel>,
    pub weight_panels: Vec<WeightPanel>,
    pub frequency_chart: Option<FrequencyChart>,
}

impl Screen {
    pub fn with_mounts(mounts: impl IntoIterator<Item = MountPoint>) -> Self {
        Self {
            mounted: mounts.into_iter().collect(),
            header: None,
            reset_visible: false,
            round_choices: Vec::new(),
            total_draws: None,
            latest_draw: Vec::new(),
            hot_numbers: Vec::new(),
            cold_numbers: Vec::new(),
            overdue_numbers: Vec::new(),
            prediction_cards: Vec::new(),
            engine_panels: Vec::new(),
            weight_panels: Vec::new(),
            frequency_chart: None,
        }
    }

    /// Every region mounted.
    pub fn full() -> Self {
        Self::with_mounts(MountPoint::ALL)
    }

    /// Every region except `hidden`.
    pub fn without(hidden: &[MountPoint]) -> Self {
        Self::with_mounts(MountPoint::ALL.into_iter().filter(|m| !hidden.contains(m)))
    }

    pub fn is_mounted(&self, mount: MountPoint) -> bool {
        self.mounted.contains(&mount)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_point_parsing() {
        assert_eq!(
            "engine-weights".parse::<MountPoint>().unwrap(),
            MountPoint::EngineWeights
        );
        assert_eq!(
            "Frequency_Chart".parse::<MountPoint>().unwrap(),
            MountPoint::FrequencyChart
        );
        assert!("sidebar".parse::<MountPoint>().is_err());
    }

    #[test]
    fn test_screen_without_hidden_regions() {
        let screen = Screen::without(&[MountPoint::FrequencyChart]);
        assert!(!screen.is_mounted(MountPoint::FrequencyChart));
        assert!(screen.is_mounted(MountPoint::PredictionSets));
        assert!(Screen::full().is_mounted(MountPoint::FrequencyChart));
    }

    #[test]
    fn test_ball_band() {
        assert_eq!(Ball::new(41).band, NumberBand::FortyOneToFortyFive);
    }
}
