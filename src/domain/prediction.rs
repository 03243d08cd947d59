//! Payloads produced by the upstream prediction engines.
//!
//! The dashboard never computes any of this: it only decodes, validates and
//! displays what the export job wrote as static JSON.

use crate::domain::band::in_domain;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// Numbers per predicted combination.
pub const SET_SIZE: usize = 6;

/// Boost differences smaller than this are treated as "no boost".
pub const BOOST_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("round must be a positive integer")]
    InvalidRound,

    #[error("number {number} in {context} is outside 1..=45")]
    NumberOutOfRange { context: String, number: u32 },

    #[error("predicted set #{index} must hold 6 distinct numbers, got {numbers:?}")]
    InvalidSet { index: usize, numbers: Vec<u8> },

    #[error("predicted set #{index} has confidence {confidence} outside 0..=100")]
    ConfidenceOutOfRange { index: usize, confidence: f64 },

    #[error("total_draws must be positive")]
    NoDraws,
}

/// A `(number, value)` pair as written by the producer: `[7, 20]`.
///
/// The value is a frequency for hot/cold and a delay ratio for overdue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberStat(pub u8, pub f64);

impl NumberStat {
    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotCold {
    #[serde(default)]
    pub hot: Vec<NumberStat>,
    #[serde(default)]
    pub cold: Vec<NumberStat>,
    #[serde(default)]
    pub overdue: Vec<NumberStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    pub numbers: Vec<u8>,
    /// Percentage in [0, 100].
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub next_round: u32,
    #[serde(default)]
    pub latest_round: Option<u32>,
    pub hot_cold: HotCold,
    /// Upstream order is kept as-is (descending confidence by convention).
    pub predicted_sets: Vec<PredictionSet>,
    pub engine_predictions: BTreeMap<String, Vec<u8>>,
    #[serde(default)]
    pub final_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub dynamic_boosts: BTreeMap<String, f64>,
    /// Optimal (min, max) sum of a combination.
    #[serde(default)]
    pub sum_range: Option<(u32, u32)>,
    /// Unix seconds of the export.
    #[serde(default)]
    pub export_time: Option<f64>,
}

impl PredictionPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.next_round == 0 {
            return Err(ValidationError::InvalidRound);
        }

        let summaries = [
            ("hot", &self.hot_cold.hot),
            ("cold", &self.hot_cold.cold),
            ("overdue", &self.hot_cold.overdue),
        ];
        for (context, stats) in summaries {
            check_numbers(context, stats.iter().map(NumberStat::number))?;
        }

        for (index, set) in self.predicted_sets.iter().enumerate() {
            check_numbers("predicted_sets", set.numbers.iter().copied())?;
            let distinct: HashSet<_> = set.numbers.iter().collect();
            if set.numbers.len() != SET_SIZE || distinct.len() != SET_SIZE {
                return Err(ValidationError::InvalidSet {
                    index,
                    numbers: set.numbers.clone(),
                });
            }
            if !(0.0..=100.0).contains(&set.confidence) {
                return Err(ValidationError::ConfidenceOutOfRange {
                    index,
                    confidence: set.confidence,
                });
            }
        }

        for (engine, numbers) in &self.engine_predictions {
            check_numbers(engine, numbers.iter().copied())?;
        }

        Ok(())
    }

    /// Boost multiplier of an engine; engines without an entry are unboosted.
    pub fn boost_for(&self, engine: &str) -> f64 {
        self.dynamic_boosts.get(engine).copied().unwrap_or(1.0)
    }

    pub fn exported_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.export_time.filter(|t| *t > 0.0)?;
        Utc.timestamp_opt(secs.trunc() as i64, 0).single()
    }
}

/// Whether `boost` deserves an annotation.
pub fn is_boosted(boost: f64) -> bool {
    boost - 1.0 > BOOST_EPSILON
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsPayload {
    pub total_draws: u64,
    pub latest_draw: Vec<u8>,
    /// Most recent round ids, oldest first.
    #[serde(default)]
    pub rounds: Vec<u32>,
}

impl StatsPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_draws == 0 {
            return Err(ValidationError::NoDraws);
        }
        check_numbers("latest_draw", self.latest_draw.iter().copied())
    }
}

/// Occurrence count per stringified number. Key order is not meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyPayload(pub HashMap<String, u64>);

impl FrequencyPayload {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn check_numbers(context: &str, numbers: impl Iterator<Item = u8>) -> Result<(), ValidationError> {
    for number in numbers {
        if !in_domain(number as u32) {
            return Err(ValidationError::NumberOutOfRange {
                context: context.to_string(),
                number: number as u32,
            });
        }
    }
    Ok(())
}
