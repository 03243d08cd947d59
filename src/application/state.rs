use crate::domain::prediction::{PredictionPayload, PredictionSet};

/// Identifies one prediction request. Tokens only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Session state of the dashboard: the last successfully loaded payload,
/// the round it describes and whether that round is a historical one.
///
/// Owned by the controller and lent to the renderer; it is only written
/// when a completed response is applied, never while a fetch is in flight.
#[derive(Debug, Default)]
pub struct AppState {
    prediction: Option<PredictionPayload>,
    current_round: Option<u32>,
    is_historical: bool,
    last_token: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached payload wholesale.
    pub fn set_prediction(&mut self, payload: PredictionPayload) {
        self.current_round = Some(payload.next_round);
        self.prediction = Some(payload);
    }

    pub fn prediction(&self) -> Option<&PredictionPayload> {
        self.prediction.as_ref()
    }

    /// Predicted sets of the cached payload (empty before the first load).
    pub fn all_predictions(&self) -> &[PredictionSet] {
        self.prediction
            .as_ref()
            .map(|p| p.predicted_sets.as_slice())
            .unwrap_or_default()
    }

    pub fn current_round(&self) -> Option<u32> {
        self.current_round
    }

    pub fn set_historical(&mut self, historical: bool) {
        self.is_historical = historical;
    }

    pub fn is_historical(&self) -> bool {
        self.is_historical
    }

    /// Issues a new token; every previously issued token becomes stale.
    pub fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::HotCold;

    fn payload(round: u32) -> PredictionPayload {
        PredictionPayload {
            next_round: round,
            latest_round: None,
            hot_cold: HotCold::default(),
            predicted_sets: vec![PredictionSet {
                numbers: vec![1, 2, 3, 4, 5, 6],
                confidence: 50.0,
            }],
            engine_predictions: Default::default(),
            final_weights: Default::default(),
            dynamic_boosts: Default::default(),
            sum_range: None,
            export_time: None,
        }
    }

    #[test]
    fn test_defaults() {
        let state = AppState::new();
        assert!(state.prediction().is_none());
        assert!(state.all_predictions().is_empty());
        assert_eq!(state.current_round(), None);
        assert!(!state.is_historical());
    }

    #[test]
    fn test_set_prediction_replaces_payload() {
        let mut state = AppState::new();
        state.set_prediction(payload(1100));
        state.set_prediction(payload(1104));
        assert_eq!(state.current_round(), Some(1104));
        assert_eq!(state.all_predictions().len(), 1);
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let mut state = AppState::new();
        let first = state.issue_token();
        assert!(state.is_current(first));

        let second = state.issue_token();
        assert!(second > first);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
