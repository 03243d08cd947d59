use crate::domain::errors::FetchError;
use crate::domain::ports::DataSource;
use crate::domain::prediction::{FrequencyPayload, PredictionPayload, StatsPayload};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, info};

pub const PREDICTION_DOCUMENT: &str = "prediction.json";
pub const STATS_DOCUMENT: &str = "stats.json";
pub const FREQUENCIES_DOCUMENT: &str = "frequencies.json";

/// Name of the prediction document for `round`, or the latest one.
pub fn prediction_document(round: Option<NonZeroU32>) -> String {
    match round {
        Some(round) => format!("prediction_{}.json", round),
        None => PREDICTION_DOCUMENT.to_string(),
    }
}

/// Loads and validates dashboard documents. Holds no cache: every call is
/// exactly one request to the underlying source.
#[derive(Clone)]
pub struct DataFetcher {
    source: Arc<dyn DataSource>,
}

impl DataFetcher {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_prediction(
        &self,
        round: Option<NonZeroU32>,
    ) -> Result<PredictionPayload, FetchError> {
        let document = prediction_document(round);
        let payload: PredictionPayload = self.fetch_json(&document).await?;
        payload
            .validate()
            .map_err(|e| FetchError::data(&document, e))?;

        info!(
            "Loaded {} (round {}, {} sets, {} engines)",
            document,
            payload.next_round,
            payload.predicted_sets.len(),
            payload.engine_predictions.len()
        );
        Ok(payload)
    }

    pub async fn fetch_stats(&self) -> Result<StatsPayload, FetchError> {
        let stats: StatsPayload = self.fetch_json(STATS_DOCUMENT).await?;
        stats
            .validate()
            .map_err(|e| FetchError::data(STATS_DOCUMENT, e))?;
        Ok(stats)
    }

    pub async fn fetch_frequencies(&self) -> Result<FrequencyPayload, FetchError> {
        self.fetch_json(FREQUENCIES_DOCUMENT).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, document: &str) -> Result<T, FetchError> {
        let body = self.source.fetch_document(document).await?;
        debug!("{}: {} bytes", document, body.len());
        decode_document(document, &body)
    }
}

/// Two-phase decode: an embedded `"error"` field wins over any shape error.
pub fn decode_document<T: DeserializeOwned>(document: &str, body: &str) -> Result<T, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::data(document, e))?;

    if let Some(embedded) = value.get("error").filter(|e| is_truthy(e)) {
        let reason = embedded
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| embedded.to_string());
        return Err(FetchError::data(document, reason));
    }

    serde_json::from_value(value).map_err(|e| FetchError::data(document, e))
}

/// `null`, `false`, `0` and `""` mean the producer reported no error.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::MockDataSource;

    const PREDICTION: &str = r#"{
        "next_round": 1104,
        "hot_cold": {"hot": [[7, 20]], "cold": [[3, 2]], "overdue": [[5, 15]]},
        "predicted_sets": [{"numbers": [1, 2, 3, 4, 5, 6], "confidence": 87.3}],
        "engine_predictions": {"statistical": [1, 2, 3, 4, 5, 6]}
    }"#;

    fn fetcher(source: MockDataSource) -> DataFetcher {
        DataFetcher::new(Arc::new(source))
    }

    #[test]
    fn test_document_names() {
        assert_eq!(prediction_document(None), "prediction.json");
        assert_eq!(
            prediction_document(NonZeroU32::new(1100)),
            "prediction_1100.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_prediction() {
        let fetcher = fetcher(MockDataSource::new().with_document("prediction.json", PREDICTION));
        let payload = fetcher.fetch_prediction(None).await.unwrap();
        assert_eq!(payload.next_round, 1104);
        assert_eq!(payload.predicted_sets.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_historical_round_is_not_found() {
        let fetcher = fetcher(MockDataSource::new());
        let err = fetcher
            .fetch_prediction(NonZeroU32::new(7))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::not_found("prediction_7.json"));
    }

    #[tokio::test]
    async fn test_embedded_error_is_data_error() {
        let fetcher = fetcher(
            MockDataSource::new()
                .with_document("prediction.json", r#"{"error": "not enough draws"}"#),
        );
        let err = fetcher.fetch_prediction(None).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::data("prediction.json", "not enough draws")
        );
    }

    #[test]
    fn test_empty_error_field_is_ignored() {
        for error in ["null", "\"\"", "false", "0"] {
            let body = format!(
                r#"{{"error": {}, "total_draws": 3, "latest_draw": [1, 2, 3, 4, 5, 6]}}"#,
                error
            );
            let stats: StatsPayload = decode_document("stats.json", &body).unwrap();
            assert_eq!(stats.total_draws, 3);
            assert_eq!(stats.latest_draw, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_non_string_error_is_reported() {
        let err = decode_document::<StatsPayload>("stats.json", r#"{"error": {"code": 5}}"#)
            .unwrap_err();
        assert_eq!(err, FetchError::data("stats.json", r#"{"code":5}"#));
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let fetcher = fetcher(MockDataSource::new().with_status("stats.json", 500));
        assert!(matches!(
            fetcher.fetch_stats().await,
            Err(FetchError::Network { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_data_error() {
        let body = PREDICTION.replace("[1, 2, 3, 4, 5, 6], \"confidence\"", "[1, 2, 3], \"confidence\"");
        let fetcher = fetcher(MockDataSource::new().with_document("prediction.json", body));
        let err = fetcher.fetch_prediction(None).await.unwrap_err();
        assert!(matches!(err, FetchError::Data { .. }));
        assert!(err.to_string().contains("6 distinct numbers"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_data_error() {
        let fetcher = fetcher(MockDataSource::new().with_document("frequencies.json", "{\"1\": "));
        assert!(matches!(
            fetcher.fetch_frequencies().await,
            Err(FetchError::Data { .. })
        ));
    }

    #[test]
    fn test_frequencies_decode() {
        let freq: FrequencyPayload =
            decode_document("frequencies.json", r#"{"1": 150, "10": 140, "2": 160}"#).unwrap();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.0.get("10"), Some(&140));
    }
}
