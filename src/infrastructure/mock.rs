use crate::domain::errors::FetchError;
use crate::domain::ports::DataSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
}

/// In-memory document store with scripted failures and latencies.
#[derive(Default)]
pub struct MockDataSource {
    responses: Mutex<HashMap<String, MockResponse>>,
    delays: Mutex<HashMap<String, Duration>>,
    requests: Mutex<Vec<String>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, document: &str, body: impl Into<String>) -> Self {
        self.set_document(document, body);
        self
    }

    pub fn with_status(self, document: &str, status: u16) -> Self {
        self.set_status(document, status);
        self
    }

    pub fn with_delay(self, document: &str, delay: Duration) -> Self {
        lock(&self.delays).insert(document.to_string(), delay);
        self
    }

    /// Replaces (or adds) a document after construction.
    pub fn set_document(&self, document: &str, body: impl Into<String>) {
        lock(&self.responses).insert(document.to_string(), MockResponse::Body(body.into()));
    }

    pub fn set_status(&self, document: &str, status: u16) {
        lock(&self.responses).insert(document.to_string(), MockResponse::Status(status));
    }

    /// Every document requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self, document: &str) -> usize {
        self.requests().iter().filter(|r| *r == document).count()
    }
}

/// Recovers the guard of a lock poisoned by a panicking test.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch_document(&self, document: &str) -> Result<String, FetchError> {
        lock(&self.requests).push(document.to_string());

        let delay = lock(&self.delays).get(document).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = lock(&self.responses).get(document).cloned();

        debug!("MockDataSource: {} requested", document);
        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(FetchError::from_status(document, status)),
            None => Err(FetchError::not_found(document)),
        }
    }

    fn describe(&self) -> String {
        "in-memory mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses() {
        let source = MockDataSource::new()
            .with_document("stats.json", "{}")
            .with_status("frequencies.json", 500);

        assert_eq!(source.fetch_document("stats.json").await.unwrap(), "{}");
        assert!(matches!(
            source.fetch_document("frequencies.json").await,
            Err(FetchError::Network { .. })
        ));
        assert!(
            source
                .fetch_document("prediction.json")
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert_eq!(source.request_count("stats.json"), 1);
        assert_eq!(source.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_poisoned_lock_keeps_scripts() {
        let source = MockDataSource::new().with_document("stats.json", "{}");

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = source.responses.lock().unwrap();
            panic!("script failed mid-update");
        }));
        assert!(poisoned.is_err());
        assert!(source.responses.is_poisoned());

        source.set_document("prediction.json", "{\"next_round\": 2}");
        assert_eq!(source.fetch_document("stats.json").await.unwrap(), "{}");
        assert_eq!(
            source.fetch_document("prediction.json").await.unwrap(),
            "{\"next_round\": 2}"
        );
        assert_eq!(source.requests(), vec!["stats.json", "prediction.json"]);
    }
}
