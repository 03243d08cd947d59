use crate::domain::errors::FetchError;
use async_trait::async_trait;

/// Read-only access to the directory of pre-computed JSON documents.
///
/// One call is one request: implementations must not retry or cache.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the raw body of `document` (e.g. `prediction.json`).
    async fn fetch_document(&self, document: &str) -> Result<String, FetchError>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}
