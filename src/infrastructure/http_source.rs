use crate::domain::errors::FetchError;
use crate::domain::ports::DataSource;
use crate::infrastructure::core::http_client_factory::directory_url;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Reads documents from a static web directory, e.g. `https://host/data/`.
pub struct HttpDataSource {
    client: Client,
    base_url: Url,
}

impl HttpDataSource {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url: directory_url(base_url),
        }
    }

    pub fn document_url(&self, document: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(document)
            .map_err(|e| FetchError::network(document, format!("invalid URL: {}", e)))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_document(&self, document: &str) -> Result<String, FetchError> {
        let url = self.document_url(document)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(document, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(document, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(document, e))
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::core::HttpClientFactory;

    #[test]
    fn test_document_url_is_relative_to_base() {
        let source = HttpDataSource::new(
            HttpClientFactory::create_client(),
            Url::parse("http://localhost:8002/data").unwrap(),
        );
        let url = source.document_url("prediction_1100.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8002/data/prediction_1100.json");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let source = HttpDataSource::new(
            HttpClientFactory::create_client(),
            Url::parse("http://127.0.0.1:9/data/").unwrap(),
        );
        let result = tokio_test::block_on(source.fetch_document("stats.json"));
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }
}
