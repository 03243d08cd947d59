use crate::config::{Config, DataLocation};
use crate::domain::ports::DataSource;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::file_source::FileDataSource;
use crate::infrastructure::http_source::HttpDataSource;
use std::sync::Arc;
use tracing::info;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_data_source(config: &Config) -> Arc<dyn DataSource> {
        let source: Arc<dyn DataSource> = match &config.data.location {
            DataLocation::Http(base_url) => Arc::new(HttpDataSource::new(
                HttpClientFactory::create_client(),
                base_url.clone(),
            )),
            DataLocation::Directory(dir) => Arc::new(FileDataSource::new(dir.clone())),
        };
        info!("Dashboard data source: {}", source.describe());
        source
    }
}
