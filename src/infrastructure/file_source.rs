use crate::domain::errors::FetchError;
use crate::domain::ports::DataSource;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Reads documents from a local export directory (the `data/` folder the
/// export job writes into).
pub struct FileDataSource {
    dir: PathBuf,
}

impl FileDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch_document(&self, document: &str) -> Result<String, FetchError> {
        let path = self.dir.join(document);
        debug!("Reading {:?}", path);

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::not_found(document),
                _ => FetchError::network(document, e),
            })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
