use thiserror::Error;

/// Errors raised while loading a dashboard document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request for {document} failed: {reason}")]
    Network { document: String, reason: String },

    #[error("Document not found: {document}")]
    NotFound { document: String },

    #[error("Invalid data in {document}: {reason}")]
    Data { document: String, reason: String },
}

impl FetchError {
    pub fn network(document: &str, reason: impl ToString) -> Self {
        FetchError::Network {
            document: document.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(document: &str) -> Self {
        FetchError::NotFound {
            document: document.to_string(),
        }
    }

    pub fn data(document: &str, reason: impl ToString) -> Self {
        FetchError::Data {
            document: document.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Maps a non-success status code onto the taxonomy.
    pub fn from_status(document: &str, status: u16) -> Self {
        if status == 404 {
            Self::not_found(document)
        } else {
            Self::network(document, format!("HTTP status {}", status))
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    pub fn document(&self) -> &str {
        match self {
            FetchError::Network { document, .. }
            | FetchError::NotFound { document }
            | FetchError::Data { document, .. } => document,
        }
    }
}
