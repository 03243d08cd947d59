use reqwest::Client;
use url::Url;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used to read the static documents.
    ///
    /// No retry middleware and no timeout overrides: one call is one request,
    /// bounded by the platform defaults.
    pub fn create_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(4)
            .user_agent(concat!("lottoview/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}

/// Makes `base` usable with [`Url::join`]: a base without a trailing slash
/// would otherwise have its last path segment replaced.
pub fn directory_url(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
