use crate::config::ScrapeConfig;
use crate::error::FetchError;
use crate::fetchers::Fetcher;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use url::Url;

/// [`Fetcher`] backed by a `reqwest` client carrying the browser-like header
/// set and the per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client from the header set and timeout in `config`
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(default_headers(config))
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        ::log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        Ok(self.get(url).await?.text().await?)
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}

fn default_headers(config: &ScrapeConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in [
        (USER_AGENT, &config.user_agent),
        (ACCEPT, &config.accept),
        (ACCEPT_LANGUAGE, &config.accept_language),
    ] {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(e) => ::log::warn!("Dropping invalid {} header: {}", name, e),
        }
    }
    headers
}
