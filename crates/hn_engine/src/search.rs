use std::time::Duration;

use futures_util::StreamExt;
use hn_logging::hn_debug;

use crate::{SearchError, SearchHit, SearchResponse};

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Runs one free-text query and returns the hits in API order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { settings, client })
    }

    /// `{endpoint}?query=...`; the query is form-encoded and otherwise untouched.
    fn request_url(&self, query: &str) -> Result<url::Url, SearchError> {
        url::Url::parse_with_params(&self.settings.endpoint, [("query", query)])
            .map_err(|err| SearchError::new(err.to_string()))
    }

    fn too_large(&self, actual: u64) -> SearchError {
        SearchError::new(format!(
            "response too large (max {}, actual {actual})",
            self.settings.max_bytes
        ))
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.request_url(query)?;
        hn_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(format!("http status {status}")));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let parsed: SearchResponse = serde_json::from_slice(&body)
            .map_err(|err| SearchError::new(err.to_string()))?;
        hn_debug!("query {:?} returned {} hits", query, parsed.hits.len());
        Ok(parsed.hits)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(format!("timeout: {err}"));
    }
    SearchError::new(err.to_string())
}
