use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use super::types::{parse_suggestions, SearchError, SuggestionItem};
use crate::config::SearchConfig;

/// Anything that can answer a suggestion query
///
/// The worker is generic over this so tests can run it without a server.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(
        &self,
        query: &str,
        mode: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, SearchError>> + Send;
}

/// Join the configured base URL and endpoint path
pub fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url, SearchError> {
    let base = Url::parse(base_url)
        .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    if base.cannot_be_a_base() {
        return Err(SearchError::InvalidUrl(format!(
            "{}: cannot be used as a base URL",
            base_url
        )));
    }
    base.join(endpoint)
        .map_err(|e| SearchError::InvalidUrl(format!("{}: {}", endpoint, e)))
}

/// HTTP client for `GET /search_characters?query=..&mode=..`
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoint = endpoint_url(&config.base_url, &config.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let http = builder
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// Full request URL with `query` and `mode` URL-encoded
    pub fn request_url(&self, query: &str, mode: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("mode", mode);
        url
    }

    /// Fetch suggestions for `query` in `mode`
    ///
    /// Non-2xx statuses and bodies that are not a JSON array are errors.
    pub async fn search(&self, query: &str, mode: &str) -> Result<Vec<SuggestionItem>, SearchError> {
        let url = self.request_url(query, mode);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        parse_suggestions(&body)
    }
}

impl SuggestionSource for SearchClient {
    fn fetch(
        &self,
        query: &str,
        mode: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, SearchError>> + Send {
        self.search(query, mode)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
