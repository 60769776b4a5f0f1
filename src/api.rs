//! Quotes API client
//!
//! Typed access to the backend quotes service over HTTP/JSON.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::Quote;

/// Errors surfaced by the quotes API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid response body from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

/// Client for the quotes backend
///
/// Wraps a shared `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Fetch quotes, optionally filtered server-side by category
    pub async fn quotes(&self, category: Option<&str>) -> Result<Vec<Quote>, ApiError> {
        match category {
            Some(category) => self.get_json("/quotes", &[("category", category)]).await,
            None => self.get_json("/quotes", &[]).await,
        }
    }

    /// Fetch the list of known categories
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/categories", &[]).await
    }

    /// Fetch a single random quote
    pub async fn random_quote(&self) -> Result<Quote, ApiError> {
        self.get_json("/quotes/random", &[]).await
    }

    /// The three mount-time fetches, dispatched concurrently and awaited
    /// jointly. Fails as a whole if any one of them fails.
    pub async fn initial_load(&self) -> Result<(Vec<Quote>, Vec<String>, Quote), ApiError> {
        tokio::try_join!(self.quotes(None), self.categories(), self.random_quote())
    }
}
