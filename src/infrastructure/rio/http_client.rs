use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::domain::DomainError;

const UPSTREAM: &str = "rio";

/// Query parameters as name/value pairs, in request order
pub type QueryParams = Vec<(&'static str, String)>;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(&self, url: &str, query: &QueryParams)
        -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client whose every request is bounded by `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &QueryParams,
    ) -> Result<serde_json::Value, DomainError> {
        debug!(url = %url, params = query.len(), "Upstream GET");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(format!("Resource not found upstream: {}", url)));
        }
        if !status.is_success() {
            return Err(DomainError::upstream(UPSTREAM, format!("HTTP {}", status)));
        }

        response.json().await.map_err(request_error)
    }
}

fn request_error(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(UPSTREAM, "Request timed out")
    } else if err.is_decode() {
        DomainError::upstream(UPSTREAM, format!("Failed to parse response: {}", err))
    } else {
        DomainError::upstream(UPSTREAM, format!("Request failed: {}", err))
    }
}
