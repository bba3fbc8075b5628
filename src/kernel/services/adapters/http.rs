//! HTTP transport for the search endpoint (reqwest).

use crate::kernel::services::ports::{
    BoxResponseFuture, RawResponse, SearchError, SearchTransport, Settings,
};
use std::time::Duration;

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Transport(e.to_string())
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Uses a preconfigured client (proxy, TLS, headers) as is.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        Self::new(
            settings.endpoint.clone(),
            Duration::from_millis(settings.request_timeout_ms),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchTransport for HttpTransport {
    fn get(&self, query: &str, page: u32) -> BoxResponseFuture {
        let request = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("q", query.to_string()), ("page", page.to_string())]);

        Box::pin(async move {
            let response = request.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await?.to_vec();

            Ok(RawResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                content_type,
                body,
            })
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http.rs"]
mod tests;
