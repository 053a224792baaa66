// src/integrations/scoring/client.rs
//
// Scoring service HTTP client
//
// ARCHITECTURE:
// - Multipart POST to the scoring endpoint
// - Returns raw status + body, no interpretation
// - No retries; the timeout is opt-in through configuration
//
// This is INFRASTRUCTURE: it never touches session state.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;

use super::request::{ScoreRequest, SCORE_PATH};
use super::transport::{ScoringTransport, TransportError, TransportResponse};
use crate::error::{AppError, AppResult};

/// HTTP implementation of `ScoringTransport`
pub struct HttpScoringClient {
    endpoint: Url,
    http_client: Client,
}

impl HttpScoringClient {
    /// Create a client for `base_url` (scheme, host and port).
    ///
    /// Without a timeout the call waits for the transport's own completion,
    /// which may never come if the server hangs.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let endpoint = Self::endpoint_for(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Resolve the full scoring endpoint from a base URL
    pub fn endpoint_for(base_url: &str) -> AppResult<Url> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid scoring URL '{}': {}", base_url, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Scoring URL must use http or https: {}",
                base_url
            )));
        }

        let path = format!("{}{}", base.path().trim_end_matches('/'), SCORE_PATH);
        let mut endpoint = base;
        endpoint.set_path(&path);
        Ok(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringTransport for HttpScoringClient {
    async fn send(&self, request: ScoreRequest) -> Result<TransportResponse, TransportError> {
        let field = request.field_name();
        let form = request
            .into_form()
            .map_err(|e| TransportError::Encoding(e.to_string()))?;

        log::debug!("POST {} (multipart field '{}')", self.endpoint, field);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        log::debug!("Scoring service answered {} ({} bytes)", status, body.len());

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_host_and_port() {
        let url = HttpScoringClient::endpoint_for("http://localhost:8000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/score-lor");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = HttpScoringClient::endpoint_for("https://scoring.example.org/api/").unwrap();
        assert_eq!(url.as_str(), "https://scoring.example.org/api/score-lor");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        assert!(matches!(
            HttpScoringClient::endpoint_for("not a url"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            HttpScoringClient::endpoint_for("ftp://localhost:8000"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_client_creation() {
        let client = HttpScoringClient::new("http://127.0.0.1:9000", None).unwrap();
        assert_eq!(client.endpoint().port(), Some(9000));
    }
}
