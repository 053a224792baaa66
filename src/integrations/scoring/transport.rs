// src/integrations/scoring/transport.rs
//
// Transport seam between the submission coordinator and the network.
// Implementations only move bytes; interpreting status codes and bodies
// is the coordinator's job.

use async_trait::async_trait;
use thiserror::Error;

use super::request::ScoreRequest;

/// Raw completion of a scoring call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The call produced no response at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request could not be completed: {0}")]
    Connection(String),

    #[error("Request could not be encoded: {0}")]
    Encoding(String),
}

/// One POST of a score request. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringTransport: Send + Sync {
    async fn send(&self, request: ScoreRequest) -> Result<TransportResponse, TransportError>;
}
