pub mod client;
pub mod request;
pub mod transport;

#[cfg(test)]
mod client_tests;

pub use client::HttpScoringClient;
pub use request::{ScoreRequest, FILE_FIELD, SCORE_PATH, TEXT_FIELD};
pub use transport::{ScoringTransport, TransportError, TransportResponse};

#[cfg(test)]
pub use transport::MockScoringTransport;
