// src/application/error_handling.rs
//
// User-facing error mapping
//
// - Maps failures -> messages the error region can show as-is
// - Server messages pass through verbatim; internals are logged, not shown

use serde::{Deserialize, Serialize};

use crate::domain::{FailureKind, SubmissionState};
use crate::error::AppError;

/// Standard error response for the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Nothing to submit, or a rejected file type
    Validation,

    /// Scoring service unreachable or answered with an error status
    ExternalService,

    /// Scoring service answered 2xx with an unexpected body
    MalformedResponse,

    /// A submission is already running
    Busy,

    Configuration,

    FileSystem,

    Internal,
}

impl From<FailureKind> for ErrorType {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::MissingInput => ErrorType::Validation,
            FailureKind::TransportFailure => ErrorType::ExternalService,
            FailureKind::MalformedResponse => ErrorType::MalformedResponse,
        }
    }
}

impl ErrorResponse {
    /// Error shown for a failed submission state, if any
    pub fn from_state(state: &SubmissionState) -> Option<Self> {
        match state {
            SubmissionState::Failed { kind, message } => Some(Self {
                error_type: (*kind).into(),
                message: message.clone(),
                details: None,
            }),
            _ => None,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self {
                error_type: ErrorType::Validation,
                message: domain_error.to_string(),
                details: None,
            },

            AppError::SubmissionInFlight => Self {
                error_type: ErrorType::Busy,
                message: "Scoring is already in progress.".to_string(),
                details: None,
            },

            AppError::Config(message) => Self {
                error_type: ErrorType::Configuration,
                message: "Invalid configuration".to_string(),
                details: Some(message.clone()),
            },

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self {
                    error_type: ErrorType::FileSystem,
                    message: "Could not read the file".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self {
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self {
                    error_type: ErrorType::Internal,
                    message: message.clone(),
                    details: None,
                }
            }
        }
    }
}
