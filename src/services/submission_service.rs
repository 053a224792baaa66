// src/services/submission_service.rs
//
// Submission Coordinator
//
// - Validates the selection synchronously (no request for missing input)
// - Moves the session to Pending and builds exactly one multipart field
// - Awaits a single POST, no retries
// - Maps the outcome into Succeeded / Failed; Pending never survives an attempt
//
// The attempt is split in three so an event loop can keep handling input
// while the request runs: prepare (sync) -> execute (async) -> complete (sync).

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{
    out_of_range_domains, DomainError, FailureKind, ScoreResult, SubmissionEvent, SubmissionState,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, ScoreReceived, StaleResponseDiscarded, SubmissionFailed, SubmissionStarted,
};
use crate::integrations::{ScoreRequest, ScoringTransport, TransportError, TransportResponse};
use crate::services::input_service::InputStateManager;

/// Shown when the service gives no usable error message
pub const GENERIC_FAILURE_MESSAGE: &str = "Error scoring LOR.";

/// Shown when a 2xx body is not a score payload
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Error scoring LOR: unexpected response format.";

/// An attempt that has entered Pending and is ready to be sent
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    pub sequence: u64,
    pub request: ScoreRequest,
}

/// How a sent attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Scored(ScoreResult),
    Failed { kind: FailureKind, message: String },
}

/// A finished attempt waiting to be applied to the session
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSubmission {
    pub sequence: u64,
    pub outcome: SubmissionOutcome,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}

/// Pull a displayable message out of an error body: a non-empty string
/// `error` field of a JSON object, verbatim.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.error? {
        serde_json::Value::String(message) if !message.is_empty() => Some(message),
        _ => None,
    }
}

/// Turn a raw transport completion into an outcome
pub fn interpret_response(
    response: Result<TransportResponse, TransportError>,
) -> SubmissionOutcome {
    let response = match response {
        Ok(response) => response,
        Err(e) => {
            log::error!("Scoring request failed: {}", e);
            return SubmissionOutcome::Failed {
                kind: FailureKind::TransportFailure,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            };
        }
    };

    if !response.is_success() {
        let message = extract_error_message(&response.body)
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        log::error!(
            "Scoring service returned status {}: {}",
            response.status,
            message
        );
        return SubmissionOutcome::Failed {
            kind: FailureKind::TransportFailure,
            message,
        };
    }

    match serde_json::from_slice::<ScoreResult>(&response.body) {
        Ok(result) => SubmissionOutcome::Scored(result),
        Err(e) => {
            log::error!("Scoring response did not match the score shape: {}", e);
            SubmissionOutcome::Failed {
                kind: FailureKind::MalformedResponse,
                message: MALFORMED_RESPONSE_MESSAGE.to_string(),
            }
        }
    }
}

pub struct SubmissionCoordinator {
    transport: Arc<dyn ScoringTransport>,
    event_bus: Arc<EventBus>,
}

impl SubmissionCoordinator {
    pub fn new(transport: Arc<dyn ScoringTransport>, event_bus: Arc<EventBus>) -> Self {
        Self {
            transport,
            event_bus,
        }
    }

    /// Validate the selection and enter Pending.
    ///
    /// - `Err(SubmissionInFlight)` if an attempt is pending; nothing changes.
    /// - `Ok(None)` if the input is missing; the session is Failed(MissingInput)
    ///   and no request will be made.
    /// - `Ok(Some(_))` otherwise; previous result and error are cleared.
    pub fn prepare(&self, input: &mut InputStateManager) -> AppResult<Option<PreparedSubmission>> {
        if input.is_pending() {
            log::warn!("Submission ignored: an attempt is already pending");
            return Err(AppError::SubmissionInFlight);
        }

        let request = match ScoreRequest::from_selection(input.selection()) {
            Ok(request) => request,
            Err(DomainError::MissingInput) => {
                let message = DomainError::MissingInput.to_string();
                log::info!("Submission rejected: {}", message);
                input.apply(SubmissionEvent::Rejected {
                    kind: FailureKind::MissingInput,
                    message: message.clone(),
                });
                self.event_bus
                    .emit(SubmissionFailed::new(None, FailureKind::MissingInput, message));
                return Ok(None);
            }
            Err(other) => return Err(AppError::Domain(other)),
        };

        let sequence = input.next_sequence();
        input.apply(SubmissionEvent::Started { sequence });
        log::info!(
            "Submission #{} started ({})",
            sequence,
            input.selection()
        );
        self.event_bus
            .emit(SubmissionStarted::new(sequence, request.field_name()));

        Ok(Some(PreparedSubmission { sequence, request }))
    }

    /// Send the prepared request once and interpret the answer
    pub async fn execute(&self, prepared: PreparedSubmission) -> CompletedSubmission {
        let response = self.transport.send(prepared.request).await;
        CompletedSubmission {
            sequence: prepared.sequence,
            outcome: interpret_response(response),
        }
    }

    /// Apply a finished attempt. Returns false if it was stale and discarded.
    pub fn complete(&self, input: &mut InputStateManager, completed: CompletedSubmission) -> bool {
        let sequence = completed.sequence;
        let event = match &completed.outcome {
            SubmissionOutcome::Scored(result) => SubmissionEvent::Succeeded {
                sequence,
                result: *result,
            },
            SubmissionOutcome::Failed { kind, message } => SubmissionEvent::Failed {
                sequence,
                kind: *kind,
                message: message.clone(),
            },
        };

        if !input.apply(event) {
            log::warn!("Discarding stale response for submission #{}", sequence);
            self.event_bus.emit(StaleResponseDiscarded::new(sequence));
            return false;
        }

        match completed.outcome {
            SubmissionOutcome::Scored(result) => {
                let flagged = out_of_range_domains(&result);
                if !flagged.is_empty() {
                    log::warn!(
                        "Scores outside 0-100 passed through unchanged: {:?}",
                        flagged
                    );
                }
                log::info!(
                    "Submission #{} scored (final score {})",
                    sequence,
                    result.final_score
                );
                self.event_bus.emit(ScoreReceived::new(sequence, result));
            }
            SubmissionOutcome::Failed { kind, message } => {
                log::info!("Submission #{} failed: {}", sequence, message);
                self.event_bus
                    .emit(SubmissionFailed::new(Some(sequence), kind, message));
            }
        }
        true
    }

    /// Full attempt: prepare, send, apply. Returns the resulting status.
    pub async fn submit(&self, input: &mut InputStateManager) -> AppResult<SubmissionState> {
        if let Some(prepared) = self.prepare(input)? {
            let completed = self.execute(prepared).await;
            self.complete(input, completed);
        }
        Ok(input.status().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(br#"{"error":"Unsupported file type."}"#),
            Some("Unsupported file type.".to_string())
        );
        assert_eq!(extract_error_message(br#"{"error":""}"#), None);
        assert_eq!(extract_error_message(br#"{"error":42}"#), None);
        assert_eq!(extract_error_message(br#"{"detail":"nope"}"#), None);
        assert_eq!(extract_error_message(b""), None);
        assert_eq!(extract_error_message(b"[1,2]"), None);
    }

    #[test]
    fn test_success_status_range() {
        let created = interpret_response(Ok(TransportResponse::new(
            201,
            r#"{"patient_care":1,"medical_knowledge":2,"interpersonal":3,"professionalism":4,"scholarly":5,"author_credibility":6,"deductions":-20,"final_score":0}"#,
        )));
        assert!(matches!(created, SubmissionOutcome::Scored(r) if r.deductions == -20.0));

        let redirect = interpret_response(Ok(TransportResponse::new(302, "")));
        assert_eq!(
            redirect,
            SubmissionOutcome::Failed {
                kind: FailureKind::TransportFailure,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }
        );
    }
}
