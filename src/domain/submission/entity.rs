use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::score::ScoreResult;

/// Why an attempt ended without a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No file and no non-blank text at submit time. No request was made.
    MissingInput,

    /// The call could not complete or returned a non-2xx status
    TransportFailure,

    /// 2xx response whose body is not a score payload
    MalformedResponse,
}

/// Lifecycle of the current submission attempt.
///
/// Idle -> Pending -> {Succeeded | Failed}. A new attempt starts from any
/// settled state and always clears the previous result and error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending {
        sequence: u64,
    },
    Succeeded(ScoreResult),
    Failed {
        kind: FailureKind,
        message: String,
    },
}

/// Facts fed into `SubmissionState::apply`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    /// Local validation failed before any request
    Rejected { kind: FailureKind, message: String },

    Started { sequence: u64 },

    Succeeded { sequence: u64, result: ScoreResult },

    Failed {
        sequence: u64,
        kind: FailureKind,
        message: String,
    },
}

impl SubmissionState {
    /// Pure transition: (current state, event) -> next state.
    ///
    /// Events that do not fit the current state are ignored and the state is
    /// returned unchanged:
    /// - `Started` or `Rejected` while an attempt is pending
    /// - completions whose sequence is not the pending one (stale)
    pub fn apply(self, event: SubmissionEvent) -> SubmissionState {
        if !self.accepts(&event) {
            return self;
        }

        match event {
            SubmissionEvent::Rejected { kind, message } => SubmissionState::Failed { kind, message },
            SubmissionEvent::Started { sequence } => SubmissionState::Pending { sequence },
            SubmissionEvent::Succeeded { result, .. } => SubmissionState::Succeeded(result),
            SubmissionEvent::Failed { kind, message, .. } => {
                SubmissionState::Failed { kind, message }
            }
        }
    }

    /// Whether `apply` would act on this event
    pub fn accepts(&self, event: &SubmissionEvent) -> bool {
        match (self, event) {
            (SubmissionState::Pending { .. }, SubmissionEvent::Rejected { .. })
            | (SubmissionState::Pending { .. }, SubmissionEvent::Started { .. }) => false,
            (_, SubmissionEvent::Rejected { .. }) | (_, SubmissionEvent::Started { .. }) => true,
            (
                SubmissionState::Pending { sequence: pending },
                SubmissionEvent::Succeeded { sequence, .. },
            )
            | (
                SubmissionState::Pending { sequence: pending },
                SubmissionEvent::Failed { sequence, .. },
            ) => pending == sequence,
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending { .. })
    }

    pub fn pending_sequence(&self) -> Option<u64> {
        match self {
            SubmissionState::Pending { sequence } => Some(*sequence),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SubmissionState::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Pending { sequence } => write!(f, "pending (#{})", sequence),
            SubmissionState::Succeeded(_) => write!(f, "succeeded"),
            SubmissionState::Failed { .. } => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            patient_care: 90.0,
            medical_knowledge: 85.0,
            interpersonal: 88.0,
            professionalism: 92.0,
            scholarly: 80.0,
            author_credibility: 95.0,
            deductions: 0.0,
            final_score: 88.3,
        }
    }

    #[test]
    fn test_happy_path_transitions() {
        let state = SubmissionState::Idle
            .apply(SubmissionEvent::Started { sequence: 1 })
            .apply(SubmissionEvent::Succeeded {
                sequence: 1,
                result: sample_result(),
            });
        assert_eq!(state.result(), Some(&sample_result()));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_new_attempt_clears_previous_result() {
        let state = SubmissionState::Succeeded(sample_result())
            .apply(SubmissionEvent::Started { sequence: 2 });
        assert_eq!(state, SubmissionState::Pending { sequence: 2 });
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_rejection_does_not_enter_pending() {
        let state = SubmissionState::Idle.apply(SubmissionEvent::Rejected {
            kind: FailureKind::MissingInput,
            message: "Please provide a file or text.".to_string(),
        });
        assert!(!state.is_pending());
        assert_eq!(state.failure_kind(), Some(FailureKind::MissingInput));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let pending = SubmissionState::Pending { sequence: 3 };
        let event = SubmissionEvent::Succeeded {
            sequence: 2,
            result: sample_result(),
        };
        assert!(!pending.accepts(&event));
        assert_eq!(pending.clone().apply(event), pending);
    }

    #[test]
    fn test_completion_without_pending_is_ignored() {
        let state = SubmissionState::Idle.apply(SubmissionEvent::Failed {
            sequence: 1,
            kind: FailureKind::TransportFailure,
            message: "Error scoring LOR.".to_string(),
        });
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_start_while_pending_is_ignored() {
        let state = SubmissionState::Pending { sequence: 1 }
            .apply(SubmissionEvent::Started { sequence: 2 });
        assert_eq!(state.pending_sequence(), Some(1));
    }
}
