// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - Serializable snapshots of a session for machine-readable output
// - Built FROM session state only (never back)

use serde::{Deserialize, Serialize};

use crate::application::error_handling::ErrorResponse;
use crate::domain::{DomainScoreEntry, ScoreResult, SubmissionState};
use crate::services::{project, InputStateManager};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReportDto {
    /// "idle", "pending", "succeeded" or "failed"
    pub status: String,
    pub result: Option<ScoreResult>,
    pub domain_scores: Vec<DomainScoreEntry>,
    pub error: Option<ErrorResponse>,
}

impl ScoreReportDto {
    pub fn from_session(session: &InputStateManager) -> Self {
        let status = match session.status() {
            SubmissionState::Idle => "idle",
            SubmissionState::Pending { .. } => "pending",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed { .. } => "failed",
        };

        Self {
            status: status.to_string(),
            result: session.result().copied(),
            domain_scores: project(session.result()),
            error: ErrorResponse::from_state(session.status()),
        }
    }
}
