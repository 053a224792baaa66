// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod input_service;
pub mod projection_service;
pub mod submission_service;


pub use input_service::{InputStateManager, SUBMIT_LABEL, SUBMIT_LABEL_PENDING};

pub use projection_service::{display_rows, project, ResultRow};

pub use submission_service::{
    extract_error_message, interpret_response, CompletedSubmission, PreparedSubmission,
    SubmissionCoordinator, SubmissionOutcome, GENERIC_FAILURE_MESSAGE,
    MALFORMED_RESPONSE_MESSAGE,
};
