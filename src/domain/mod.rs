// src/domain/mod.rs
//
// Domain Root - pure types and invariants for a scoring session
//
// Nothing in here performs I/O. Services own the mutation,
// integrations own the network.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod input;
pub mod score;
pub mod submission;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Input Domain
pub use input::{validate_selection, FileKind, FilePayload, InputSelection};

// Score Domain
pub use score::{
    out_of_range_domains, DomainScoreEntry, ScoreDomain, ScoreResult, SCORE_AXIS_MAX,
    SCORE_AXIS_MIN,
};

// Submission Domain
pub use submission::{FailureKind, SubmissionEvent, SubmissionState};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of input rules checked before any request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Please provide a file or text.")]
    MissingInput,

    #[error("Unsupported file type: {0} (expected .pdf or .docx)")]
    UnsupportedFileType(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
