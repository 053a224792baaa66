// src/lib.rs
// LOR Scorer - client for a residency letter-of-recommendation scoring service
//
// Architecture:
// - Domain: pure input/score/submission types and their invariants
// - Events: lifecycle facts published by the coordinator
// - Integrations: the scoring service transport (multipart HTTP)
// - Services: input state, submission coordination, result projection
// - Application: config, wiring, error mapping, DTOs, text rendering

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    DomainError, DomainScoreEntry, FailureKind, FileKind, FilePayload, InputSelection,
    ScoreDomain, ScoreResult, SubmissionState,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, ScoreReceived,
    StaleResponseDiscarded, SubmissionFailed, SubmissionStarted,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    HttpScoringClient, ScoreRequest, ScoringTransport, TransportError, TransportResponse,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    display_rows, project, InputStateManager, ResultRow, SubmissionCoordinator,
    SubmissionOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ClientConfig, ErrorResponse, ScoreReportDto};
