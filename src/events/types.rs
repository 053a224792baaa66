// events/types.rs
//
// Submission lifecycle events.
// Each event is an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FailureKind, ScoreResult};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// Emitted when a request is about to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: u64,
    pub field_name: String,
}

impl SubmissionStarted {
    pub fn new(sequence: u64, field_name: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sequence,
            field_name: field_name.into(),
        }
    }
}

impl DomainEvent for SubmissionStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SubmissionStarted" }
}

/// Emitted when a score payload was applied to the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReceived {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: u64,
    pub result: ScoreResult,
}

impl ScoreReceived {
    pub fn new(sequence: u64, result: ScoreResult) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sequence,
            result,
        }
    }
}

impl DomainEvent for ScoreReceived {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ScoreReceived" }
}

/// Emitted when an attempt ends in failure.
/// `sequence` is None for local rejections (no request was made).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: Option<u64>,
    pub kind: FailureKind,
    pub message: String,
}

impl SubmissionFailed {
    pub fn new(sequence: Option<u64>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sequence,
            kind,
            message: message.into(),
        }
    }
}

impl DomainEvent for SubmissionFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SubmissionFailed" }
}

/// Emitted when a completion arrives for an attempt that is no longer pending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleResponseDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: u64,
}

impl StaleResponseDiscarded {
    pub fn new(sequence: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sequence,
        }
    }
}

impl DomainEvent for StaleResponseDiscarded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "StaleResponseDiscarded" }
}
