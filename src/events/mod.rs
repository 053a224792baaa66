// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported.

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Submission lifecycle
    ScoreReceived,
    StaleResponseDiscarded,
    SubmissionFailed,
    SubmissionStarted,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
