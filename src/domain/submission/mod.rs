pub mod entity;

pub use entity::{FailureKind, SubmissionEvent, SubmissionState};
