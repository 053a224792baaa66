// src/services/input_service.rs
//
// Input State Manager
//
// Owns the session's input selection and its submission status flags.
// Pure in-memory state: no I/O, no events. The submission coordinator is the
// only writer of the status.

use crate::domain::{FilePayload, InputSelection, ScoreResult, SubmissionEvent, SubmissionState};

/// Label of the submit control while idle
pub const SUBMIT_LABEL: &str = "Score LOR";

/// Label of the submit control while a request is in flight
pub const SUBMIT_LABEL_PENDING: &str = "Scoring...";

#[derive(Debug, Default)]
pub struct InputStateManager {
    selection: InputSelection,
    status: SubmissionState,
    last_sequence: u64,
}

impl InputStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a document. Any pasted text is dropped.
    pub fn select_file(&mut self, payload: FilePayload) {
        self.selection = InputSelection::File(payload);
    }

    /// Replace the pasted text. Any selected document is dropped.
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.selection = InputSelection::Text(content.into());
    }

    pub fn clear(&mut self) {
        self.selection = InputSelection::None;
    }

    pub fn selection(&self) -> &InputSelection {
        &self.selection
    }

    pub fn status(&self) -> &SubmissionState {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.status.result()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    /// Submit control label for the current status
    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            SUBMIT_LABEL_PENDING
        } else {
            SUBMIT_LABEL
        }
    }

    /// Reserve the sequence number of the next attempt (monotonic, starts at 1)
    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.last_sequence += 1;
        self.last_sequence
    }

    /// Apply a lifecycle event. Returns false when the event was ignored
    /// (stale completion or a start while pending).
    pub(crate) fn apply(&mut self, event: SubmissionEvent) -> bool {
        if !self.status.accepts(&event) {
            return false;
        }
        let current = std::mem::take(&mut self.status);
        self.status = current.apply(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureKind;

    fn pdf() -> FilePayload {
        FilePayload::new("lor.pdf", b"%PDF".to_vec()).unwrap()
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let manager = InputStateManager::new();
        assert!(manager.selection().is_none());
        assert_eq!(manager.status(), &SubmissionState::Idle);
        assert_eq!(manager.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_file_selection_clears_text() {
        let mut manager = InputStateManager::new();
        manager.set_text("Dr. Smith is an excellent candidate.");
        manager.select_file(pdf());
        assert_eq!(manager.selection(), &InputSelection::File(pdf()));
        assert!(manager.selection().text().is_none());
    }

    #[test]
    fn test_text_clears_file_selection() {
        let mut manager = InputStateManager::new();
        manager.select_file(pdf());
        manager.set_text("Pasted letter");
        assert!(manager.selection().file().is_none());
        assert_eq!(manager.selection().text(), Some("Pasted letter"));
    }

    #[test]
    fn test_last_writer_wins_over_long_sequences() {
        let mut manager = InputStateManager::new();
        for i in 0..10 {
            if i % 3 == 0 {
                manager.select_file(pdf());
            } else {
                manager.set_text(format!("letter {}", i));
            }
        }
        // i = 9 selected the file last
        assert!(manager.selection().file().is_some());
        assert!(manager.selection().text().is_none());
    }

    #[test]
    fn test_sequences_are_monotonic() {
        let mut manager = InputStateManager::new();
        assert_eq!(manager.next_sequence(), 1);
        assert_eq!(manager.next_sequence(), 2);
    }

    #[test]
    fn test_pending_label_and_stale_guard() {
        let mut manager = InputStateManager::new();
        assert!(manager.apply(SubmissionEvent::Started { sequence: 1 }));
        assert_eq!(manager.submit_label(), SUBMIT_LABEL_PENDING);

        let stale = SubmissionEvent::Failed {
            sequence: 0,
            kind: FailureKind::TransportFailure,
            message: "late".to_string(),
        };
        assert!(!manager.apply(stale));
        assert!(manager.is_pending());
    }

    #[test]
    fn test_selection_survives_submission_status_changes() {
        let mut manager = InputStateManager::new();
        manager.set_text("keep me");
        manager.apply(SubmissionEvent::Rejected {
            kind: FailureKind::MissingInput,
            message: "x".to_string(),
        });
        assert_eq!(manager.selection().text(), Some("keep me"));
        assert_eq!(manager.error_message(), Some("x"));
    }
}
