use super::entity::InputSelection;
use crate::domain::{DomainError, DomainResult};

/// Validates that a selection can be submitted.
///
/// Fails with `MissingInput` when nothing is selected or the text is blank.
/// File payloads are not re-checked; the picker filter already ran when the
/// payload was created.
pub fn validate_selection(selection: &InputSelection) -> DomainResult<()> {
    match selection {
        InputSelection::None => Err(DomainError::MissingInput),
        InputSelection::Text(content) if content.trim().is_empty() => {
            Err(DomainError::MissingInput)
        }
        InputSelection::Text(_) | InputSelection::File(_) => Ok(()),
    }
}

/// Critical Input Invariants:
///
/// 1. At most one of file/text is held (enforced by the enum)
/// 2. Selecting one variant replaces the other (last writer wins)
/// 3. Whitespace-only text counts as no input
/// 4. Submitted text is sent raw, never trimmed
