pub mod entity;
pub mod invariants;

pub use entity::{FileKind, FilePayload, InputSelection};
pub use invariants::validate_selection;
