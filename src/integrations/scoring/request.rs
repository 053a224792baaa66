// src/integrations/scoring/request.rs
//
// Request body for the scoring endpoint.
// Exactly one multipart field is ever populated.

use reqwest::multipart::{Form, Part};

use crate::domain::{validate_selection, DomainError, DomainResult, FilePayload, InputSelection};
use crate::error::AppResult;

/// Path of the scoring endpoint, relative to the configured base URL
pub const SCORE_PATH: &str = "/score-lor";

/// Multipart field carrying an uploaded document
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying pasted LOR text
pub const TEXT_FIELD: &str = "lor_text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRequest {
    File(FilePayload),
    /// Sent exactly as entered (not trimmed)
    Text(String),
}

impl ScoreRequest {
    /// Build the request for the current selection.
    /// Fails with `MissingInput` for an empty selection or blank text.
    pub fn from_selection(selection: &InputSelection) -> DomainResult<Self> {
        validate_selection(selection)?;
        match selection {
            InputSelection::File(payload) => Ok(ScoreRequest::File(payload.clone())),
            InputSelection::Text(content) => Ok(ScoreRequest::Text(content.clone())),
            InputSelection::None => Err(DomainError::MissingInput),
        }
    }

    /// Name of the single populated field
    pub fn field_name(&self) -> &'static str {
        match self {
            ScoreRequest::File(_) => FILE_FIELD,
            ScoreRequest::Text(_) => TEXT_FIELD,
        }
    }

    /// Encode as a multipart form
    pub fn into_form(self) -> AppResult<Form> {
        let form = match self {
            ScoreRequest::File(payload) => {
                let part = Part::bytes(payload.bytes)
                    .file_name(payload.file_name)
                    .mime_str(payload.kind.content_type())?;
                Form::new().part(FILE_FIELD, part)
            }
            ScoreRequest::Text(content) => Form::new().text(TEXT_FIELD, content),
        };
        Ok(form)
    }
}
