use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Document formats accepted by the file picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Resolve the kind from a file name extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> DomainResult<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(Self::Docx)
        } else {
            Err(DomainError::UnsupportedFileType(file_name.to_string()))
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "pdf"),
            FileKind::Docx => write!(f, "docx"),
        }
    }
}

/// An uploaded LOR document, held in memory until submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// Original file name, forwarded to the service so it can pick a parser
    pub file_name: String,

    pub kind: FileKind,

    /// Raw document bytes (never parsed client-side)
    pub bytes: Vec<u8>,
}

impl FilePayload {
    /// Create a payload. Only the picker filter is applied here:
    /// the extension must be .pdf or .docx.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> DomainResult<Self> {
        let file_name = file_name.into();
        let kind = FileKind::from_file_name(&file_name)?;
        Ok(Self {
            file_name,
            kind,
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The single active input of a session.
/// At most one of file/text is ever held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSelection {
    #[default]
    None,
    File(FilePayload),
    Text(String),
}

impl InputSelection {
    pub fn file(&self) -> Option<&FilePayload> {
        match self {
            InputSelection::File(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            InputSelection::Text(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, InputSelection::None)
    }
}

impl fmt::Display for InputSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSelection::None => write!(f, "none"),
            InputSelection::File(payload) => {
                write!(f, "file {} ({} bytes)", payload.file_name, payload.len())
            }
            InputSelection::Text(content) => write!(f, "text ({} chars)", content.chars().count()),
        }
    }
}
