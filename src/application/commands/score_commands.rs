// src/application/commands/score_commands.rs
//
// One-shot scoring: select input, submit once, report.

use std::path::Path;

use crate::application::dto::ScoreReportDto;
use crate::application::state::AppState;
use crate::domain::{FileKind, FilePayload};
use crate::error::{AppError, AppResult};
use crate::services::InputStateManager;

/// Load a document the way the file picker would: the extension filter runs
/// first, then the bytes are read.
pub async fn read_file_payload(path: &Path) -> AppResult<FilePayload> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Other(format!("Invalid file path: {}", path.display())))?;

    FileKind::from_file_name(file_name)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(FilePayload::new(file_name, bytes)?)
}

/// Apply CLI-style input to a session: a file and text are applied in that
/// order, so text given alongside a file wins (last writer).
pub async fn select_input(
    session: &mut InputStateManager,
    file: Option<&Path>,
    text: Option<String>,
) -> AppResult<()> {
    if let Some(path) = file {
        session.select_file(read_file_payload(path).await?);
    }
    if let Some(text) = text {
        session.set_text(text);
    }
    Ok(())
}

/// Submit the session once and snapshot the outcome
pub async fn score_once(
    state: &AppState,
    session: &mut InputStateManager,
) -> AppResult<ScoreReportDto> {
    state.coordinator.submit(session).await?;
    Ok(ScoreReportDto::from_session(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::io::Write;
    use tempfile::Builder;

    #[tokio::test]
    async fn test_reads_pdf_payload() {
        let mut file = Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4 body").unwrap();

        let payload = read_file_payload(file.path()).await.unwrap();
        assert_eq!(payload.kind, FileKind::Pdf);
        assert_eq!(payload.bytes, b"%PDF-1.4 body".to_vec());
    }

    #[tokio::test]
    async fn test_rejects_other_extensions_before_reading() {
        let result = read_file_payload(Path::new("/no/such/letter.txt")).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UnsupportedFileType(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = read_file_payload(Path::new("/no/such/letter.docx")).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_text_after_file_wins() {
        let mut file = Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"PK").unwrap();

        let mut session = InputStateManager::new();
        select_input(&mut session, Some(file.path()), Some("pasted".to_string()))
            .await
            .unwrap();
        assert_eq!(session.selection().text(), Some("pasted"));
        assert!(session.selection().file().is_none());
    }
}
