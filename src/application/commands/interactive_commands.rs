// src/application/commands/interactive_commands.rs
//
// Interactive session: one owner of the session state, two event sources
// (stdin lines and network completions) multiplexed on a single task.
// Submissions run on their own task so input keeps being handled while a
// request is in flight.

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::application::commands::score_commands::read_file_payload;
use crate::application::error_handling::ErrorResponse;
use crate::application::render::render_session;
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::services::{CompletedSubmission, InputStateManager};

const HELP: &str = "\
Commands:
  file <path>    select a .pdf or .docx letter (clears text)
  text <letter>  paste letter text (clears the file)
  submit         score the current selection
  status         show the current selection and status
  clear          drop the current selection
  help           show this help
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    File(PathBuf),
    Text(String),
    Submit,
    Status,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return None;
        }

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "file" => SessionCommand::File(PathBuf::from(rest.trim())),
            "text" => SessionCommand::Text(rest.to_string()),
            "submit" => SessionCommand::Submit,
            "status" => SessionCommand::Status,
            "clear" => SessionCommand::Clear,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => SessionCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

async fn say<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> AppResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Run the interactive loop until `quit` or end of input.
/// At end of input a pending submission is awaited; `quit` does not wait.
pub async fn run_interactive<R, W>(state: &AppState, input: R, mut out: W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = InputStateManager::new();
    let (completions_tx, mut completions) = mpsc::unbounded_channel::<CompletedSubmission>();
    let mut lines = input.lines();

    let mut input_closed = false;

    say(&mut out, HELP).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    input_closed = true;
                    break;
                };
                let Some(command) = SessionCommand::parse(&line) else { continue };

                match command {
                    SessionCommand::File(path) => match read_file_payload(&path).await {
                        Ok(payload) => {
                            let message = format!("Selected {}", payload.file_name);
                            session.select_file(payload);
                            say(&mut out, &message).await?;
                        }
                        Err(e) => {
                            say(&mut out, &ErrorResponse::from_app_error(&e).message).await?;
                        }
                    },
                    SessionCommand::Text(text) => {
                        session.set_text(text);
                        say(&mut out, &format!("Selected {}", session.selection())).await?;
                    }
                    SessionCommand::Submit => match state.coordinator.prepare(&mut session) {
                        Ok(Some(prepared)) => {
                            let coordinator = state.coordinator.clone();
                            let tx = completions_tx.clone();
                            tokio::spawn(async move {
                                let completed = coordinator.execute(prepared).await;
                                // receiver gone means the session ended; nothing to apply
                                let _ = tx.send(completed);
                            });
                            say(&mut out, session.submit_label()).await?;
                        }
                        Ok(None) => say(&mut out, &render_session(&session)).await?,
                        Err(e) => {
                            say(&mut out, &ErrorResponse::from_app_error(&e).message).await?;
                        }
                    },
                    SessionCommand::Status => {
                        let status = format!(
                            "Input: {} | Status: {} | [{}]",
                            session.selection(),
                            session.status(),
                            session.submit_label()
                        );
                        say(&mut out, &status).await?;
                    }
                    SessionCommand::Clear => {
                        session.clear();
                        say(&mut out, "Selection cleared").await?;
                    }
                    SessionCommand::Help => say(&mut out, HELP).await?,
                    SessionCommand::Quit => break,
                    SessionCommand::Unknown(verb) => {
                        say(&mut out, &format!("Unknown command '{}'; type help", verb)).await?;
                    }
                }
            }
            Some(completed) = completions.recv() => {
                if state.coordinator.complete(&mut session, completed) {
                    say(&mut out, &render_session(&session)).await?;
                }
            }
        }
    }

    // Piped input ends before the answer arrives; let it land.
    if input_closed && session.is_pending() {
        if let Some(completed) = completions.recv().await {
            if state.coordinator.complete(&mut session, completed) {
                say(&mut out, &render_session(&session)).await?;
            }
        }
    }

    if session.is_pending() {
        log::warn!("Exiting with a submission still in flight");
    }
    Ok(())
}
