// src/cli/mod.rs
//
// Terminal front end. Parses arguments, wires AppState and hands off to the
// application commands; it never scores or renders by itself.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncReadExt, BufReader};

use lor_scorer::application::commands::{run_interactive, score_once, select_input};
use lor_scorer::application::config::{ClientConfig, URL_ENV_VAR};
use lor_scorer::application::render::render_session;
use lor_scorer::application::AppState;
use lor_scorer::services::InputStateManager;

#[derive(Parser, Debug)]
#[command(
    name = "lor-scorer",
    version,
    about = "Score a residency letter of recommendation against a scoring service."
)]
pub struct Cli {
    /// Scoring service base URL, e.g. http://localhost:8000
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// JSON config file (defaults to <config dir>/lor-scorer/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one letter and print the scores
    Score(ScoreArgs),

    /// Interactive session: select, edit and submit repeatedly
    Interactive,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Letter document (.pdf or .docx)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Letter text; replaces --file when both are given
    #[arg(long, short, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read letter text from a file, or "-" for stdin
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let config = ClientConfig::load(
            self.config.as_deref(),
            std::env::var(URL_ENV_VAR).ok(),
            self.url.clone(),
        )
        .context("loading configuration")?;
        let state = AppState::new(config)?;

        match self.command {
            Commands::Score(args) => run_score(&state, args).await,
            Commands::Interactive => {
                let input = BufReader::new(tokio::io::stdin());
                run_interactive(&state, input, tokio::io::stdout()).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn read_text_arg(args: &ScoreArgs) -> Result<Option<String>> {
    if let Some(text) = &args.text {
        return Ok(Some(text.clone()));
    }
    let Some(path) = &args.text_file else {
        return Ok(None);
    };

    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?
    };
    Ok(Some(text))
}

async fn run_score(state: &AppState, args: ScoreArgs) -> Result<ExitCode> {
    let mut session = InputStateManager::new();
    let text = read_text_arg(&args).await?;
    select_input(&mut session, args.file.as_deref(), text).await?;

    if !args.json {
        eprintln!("{}", lor_scorer::services::SUBMIT_LABEL_PENDING);
    }
    let report = score_once(state, &mut session).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_session(&session));
    }

    if report.error.is_some() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
