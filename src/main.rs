// src/main.rs

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Library code logs through `log`; the subscriber bridges those records.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lor_scorer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run().await
}
