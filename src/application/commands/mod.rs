// src/application/commands/mod.rs
//
// Front end command handlers
//
// - Thin adapters between the terminal and the services
// - No scoring logic here; state changes go through the coordinator

pub mod interactive_commands;
pub mod score_commands;

pub use interactive_commands::{run_interactive, SessionCommand};
pub use score_commands::{read_file_payload, score_once, select_input};
