// src/application/mod.rs
//
// Application Layer
//
// - Sits above domain, services and integrations
// - Provides the boundary between the terminal front end and the services
// - Translates session state into DTOs and rendered text

pub mod commands;
pub mod config;
pub mod dto;
pub mod error_handling;
pub mod render;
pub mod state;

pub use config::ClientConfig;
pub use dto::ScoreReportDto;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
