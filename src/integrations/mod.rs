// src/integrations/mod.rs
//
// External Integrations Module

pub mod scoring;

pub use scoring::{
    HttpScoringClient, ScoreRequest, ScoringTransport, TransportError, TransportResponse,
};
