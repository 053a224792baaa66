// src/services/projection_service.rs
//
// Result Projector - pure mapping from a score payload to display data.

use serde::Serialize;

use crate::domain::{DomainScoreEntry, ScoreDomain, ScoreResult};

/// One labeled value of the results table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: f64,
}

/// Chart data for a result: six entries in the fixed domain order.
/// No result yields an empty sequence. Scores are copied verbatim.
pub fn project(result: Option<&ScoreResult>) -> Vec<DomainScoreEntry> {
    let Some(result) = result else {
        return Vec::new();
    };

    ScoreDomain::ALL
        .iter()
        .map(|domain| DomainScoreEntry::new(*domain, domain.score_in(result)))
        .collect()
}

/// The eight literal values of a result, in display order
pub fn display_rows(result: &ScoreResult) -> Vec<ResultRow> {
    let mut rows: Vec<ResultRow> = ScoreDomain::ALL
        .iter()
        .map(|domain| ResultRow {
            label: domain.label(),
            value: domain.score_in(result),
        })
        .collect();

    rows.push(ResultRow {
        label: "Deductions",
        value: result.deductions,
    });
    rows.push(ResultRow {
        label: "Final Score",
        value: result.final_score,
    });
    rows
}
