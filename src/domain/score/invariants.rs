use super::entity::{ScoreDomain, ScoreResult};

/// Lower bound of the shared chart axis
pub const SCORE_AXIS_MIN: f64 = 0.0;

/// Upper bound of the shared chart axis
pub const SCORE_AXIS_MAX: f64 = 100.0;

/// Domains whose score falls outside the chart axis.
///
/// Informational only. Results are never rejected or clamped for this;
/// callers log it and renderers clip visually.
pub fn out_of_range_domains(result: &ScoreResult) -> Vec<ScoreDomain> {
    ScoreDomain::ALL
        .iter()
        .copied()
        .filter(|domain| {
            let score = domain.score_in(result);
            !(SCORE_AXIS_MIN..=SCORE_AXIS_MAX).contains(&score)
        })
        .collect()
}
