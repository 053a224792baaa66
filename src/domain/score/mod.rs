pub mod entity;
pub mod invariants;

pub use entity::{DomainScoreEntry, ScoreDomain, ScoreResult};
pub use invariants::{out_of_range_domains, SCORE_AXIS_MAX, SCORE_AXIS_MIN};
