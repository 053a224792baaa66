use serde::{Deserialize, Serialize};
use std::fmt;

/// Score payload returned by the remote scoring service.
/// Treated as pass-through data: values are never clamped or rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub patient_care: f64,
    pub medical_knowledge: f64,
    pub interpersonal: f64,
    pub professionalism: f64,
    pub scholarly: f64,
    pub author_credibility: f64,

    /// Penalty applied by the service (zero or negative in practice)
    pub deductions: f64,

    /// Composite score computed by the service
    pub final_score: f64,
}

/// The six evaluation categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDomain {
    PatientCare,
    MedicalKnowledge,
    Interpersonal,
    Professionalism,
    Scholarly,
    AuthorCredibility,
}

impl ScoreDomain {
    /// Fixed declared order used by every chart and table
    pub const ALL: [ScoreDomain; 6] = [
        ScoreDomain::PatientCare,
        ScoreDomain::MedicalKnowledge,
        ScoreDomain::Interpersonal,
        ScoreDomain::Professionalism,
        ScoreDomain::Scholarly,
        ScoreDomain::AuthorCredibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreDomain::PatientCare => "Patient Care",
            ScoreDomain::MedicalKnowledge => "Medical Knowledge",
            ScoreDomain::Interpersonal => "Interpersonal",
            ScoreDomain::Professionalism => "Professionalism",
            ScoreDomain::Scholarly => "Scholarly",
            ScoreDomain::AuthorCredibility => "Author Credibility",
        }
    }

    /// Read this domain's field from a result
    pub fn score_in(&self, result: &ScoreResult) -> f64 {
        match self {
            ScoreDomain::PatientCare => result.patient_care,
            ScoreDomain::MedicalKnowledge => result.medical_knowledge,
            ScoreDomain::Interpersonal => result.interpersonal,
            ScoreDomain::Professionalism => result.professionalism,
            ScoreDomain::Scholarly => result.scholarly,
            ScoreDomain::AuthorCredibility => result.author_credibility,
        }
    }
}

impl fmt::Display for ScoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One chart point derived from a result. Regenerated per result, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScoreEntry {
    pub domain: String,
    pub score: f64,
}

impl DomainScoreEntry {
    pub fn new(domain: ScoreDomain, score: f64) -> Self {
        Self {
            domain: domain.label().to_string(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_integer_and_fractional_fields() {
        let json = r#"{
            "patient_care": 90, "medical_knowledge": 85, "interpersonal": 88,
            "professionalism": 92, "scholarly": 80, "author_credibility": 95,
            "deductions": 0, "final_score": 88.3
        }"#;
        let result: ScoreResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.patient_care, 90.0);
        assert_eq!(result.final_score, 88.3);
    }

    #[test]
    fn test_decode_missing_field_fails() {
        let json = r#"{"patient_care": 90}"#;
        assert!(serde_json::from_str::<ScoreResult>(json).is_err());
    }

    #[test]
    fn test_labels_follow_declared_order() {
        let labels: Vec<&str> = ScoreDomain::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Patient Care",
                "Medical Knowledge",
                "Interpersonal",
                "Professionalism",
                "Scholarly",
                "Author Credibility",
            ]
        );
    }
}
