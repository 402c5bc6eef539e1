use serde::{Deserialize, Serialize};

/// A single rule-generated improvement suggestion. `icon` is a FontAwesome
/// class name; wording and rendering belong to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub text: String,
}

impl Suggestion {
    pub fn new(icon: &str, text: &str) -> Self {
        Self {
            icon: icon.to_string(),
            text: text.to_string(),
        }
    }
}

/// Final analysis output. Immutable once produced; serializes to the flat
/// record persisted as a `resume_analysis` row by callers. All four scores
/// are percentages in [0, 100], rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub ats_score: f64,
    pub keyword_match_score: f64,
    pub format_score: f64,
    pub section_score: f64,
    /// Job-description keywords absent from the resume, alphabetical.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_flat_record() {
        let report = ScoreReport {
            ats_score: 72.5,
            keyword_match_score: 66.67,
            format_score: 100.0,
            section_score: 75.0,
            missing_skills: vec!["aws".to_string()],
            recommendations: vec![Suggestion::new("fa-key", "Add the missing keywords")],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ats_score"], 72.5);
        assert_eq!(json["missing_skills"][0], "aws");
        assert_eq!(json["recommendations"][0]["icon"], "fa-key");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ScoreReport {
            ats_score: 100.0,
            keyword_match_score: 100.0,
            format_score: 100.0,
            section_score: 100.0,
            missing_skills: vec![],
            recommendations: vec![],
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
