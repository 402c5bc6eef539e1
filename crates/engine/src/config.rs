use serde::{Deserialize, Serialize};

use crate::analysis::keywords::SkillVocabulary;
use crate::errors::AnalyzerError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Blend weights for the overall ATS score.
///
/// The defaults are a documented design choice, not a reverse-engineered
/// constant: keyword coverage dominates because it is what real tracking
/// systems filter on first. Callers may override them but the three weights
/// must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub section: f64,
    pub format: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: 0.5,
            section: 0.3,
            format: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        for (name, w) in [
            ("keyword", self.keyword),
            ("section", self.section),
            ("format", self.format),
        ] {
            if !(0.0..=1.0).contains(&w) {
                return Err(AnalyzerError::Validation(format!(
                    "weight '{name}' must be within [0.0, 1.0], got {w}"
                )));
            }
        }
        let sum = self.keyword + self.section + self.format;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalyzerError::Validation(format!(
                "score weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Full engine configuration: blend weights plus the skill vocabulary used
/// for both the resume and the job description.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    pub vocabulary: SkillVocabulary,
}

impl EngineConfig {
    /// Default weights with a caller-supplied vocabulary.
    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        Self {
            weights: ScoreWeights::default(),
            vocabulary,
        }
    }
}
