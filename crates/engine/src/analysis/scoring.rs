//! Sub-score computation. Every score is a percentage in [0, 100]; all of
//! them are total functions over well-formed input, so degenerate resumes
//! and job descriptions score rather than fail.

use crate::analysis::contact::ContactInfo;
use crate::analysis::keywords::KeywordSet;
use crate::analysis::segmenter::{Section, SectionedResume};
use crate::config::ScoreWeights;

/// Sections a complete resume is expected to carry. Projects is a bonus
/// section and deliberately not in this list.
pub const EXPECTED_SECTIONS: [Section; 4] = [
    Section::Summary,
    Section::Experience,
    Section::Education,
    Section::Skills,
];

/// Share of a parse considered anomalous: more than half of the content
/// landing outside any recognized section.
const UNKNOWN_RATIO_LIMIT: f64 = 0.5;

/// Structural format signals, each weighted equally in the format score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSignals {
    /// Email or phone pattern detected in the raw text.
    pub has_contact: bool,
    /// At least one experience/project entry carries a number or percent.
    pub has_quantified_achievement: bool,
    /// At most half of the content lines fell into `Unknown`.
    pub clean_parse: bool,
}

impl FormatSignals {
    pub fn score(&self) -> f64 {
        let met = [
            self.has_contact,
            self.has_quantified_achievement,
            self.clean_parse,
        ]
        .iter()
        .filter(|s| **s)
        .count();
        round2(met as f64 / 3.0 * 100.0)
    }
}

/// Fraction of job-description keywords found in the resume, scaled to
/// 0-100.
///
/// Policy, not a bug: a job description that yields zero keywords scores
/// 100.0 (the vacuous match), so resumes are never penalized for a JD the
/// vocabulary cannot see.
pub fn keyword_match_score(job: &KeywordSet, resume: &KeywordSet) -> f64 {
    if job.is_empty() {
        return 100.0;
    }
    round2(job.matched_in(resume) as f64 / job.len() as f64 * 100.0)
}

/// Fraction of expected sections with at least one entry, scaled to 0-100.
/// A resume with no recognizable headings scores 0.
pub fn section_score(resume: &SectionedResume) -> f64 {
    let found = EXPECTED_SECTIONS
        .iter()
        .filter(|s| resume.has_content(**s))
        .count();
    round2(found as f64 / EXPECTED_SECTIONS.len() as f64 * 100.0)
}

/// Collects the structural signals behind the format score.
pub fn format_signals(resume: &SectionedResume, contact: &ContactInfo) -> FormatSignals {
    let has_quantified_achievement = [Section::Experience, Section::Projects]
        .iter()
        .flat_map(|s| resume.entries(*s))
        .any(|entry| is_quantified(entry));

    FormatSignals {
        has_contact: contact.is_reachable(),
        has_quantified_achievement,
        clean_parse: resume.unknown_ratio() <= UNKNOWN_RATIO_LIMIT,
    }
}

/// A quantifiable achievement carries a number or a percent sign.
pub fn is_quantified(entry: &str) -> bool {
    entry.chars().any(|c| c.is_ascii_digit()) || entry.contains('%')
}

/// Weighted blend of the three sub-scores into the overall ATS score.
/// Callers validate the weights before reaching this point.
pub fn overall_score(keyword: f64, section: f64, format: f64, weights: &ScoreWeights) -> f64 {
    round2(weights.keyword * keyword + weights.section * section + weights.format * format)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
