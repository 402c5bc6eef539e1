//! The analysis pipeline: segmentation, keyword extraction, scoring, and
//! recommendation generation over already-extracted text.

pub mod contact;
pub mod doctype;
pub mod keywords;
pub mod scoring;
pub mod segmenter;
pub mod suggestions;

use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::AnalyzerError;
use crate::report::ScoreReport;

use self::keywords::{extract_freeform_skills, extract_keywords, KeywordSource};
use self::suggestions::SuggestionInput;

/// Runs the full pipeline over extracted resume and job-description text.
///
/// A resume with no text cannot be scored and is rejected. An empty or
/// unmatchable job description is scored best-effort: keyword coverage is
/// vacuously perfect and the structural scores still apply. An empty
/// vocabulary switches keyword extraction to the freeform heuristic for both
/// texts instead of silently matching nothing.
pub fn run_analysis(
    resume_text: &str,
    job_text: &str,
    config: &EngineConfig,
) -> Result<ScoreReport, AnalyzerError> {
    if resume_text.trim().is_empty() {
        return Err(AnalyzerError::Validation(
            "resume text is empty; nothing to analyze".to_string(),
        ));
    }
    config.weights.validate()?;

    let sectioned = segmenter::segment(resume_text);
    let (resume_keywords, job_keywords) = if config.vocabulary.is_empty() {
        (
            extract_freeform_skills(resume_text, KeywordSource::Resume),
            extract_freeform_skills(job_text, KeywordSource::JobDescription),
        )
    } else {
        (
            extract_keywords(resume_text, &config.vocabulary, KeywordSource::Resume),
            extract_keywords(job_text, &config.vocabulary, KeywordSource::JobDescription),
        )
    };
    let contact = contact::detect_contact_info(resume_text);
    let document_kind = doctype::detect_document_kind(resume_text);

    let keyword_match_score = scoring::keyword_match_score(&job_keywords, &resume_keywords);
    let section_score = scoring::section_score(&sectioned);
    let signals = scoring::format_signals(&sectioned, &contact);
    let format_score = signals.score();
    let ats_score = scoring::overall_score(
        keyword_match_score,
        section_score,
        format_score,
        &config.weights,
    );

    let missing_skills = job_keywords.missing_from(&resume_keywords);
    let recommendations = suggestions::build_suggestions(&SuggestionInput {
        missing_skills: &missing_skills,
        resume: &sectioned,
        signals,
        document_kind,
    });

    debug!(
        ats_score,
        keyword_match_score,
        section_score,
        format_score,
        missing = missing_skills.len(),
        kind = document_kind.label(),
        "analysis complete"
    );

    Ok(ScoreReport {
        ats_score,
        keyword_match_score,
        format_score,
        section_score,
        missing_skills,
        recommendations,
    })
}
