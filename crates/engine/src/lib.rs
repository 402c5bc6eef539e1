//! Resume scoring and keyword-matching engine.
//!
//! The engine takes a resume (raw bytes or extracted text) and a job
//! description, and produces a [`ScoreReport`]: an overall ATS score blended
//! from keyword coverage, section completeness, and format quality, plus the
//! missing keywords and a list of concrete recommendations.
//!
//! The whole pipeline is pure and synchronous; analyzing the same pair of
//! inputs always yields the same report. Callers that want concurrency run
//! analyses on independent inputs in parallel.
//!
//! ```no_run
//! use ats_engine::analyze;
//!
//! let report = analyze(
//!     "Experience\nBuilt data pipelines in Python",
//!     "Looking for Python and SQL experience",
//! )?;
//! println!("ATS score: {}", report.ats_score);
//! # Ok::<(), ats_engine::AnalyzerError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extract;
pub mod report;

pub use analysis::contact::{detect_contact_info, ContactInfo};
pub use analysis::doctype::{detect_document_kind, DocumentKind};
pub use analysis::keywords::{
    extract_freeform_skills, extract_keywords, KeywordSet, KeywordSource, SkillVocabulary,
};
pub use analysis::segmenter::{segment, Section, SectionedResume};
pub use config::{EngineConfig, ScoreWeights};
pub use errors::AnalyzerError;
pub use extract::{RawDocument, SourceFormat};
pub use report::{ScoreReport, Suggestion};

/// Analyzes a resume against a job description with the default
/// configuration. Both arguments are already-extracted text; use
/// [`RawDocument::from_bytes`] first for PDF or DOCX input.
pub fn analyze(resume_text: &str, job_text: &str) -> Result<ScoreReport, AnalyzerError> {
    analyze_with_config(resume_text, job_text, &EngineConfig::default())
}

/// [`analyze`] with caller-supplied weights and vocabulary.
pub fn analyze_with_config(
    resume_text: &str,
    job_text: &str,
    config: &EngineConfig,
) -> Result<ScoreReport, AnalyzerError> {
    let resume = RawDocument::from_text(resume_text);
    let job = RawDocument::from_text(job_text);
    analysis::run_analysis(resume.text(), job.text(), config)
}
