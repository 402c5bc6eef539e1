//! Recommendation generation: turns scoring signals into an ordered list of
//! actionable suggestions. Rules run in a fixed order so the same analysis
//! always yields the same list.

use crate::analysis::doctype::DocumentKind;
use crate::analysis::scoring::FormatSignals;
use crate::analysis::segmenter::SectionedResume;
use crate::report::Suggestion;

/// Everything the rule table looks at, gathered by the pipeline.
pub struct SuggestionInput<'a> {
    pub missing_skills: &'a [String],
    pub resume: &'a SectionedResume,
    pub signals: FormatSignals,
    pub document_kind: DocumentKind,
}

const MAX_LISTED_SKILLS: usize = 8;

/// Builds the recommendation list. A perfect resume yields an empty list.
pub fn build_suggestions(input: &SuggestionInput<'_>) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if !matches!(
        input.document_kind,
        DocumentKind::Resume | DocumentKind::Unknown
    ) {
        out.push(Suggestion::new(
            "fa-triangle-exclamation",
            &format!(
                "This document reads like a {}; upload a resume for a meaningful score",
                input.document_kind.label()
            ),
        ));
    }

    if !input.missing_skills.is_empty() {
        out.push(Suggestion::new(
            "fa-key",
            &format!(
                "Add these keywords from the job description: {}",
                list_skills(input.missing_skills)
            ),
        ));
    }

    for section in crate::analysis::scoring::EXPECTED_SECTIONS {
        if !input.resume.has_content(section) {
            out.push(Suggestion::new(
                "fa-list-check",
                &format!("Add a clearly labeled {} section", section.label()),
            ));
        }
    }

    if !input.signals.has_quantified_achievement {
        out.push(Suggestion::new(
            "fa-chart-line",
            "Add measurable outcomes (numbers, percentages) to your experience bullet points",
        ));
    }

    if !input.signals.has_contact {
        out.push(Suggestion::new(
            "fa-address-card",
            "Include an email address or phone number so recruiters can reach you",
        ));
    }

    if !input.signals.clean_parse {
        out.push(Suggestion::new(
            "fa-heading",
            "Use standard section headings (Summary, Experience, Education, Skills) so parsers can follow the layout",
        ));
    }

    out
}

/// Comma-joins missing skills, truncating long lists with a count.
fn list_skills(skills: &[String]) -> String {
    if skills.len() <= MAX_LISTED_SKILLS {
        skills.join(", ")
    } else {
        format!(
            "{} and {} more",
            skills[..MAX_LISTED_SKILLS].join(", "),
            skills.len() - MAX_LISTED_SKILLS
        )
    }
}
