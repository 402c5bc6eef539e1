//! Section segmentation: splits normalized resume text into labeled sections
//! with a table-driven heading matcher.

use std::collections::BTreeMap;

/// Resume section labels. Declaration order is the fixed tie-break priority
/// for heading matching: experience > education > projects > summary >
/// skills, with `Unknown` catching everything before the first heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Summary,
    Skills,
    Unknown,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Summary => "Summary",
            Section::Skills => "Skills",
            Section::Unknown => "Unknown",
        }
    }
}

const EXPERIENCE_HEADINGS: &[&str] = &[
    "professional experience",
    "employment history",
    "work experience",
    "work history",
    "career history",
    "job title",
    "employment",
    "experience",
];

const EDUCATION_HEADINGS: &[&str] = &[
    "education",
    "academic",
    "qualification",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
];

const PROJECTS_HEADINGS: &[&str] = &[
    "personal projects",
    "academic projects",
    "featured projects",
    "major projects",
    "key projects",
    "projects",
];

const SUMMARY_HEADINGS: &[&str] = &[
    "professional summary",
    "professional profile",
    "career objective",
    "career summary",
    "about me",
    "objective",
    "summary",
    "profile",
];

const SKILLS_HEADINGS: &[&str] = &[
    "technical skills",
    "core competencies",
    "skills",
];

/// Heading dispatch table, iterated in priority order.
const SECTION_TABLE: &[(Section, &[&str])] = &[
    (Section::Experience, EXPERIENCE_HEADINGS),
    (Section::Education, EDUCATION_HEADINGS),
    (Section::Projects, PROJECTS_HEADINGS),
    (Section::Summary, SUMMARY_HEADINGS),
    (Section::Skills, SKILLS_HEADINGS),
];

/// A resume split into labeled sections, each an ordered list of entries
/// (runs of contiguous non-blank lines, joined with single spaces). Built
/// once by [`segment`]; read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct SectionedResume {
    sections: BTreeMap<Section, Vec<String>>,
    content_lines: usize,
    unknown_lines: usize,
}

impl SectionedResume {
    pub fn entries(&self, section: Section) -> &[String] {
        self.sections
            .get(&section)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the section holds at least one non-empty entry.
    pub fn has_content(&self, section: Section) -> bool {
        !self.entries(section).is_empty()
    }

    /// Share of content lines that landed in `Unknown`. Heading and blank
    /// lines are not content, so they do not enter the ratio.
    pub fn unknown_ratio(&self) -> f64 {
        if self.content_lines == 0 {
            return 0.0;
        }
        self.unknown_lines as f64 / self.content_lines as f64
    }

    pub fn content_lines(&self) -> usize {
        self.content_lines
    }
}

/// Segments resume text line by line. A heading line switches the current
/// section and is not content itself; any text after the heading keyword is
/// kept as the first content line of the new section. A blank line closes
/// the open entry. Text before the first heading goes to `Unknown`.
pub fn segment(text: &str) -> SectionedResume {
    let mut resume = SectionedResume::default();
    let mut current = Section::Unknown;
    let mut entry: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            flush_entry(&mut resume.sections, current, &mut entry);
            continue;
        }

        if let Some((section, remainder)) = match_heading(line) {
            flush_entry(&mut resume.sections, current, &mut entry);
            current = section;
            if !remainder.is_empty() {
                entry.push(remainder.to_string());
                resume.content_lines += 1;
            }
            continue;
        }

        entry.push(line.to_string());
        resume.content_lines += 1;
        if current == Section::Unknown {
            resume.unknown_lines += 1;
        }
    }
    flush_entry(&mut resume.sections, current, &mut entry);

    resume
}

fn flush_entry(sections: &mut BTreeMap<Section, Vec<String>>, current: Section, entry: &mut Vec<String>) {
    if !entry.is_empty() {
        sections.entry(current).or_default().push(entry.join(" "));
        entry.clear();
    }
}

/// Matches a trimmed line against the heading table. A keyword matches when
/// the line equals it (case-insensitively) or starts with it at a word
/// boundary. The longest matching keyword wins; table order breaks ties.
/// Returns the target section and the text remaining after the keyword.
fn match_heading(line: &str) -> Option<(Section, &str)> {
    let mut best: Option<(Section, &str, usize)> = None;

    for &(section, keywords) in SECTION_TABLE {
        for &kw in keywords {
            if !matches_at_start(line, kw) {
                continue;
            }
            let better = match best {
                Some((_, _, len)) => kw.len() > len,
                None => true,
            };
            if better {
                let remainder = line[kw.len()..]
                    .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace());
                best = Some((section, remainder, kw.len()));
            }
        }
    }

    best.map(|(section, remainder, _)| (section, remainder))
}

/// Case-insensitive prefix match with a word boundary after the keyword, so
/// "Experienced professional" is not a heading while "Experience:" is.
fn matches_at_start(line: &str, keyword: &str) -> bool {
    if line.len() < keyword.len() || !line.is_char_boundary(keyword.len()) {
        return false;
    }
    if !line[..keyword.len()].eq_ignore_ascii_case(keyword) {
        return false;
    }
    match line[keyword.len()..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Summary\nRust engineer with 5 years of experience.\n\n\
                          Experience\nSoftware Engineer at Acme\nBuilt APIs in Rust\n\n\
                          Education\nB.S. Computer Science\n\n\
                          Skills\nRust, SQL, Docker";

    #[test]
    fn test_sample_hits_all_four_sections() {
        let resume = segment(SAMPLE);
        assert!(resume.has_content(Section::Summary));
        assert!(resume.has_content(Section::Experience));
        assert!(resume.has_content(Section::Education));
        assert!(resume.has_content(Section::Skills));
        assert!(!resume.has_content(Section::Unknown));
    }

    #[test]
    fn test_heading_line_is_not_content() {
        let resume = segment("Experience\nSoftware Engineer at Acme");
        assert_eq!(
            resume.entries(Section::Experience),
            ["Software Engineer at Acme"]
        );
    }

    #[test]
    fn test_blank_line_splits_entries() {
        let resume = segment("Experience\nEngineer at Acme\ndid things\n\nAnalyst at Globex");
        let entries = resume.entries(Section::Experience);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "Engineer at Acme did things");
        assert_eq!(entries[1], "Analyst at Globex");
    }

    #[test]
    fn test_no_headings_yields_single_unknown_entry() {
        let text = "Jane Doe\njane@example.com\njust some lines";
        let resume = segment(text);
        assert_eq!(
            resume.entries(Section::Unknown),
            ["Jane Doe jane@example.com just some lines"]
        );
        assert!((resume.unknown_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heading_with_trailing_content_keeps_remainder() {
        let resume = segment("Skills: Python, SQL, AWS");
        assert_eq!(resume.entries(Section::Skills), ["Python, SQL, AWS"]);
    }

    #[test]
    fn test_longer_keyword_wins_tie_break() {
        // "academic projects" (projects) must beat "academic" (education).
        let resume = segment("Academic Projects\nBuilt a compiler");
        assert!(resume.has_content(Section::Projects));
        assert!(!resume.has_content(Section::Education));
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        let resume = segment("Experienced professional seeking new roles");
        assert!(!resume.has_content(Section::Experience));
        assert!(resume.has_content(Section::Unknown));
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let resume = segment("WORK EXPERIENCE\nDid things at Acme");
        assert_eq!(resume.entries(Section::Experience), ["Did things at Acme"]);
    }

    #[test]
    fn test_switching_sections_closes_open_entry() {
        let resume = segment("Experience\nEngineer at Acme\nEducation\nState University");
        assert_eq!(resume.entries(Section::Experience), ["Engineer at Acme"]);
        assert_eq!(resume.entries(Section::Education), ["State University"]);
    }

    #[test]
    fn test_unknown_ratio_counts_content_lines_only() {
        // 1 unknown content line, 1 experience content line, headings excluded.
        let resume = segment("stray line\n\nExperience\nEngineer at Acme");
        assert!((resume.unknown_ratio() - 0.5).abs() < f64::EPSILON);
        assert_eq!(resume.content_lines(), 2);
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        let resume = segment("");
        assert_eq!(resume.content_lines(), 0);
        assert_eq!(resume.unknown_ratio(), 0.0);
        assert!(!resume.has_content(Section::Unknown));
    }
}
