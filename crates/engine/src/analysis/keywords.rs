//! Skill/keyword extraction: canonical skill tokens pulled from free text
//! against a curated vocabulary, with a heuristic fallback for bare skill
//! lists.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Curated default skill vocabulary. Technology, tooling, and methodology
/// terms only; role titles ("software engineer", "developer") are excluded
/// on purpose so a job title never counts as a matched skill.
const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "golang", "rust",
    "ruby", "php", "swift", "kotlin", "scala", "perl", "haskell", "matlab",
    "sql", "nosql", "html", "css", "bash", "powershell", "graphql",
    // Frameworks and libraries
    "react", "angular", "vue", "svelte", "next.js", "django", "flask",
    "fastapi", "spring", "spring boot", "rails", "laravel", "express",
    "node.js", ".net", "jquery", "bootstrap", "tailwind", "redux",
    // Data and machine learning
    "machine learning", "deep learning", "natural language processing", "nlp",
    "computer vision", "data analysis", "data science", "data engineering",
    "data visualization", "tensorflow", "pytorch", "keras", "scikit-learn",
    "pandas", "numpy", "spark", "hadoop", "kafka", "airflow", "etl",
    "statistics",
    // Cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible",
    "jenkins", "git", "github", "gitlab", "ci/cd", "linux", "unix", "nginx",
    "microservices", "rest", "api design", "serverless", "devops",
    // Databases
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "sqlite",
    "cassandra", "dynamodb", "oracle",
    // Testing
    "selenium", "cypress", "jest", "pytest", "junit", "tdd",
    // Methodology and soft skills
    "leadership", "communication", "teamwork", "collaboration",
    "problem solving", "problem-solving", "project management", "agile",
    "scrum", "kanban", "time management", "critical thinking", "mentoring",
];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9#+.-]+").unwrap());

/// Where a keyword set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSource {
    Resume,
    JobDescription,
}

/// A deduplicated set of normalized skill tokens with provenance. `BTreeSet`
/// keeps iteration (and thus every derived list) deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    source: KeywordSource,
    terms: BTreeSet<String>,
}

impl KeywordSet {
    pub fn source(&self) -> KeywordSource {
        self.source
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Terms of `self` absent from `other`, in alphabetical order.
    pub fn missing_from(&self, other: &KeywordSet) -> Vec<String> {
        self.terms.difference(&other.terms).cloned().collect()
    }

    /// Count of terms of `self` also present in `other`.
    pub fn matched_in(&self, other: &KeywordSet) -> usize {
        self.terms.intersection(&other.terms).count()
    }
}

/// A set of canonical skill terms, normalized for matching. Multi-word terms
/// are matched as token n-grams up to three words wide.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: HashSet<String>,
    max_words: usize,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary from caller-supplied terms. Terms are normalized
    /// the same way matched text is, so "Node.JS" and "node.js" are one term.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = HashSet::new();
        let mut max_words = 1;
        for term in terms {
            let canon = normalize_term(term.as_ref());
            if canon.is_empty() {
                continue;
            }
            max_words = max_words.max(canon.split(' ').count());
            normalized.insert(canon);
        }
        Self {
            terms: normalized,
            max_words: max_words.min(MAX_NGRAM_WORDS),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

const MAX_NGRAM_WORDS: usize = 3;

/// Extracts vocabulary-matched keywords from a text blob. Case-insensitive;
/// each canonical term is recorded once no matter how often it occurs.
/// Returns an empty set (never an error) when nothing matches.
pub fn extract_keywords(text: &str, vocab: &SkillVocabulary, source: KeywordSource) -> KeywordSet {
    let tokens = tokenize(text);
    let mut terms = BTreeSet::new();

    for width in 1..=vocab.max_words.min(tokens.len()) {
        for window in tokens.windows(width) {
            let candidate = window.join(" ");
            if vocab.contains(&candidate) {
                terms.insert(candidate);
            }
        }
    }

    debug!(
        "extracted {} keyword(s) from {:?} text ({} tokens)",
        terms.len(),
        source,
        tokens.len()
    );
    KeywordSet { source, terms }
}

/// Heuristic extraction for free-text skill lists when no vocabulary is
/// supplied: comma/bullet-separated fragments when delimiters are present,
/// otherwise capitalized tokens.
pub fn extract_freeform_skills(text: &str, source: KeywordSource) -> KeywordSet {
    let mut terms = BTreeSet::new();

    if text.contains([',', ';', '|', '\u{2022}']) {
        for fragment in text.split([',', ';', '|', '\u{2022}', '\n']) {
            let skill = fragment.trim().trim_end_matches('.').to_lowercase();
            if !skill.is_empty() && skill.len() <= 50 {
                terms.insert(skill);
            }
        }
    } else {
        for word in text.split_whitespace() {
            let is_capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
            if !is_capitalized {
                continue;
            }
            let cleaned = word
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
                .to_lowercase();
            if cleaned.len() >= 2 {
                terms.insert(cleaned);
            }
        }
    }

    KeywordSet { source, terms }
}

/// Lower-cases and tokenizes text into matchable tokens. The token class
/// keeps `#`, `+`, `.` and `-` so "c++", "c#", "node.js" and
/// "scikit-learn" survive. Trailing sentence punctuation and bullet dashes
/// are trimmed off; a leading `.` is kept, since it distinguishes ".net"
/// from the plain word "net".
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .filter_map(|m| {
            let token = m
                .as_str()
                .trim_end_matches(['.', '-'])
                .trim_start_matches('-');
            (!token.is_empty()).then(|| token.to_string())
        })
        .collect()
}

/// Normalizes a vocabulary term through the same tokenizer used for text, so
/// vocabulary and text always meet in the same form.
fn normalize_term(term: &str) -> String {
    tokenize(term).join(" ")
}
