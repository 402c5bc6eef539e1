//! Document-kind classification. Uploads are not always resumes; a quick
//! keyword census tells a marksheet or an ID card apart from the real thing
//! before scores get taken at face value.

/// What an uploaded document looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    Marksheet,
    Certificate,
    IdCard,
    Unknown,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Marksheet => "marksheet",
            DocumentKind::Certificate => "certificate",
            DocumentKind::IdCard => "identity card",
            DocumentKind::Unknown => "unknown document",
        }
    }
}

const RESUME_MARKERS: &[&str] = &[
    "experience", "education", "skills", "work", "project", "objective",
    "summary", "employment", "qualification", "achievements",
];

const MARKSHEET_MARKERS: &[&str] = &[
    "grade", "marks", "score", "semester", "cgpa", "sgpa", "examination",
    "result", "academic year", "percentage",
];

const CERTIFICATE_MARKERS: &[&str] = &[
    "certificate", "certification", "awarded", "completed", "achievement",
    "training", "course completion", "qualified",
];

const ID_CARD_MARKERS: &[&str] = &[
    "id card", "identity", "student id", "employee id", "valid until",
    "date of issue", "identification",
];

/// Census table in tie-break order: a draw goes to the earlier kind, so a
/// plausible resume is never misfiled as something else.
const KIND_TABLE: &[(DocumentKind, &[&str])] = &[
    (DocumentKind::Resume, RESUME_MARKERS),
    (DocumentKind::Marksheet, MARKSHEET_MARKERS),
    (DocumentKind::Certificate, CERTIFICATE_MARKERS),
    (DocumentKind::IdCard, ID_CARD_MARKERS),
];

/// Classifies a document by counting marker keywords per kind. A kind needs
/// at least one hit; no hits at all is `Unknown`.
pub fn detect_document_kind(text: &str) -> DocumentKind {
    let lower = text.to_lowercase();

    let mut best = DocumentKind::Unknown;
    let mut best_hits = 0usize;
    for &(kind, markers) in KIND_TABLE {
        let hits = markers.iter().filter(|m| lower.contains(*m)).count();
        if hits > best_hits {
            best = kind;
            best_hits = hits;
        }
    }
    best
}
