use thiserror::Error;

/// Engine-level error type.
///
/// Only the binary-format extraction step can fail hard on malformed input;
/// every analysis stage past extraction is total over well-formed text.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The byte stream was not valid for its declared format (corrupt
    /// archive, unreadable encoding). Fatal to the single request.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Input on which no score can meaningfully be computed, or a
    /// misconfigured engine (e.g. weights that do not sum to 1.0).
    #[error("Validation error: {0}")]
    Validation(String),
}
