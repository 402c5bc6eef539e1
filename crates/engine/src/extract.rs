//! Text extraction: raw bytes plus a declared format become one normalized
//! text buffer. Binary parsing itself is delegated to library collaborators
//! (`pdf-extract`, `zip`); this module owns the contract and the cleanup.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::AnalyzerError;

/// Declared source format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Plain,
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Maps a file extension to a format. Markdown and unknown text-like
    /// extensions fall back to `Plain`; only `pdf` and `docx` get binary
    /// treatment.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => SourceFormat::Pdf,
            "docx" => SourceFormat::Docx,
            _ => SourceFormat::Plain,
        }
    }
}

/// Immutable analysis input: the canonical text buffer plus its origin tag.
/// Built once per request and never mutated afterward.
#[derive(Debug, Clone)]
pub struct RawDocument {
    text: String,
    format: SourceFormat,
}

impl RawDocument {
    /// Decodes `bytes` according to the declared `format` and normalizes the
    /// result into the canonical buffer. Fails with
    /// [`AnalyzerError::Extraction`] when the bytes are not valid for the
    /// format.
    pub fn from_bytes(bytes: &[u8], format: SourceFormat) -> Result<Self, AnalyzerError> {
        let raw = match format {
            SourceFormat::Plain => std::str::from_utf8(bytes)
                .map_err(|e| AnalyzerError::Extraction(format!("invalid UTF-8 text: {e}")))?
                .to_string(),
            SourceFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| AnalyzerError::Extraction(format!("PDF extraction failed: {e}")))?,
            SourceFormat::Docx => extract_docx_text(bytes)?,
        };

        let text = normalize(&raw);
        debug!(
            "extracted {} chars ({} lines) from {:?} input",
            text.len(),
            text.lines().count(),
            format
        );
        Ok(Self { text, format })
    }

    /// Wraps already-extracted text (the common path: an external collaborator
    /// has done the binary parsing).
    pub fn from_text(text: &str) -> Self {
        Self {
            text: normalize(text),
            format: SourceFormat::Plain,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }
}

/// Canonical buffer normalization: CRLF/CR to LF, trailing whitespace
/// trimmed per line. Blank lines are preserved; the segmenter uses them as
/// entry boundaries.
fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A DOCX file is a ZIP container; the body text lives in
/// `word/document.xml`. Paragraph close tags become newlines, every other
/// tag is stripped, and the five XML entities are unescaped.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AnalyzerError> {
    static XML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AnalyzerError::Extraction(format!("not a valid DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AnalyzerError::Extraction(format!("DOCX is missing its document part: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AnalyzerError::Extraction(format!("unreadable DOCX document part: {e}")))?;

    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", " ");
    let stripped = XML_TAG.replace_all(&with_breaks, "");
    let unescaped = stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    Ok(unescaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_round_trips() {
        let doc = RawDocument::from_bytes(b"Summary\nRust engineer", SourceFormat::Plain).unwrap();
        assert_eq!(doc.text(), "Summary\nRust engineer");
        assert_eq!(doc.format(), SourceFormat::Plain);
    }

    #[test]
    fn test_crlf_normalized_to_lf() {
        let doc = RawDocument::from_bytes(b"a\r\nb\rc", SourceFormat::Plain).unwrap();
        assert_eq!(doc.text(), "a\nb\nc");
    }

    #[test]
    fn test_trailing_whitespace_trimmed_per_line() {
        let doc = RawDocument::from_bytes(b"Skills   \nPython  ", SourceFormat::Plain).unwrap();
        assert_eq!(doc.text(), "Skills\nPython");
    }

    #[test]
    fn test_blank_lines_preserved() {
        let doc = RawDocument::from_bytes(b"a\n\nb", SourceFormat::Plain).unwrap();
        assert_eq!(doc.text(), "a\n\nb");
    }

    #[test]
    fn test_invalid_utf8_is_extraction_error() {
        let err = RawDocument::from_bytes(&[0xff, 0xfe, 0x00], SourceFormat::Plain).unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let err = RawDocument::from_bytes(b"not a pdf at all", SourceFormat::Pdf).unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
    }

    #[test]
    fn test_garbage_docx_is_extraction_error() {
        let err = RawDocument::from_bytes(b"not a zip archive", SourceFormat::Docx).unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
    }

    #[test]
    fn test_docx_missing_document_part_is_extraction_error() {
        // A valid but empty ZIP archive: no word/document.xml inside.
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            writer.finish().unwrap();
        }
        let err = RawDocument::from_bytes(&buf, SourceFormat::Docx).unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
    }

    #[test]
    fn test_minimal_docx_extracts_paragraph_text() {
        let xml = concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "<w:document><w:body>",
            "<w:p><w:r><w:t>Experience</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>Built &amp; shipped APIs</w:t></w:r></w:p>",
            "</w:body></w:document>"
        );
        let mut buf = Vec::new();
        {
            use std::io::Write;
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        let doc = RawDocument::from_bytes(&buf, SourceFormat::Docx).unwrap();
        assert_eq!(doc.text(), "Experience\nBuilt & shipped APIs");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("PDF"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_extension("docx"), SourceFormat::Docx);
        assert_eq!(SourceFormat::from_extension("txt"), SourceFormat::Plain);
        assert_eq!(SourceFormat::from_extension("md"), SourceFormat::Plain);
    }
}
