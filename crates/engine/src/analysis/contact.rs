//! Contact-information capture from raw resume text. Feeds the contact
//! format signal and gives callers the header fields of the parsed resume.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.+-]+@[\w.-]+\.\w+").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}").unwrap()
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"github\.com/[A-Za-z0-9_-]+").unwrap());

/// Contact fields detected in a resume. Every field is optional; a resume
/// with none of them simply loses the contact format signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl ContactInfo {
    /// Whether the resume gives a recruiter a way to reach the candidate.
    pub fn is_reachable(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}

/// Scans raw resume text for contact details. The candidate name is taken
/// as the first non-blank line when it does not look like contact data
/// itself.
pub fn detect_contact_info(text: &str) -> ContactInfo {
    let first_line = text.lines().map(str::trim).find(|l| !l.is_empty());
    let name = first_line
        .filter(|l| !l.contains('@') && !l.chars().any(|c| c.is_ascii_digit()))
        .map(str::to_string);

    ContactInfo {
        name,
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        linkedin: LINKEDIN_RE.find(text).map(|m| m.as_str().to_string()),
        github: GITHUB_RE.find(text).map(|m| m.as_str().to_string()),
    }
}
