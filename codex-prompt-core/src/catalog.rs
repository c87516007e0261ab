//! Built-in candidate lists used by the analyzer
//!
//! The scan order of every list is significant: it is the order in which
//! labels appear in the analysis result and in the generated prompt.

use serde::{Deserialize, Serialize};

/// A language label and the lower-case substrings that select it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    /// Display label written into the prompt
    pub label: String,
    /// Substrings tested against the lower-cased document
    pub needles: Vec<String>,
}

impl LanguageCandidate {
    pub fn new(label: &str, needles: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            needles: needles.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Candidate lists for language detection, bullet extraction and keyword scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Languages, in scan order
    pub languages: Vec<LanguageCandidate>,
    /// Characters that mark a functional requirement line
    pub bullet_markers: Vec<char>,
    /// Non-functional requirement keywords, matched case-sensitively
    pub nfr_keywords: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            // Overlapping needles stay: "javascript" yields both JavaScript and Java,
            // and any word containing "go" yields Go.
            languages: vec![
                LanguageCandidate::new("Python", &["python"]),
                LanguageCandidate::new("JavaScript", &["javascript", "js"]),
                LanguageCandidate::new("Java", &["java"]),
                LanguageCandidate::new("C++", &["c++", "cpp"]),
                LanguageCandidate::new("Go", &["go", "golang"]),
            ],
            bullet_markers: vec!['-', '*', '•'],
            nfr_keywords: ["性能", "安全", "可用性", "可扩展性", "兼容性", "维护性"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
