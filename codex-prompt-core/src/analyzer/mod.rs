//! Requirement document analysis
//!
//! Extracts surface signals from free text: mentioned languages, bullet-point
//! lines and non-functional requirement keywords. Every input is valid.

mod bullets;
mod keywords;
mod languages;

pub use bullets::extract_functionalities;
pub use keywords::scan_keywords;
pub use languages::LanguageMatcher;

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Signals extracted from one requirement document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected language labels, in catalog order
    pub languages: Vec<String>,
    /// Bullet line contents, in document order
    pub functionalities: Vec<String>,
    /// Matched non-functional keywords, in catalog order
    pub non_functional_requirements: Vec<String>,
    /// Character count of the document
    pub doc_length: usize,
}

/// Analyzer over a candidate catalog
#[derive(Debug, Clone, Default)]
pub struct RequirementAnalyzer {
    catalog: Catalog,
}

impl RequirementAnalyzer {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Analyze a requirement document
    pub fn analyze(&self, document: &str) -> AnalysisResult {
        let result = AnalysisResult {
            languages: LanguageMatcher::new(&self.catalog.languages).detect_all(document),
            functionalities: extract_functionalities(&self.catalog.bullet_markers, document),
            non_functional_requirements: scan_keywords(&self.catalog.nfr_keywords, document),
            doc_length: document.chars().count(),
        };

        debug!(
            languages = result.languages.len(),
            functionalities = result.functionalities.len(),
            non_functional = result.non_functional_requirements.len(),
            doc_length = result.doc_length,
            "Analyzed requirement document"
        );

        result
    }
}

/// Analyze a document with the built-in catalog
pub fn analyze(document: &str) -> AnalysisResult {
    RequirementAnalyzer::default().analyze(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageCandidate;

    #[test]
    fn test_empty_document() {
        assert_eq!(analyze(""), AnalysisResult::default());
    }

    #[test]
    fn test_feature_bullets() {
        let result = analyze("- Feature A\n- Feature B");
        assert_eq!(result.functionalities, vec!["Feature A", "Feature B"]);
        assert!(result.languages.is_empty());
        assert!(result.non_functional_requirements.is_empty());
        assert_eq!(result.doc_length, 23);
    }

    #[test]
    fn test_doc_length_counts_characters() {
        let result = analyze("性能•");
        assert_eq!(result.doc_length, 3);
        assert_eq!(result.non_functional_requirements, vec!["性能"]);
    }

    #[test]
    fn test_mixed_document() {
        let doc = "Write a Python and JavaScript service\n\
                   * login\n\
                   • sign out\n\
                   要求：安全、性能";
        let result = analyze(doc);
        assert_eq!(result.languages, vec!["Python", "JavaScript", "Java"]);
        assert_eq!(result.functionalities, vec!["login", "sign out"]);
        assert_eq!(result.non_functional_requirements, vec!["性能", "安全"]);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog {
            languages: vec![LanguageCandidate::new("Rust", &["rust"])],
            bullet_markers: vec!['+'],
            nfr_keywords: vec!["latency".to_string()],
        };
        let analyzer = RequirementAnalyzer::new(catalog);
        let result = analyzer.analyze("Rust service\n+ low latency\n- ignored");

        assert_eq!(result.languages, vec!["Rust"]);
        assert_eq!(result.functionalities, vec!["low latency"]);
        assert_eq!(result.non_functional_requirements, vec!["latency"]);
        assert_eq!(analyzer.catalog().bullet_markers, vec!['+']);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(analyze("- a")).unwrap();
        assert_eq!(value["functionalities"], serde_json::json!(["a"]));
        assert_eq!(value["non_functional_requirements"], serde_json::json!([]));
        assert_eq!(value["doc_length"], serde_json::json!(3));
    }
}
