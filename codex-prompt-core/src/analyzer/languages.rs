//! Language detection by substring containment

use crate::catalog::LanguageCandidate;

/// Matches documents against a list of language candidates
pub struct LanguageMatcher<'a> {
    candidates: &'a [LanguageCandidate],
}

impl<'a> LanguageMatcher<'a> {
    pub fn new(candidates: &'a [LanguageCandidate]) -> Self {
        Self { candidates }
    }

    /// Every matching label, in candidate order
    pub fn detect_all(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut labels: Vec<String> = Vec::new();

        for candidate in self.candidates {
            let matched = candidate
                .needles
                .iter()
                .any(|needle| text_lower.contains(&needle.to_lowercase()));

            if matched && !labels.contains(&candidate.label) {
                labels.push(candidate.label.clone());
            }
        }

        labels
    }
}
