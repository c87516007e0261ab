//! Non-functional requirement keyword scan

/// Keywords that occur anywhere in the document, in list order.
/// Matching is literal and case-sensitive.
pub fn scan_keywords(keywords: &[String], document: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for keyword in keywords {
        if document.contains(keyword.as_str()) && !found.contains(keyword) {
            found.push(keyword.clone());
        }
    }

    found
}
