//! Functional requirement extraction from bullet lines

/// Collect the text of every line that starts with a bullet marker.
///
/// Lines are trimmed first; exactly one marker character is removed and the
/// remainder is trimmed again. A bare marker yields an empty entry.
pub fn extract_functionalities(markers: &[char], document: &str) -> Vec<String> {
    document
        .split('\n')
        .filter_map(|line| {
            let trimmed = trim_blank(line);
            let mut chars = trimmed.chars();
            let first = chars.next()?;

            markers
                .contains(&first)
                .then(|| trim_blank(chars.as_str()).to_string())
        })
        .collect()
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
