//! Regex utilities for codex-prompt
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled regex patterns for reading sections back out of a generated prompt
pub mod prompt_sections {
    use super::*;

    /// Matches the fenced requirement document between its header and the closing instruction.
    /// The capture is greedy so fences inside the document itself stay part of the capture.
    pub static DOCUMENT_BLOCK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?s)\n详细需求文档:\n```\n(.*)\n```\n\n请根据以上需求生成完整的代码实现，包括:")
            .expect("Invalid regex pattern")
    });

    /// Extract the verbatim requirement document from a prompt
    pub fn document_block(prompt: &str) -> Option<&str> {
        DOCUMENT_BLOCK
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
