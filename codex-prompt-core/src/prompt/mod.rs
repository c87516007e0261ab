//! Prompt generation and reading
//!
//! Formats analysis results into the assistant prompt, and reads the verbatim
//! requirement document back out of a generated prompt.

mod formatter;


pub use formatter::{PromptFormatter, format_prompt};

/// The requirement document embedded in a generated prompt, exactly as it was given.
/// Returns `None` when the prompt lacks the document section.
pub fn extract_requirement_document(prompt: &str) -> Option<&str> {
    regex_utils::prompt_sections::document_block(prompt)
}
