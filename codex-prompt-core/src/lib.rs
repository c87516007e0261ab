//! Core functionality for codex-prompt
//!
//! Turns a free-text requirement document into a prompt for a code-generation
//! assistant: the analyzer extracts languages, bullet lines and non-functional
//! keywords, and the formatter lays them out around the original text.

pub mod analyzer;
pub mod catalog;
pub mod errors;
pub mod prompt;
pub mod request;

pub use analyzer::{AnalysisResult, RequirementAnalyzer, analyze};
pub use catalog::{Catalog, LanguageCandidate};
pub use errors::{PromptError, PromptResult};
pub use prompt::{PromptFormatter, extract_requirement_document, format_prompt};
pub use request::{ErrorResponse, PromptRequest, PromptResponse, process_input};

/// Analyze a document and format the prompt in one step
pub fn generate_prompt(document: &str) -> String {
    format_prompt(&analyze(document), document)
}
