//! Error types for prompt generation
//!
//! Every failure is terminal for the invocation; the entry point turns it into
//! an `{"error": ...}` object on stderr.

use thiserror::Error;

/// Prefix placed in front of every error that is not a missing document
pub const PROCESSING_ERROR_PREFIX: &str = "处理过程中发生错误: ";

/// Main error type for prompt generation
#[derive(Debug, Error)]
pub enum PromptError {
    /// The request carried no requirement document, or an empty one
    #[error("缺少需求文档输入")]
    MissingDocument,

    /// The request was valid JSON but not of the expected shape
    #[error("{message}")]
    InvalidInput { message: String },

    /// Request parsing or response serialization failed
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Reading stdin or writing stdout failed
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Text for the `error` field of the error response
    pub fn report_message(&self) -> String {
        match self {
            Self::MissingDocument => self.to_string(),
            other => processing_message(other),
        }
    }
}

/// Wrap an arbitrary failure description in the processing error template
pub fn processing_message(detail: impl std::fmt::Display) -> String {
    format!("{PROCESSING_ERROR_PREFIX}{detail}")
}

/// Result type for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;
