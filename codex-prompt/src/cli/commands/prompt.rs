//! Prompt command: one JSON request on stdin, one JSON response on stdout

use anyhow::{Context, Result};
use codex_prompt_core::errors::processing_message;
use codex_prompt_core::{ErrorResponse, PromptError, process_input};
use std::io::{self, Read, Write};
use tracing::debug;

/// Execute the prompt command
pub fn execute() -> Result<()> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw).map_err(PromptError::from)?;

    let response = process_input(&raw)?;
    let json = response.to_json_pretty()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write response")?;
    stdout.flush().context("Failed to flush response")?;

    debug!("Wrote prompt ({} chars)", response.codex_prompt.chars().count());
    Ok(())
}

/// Map a failure onto the JSON error response
pub fn error_response(err: &anyhow::Error) -> ErrorResponse {
    match err.downcast_ref::<PromptError>() {
        Some(prompt_err) => ErrorResponse::from(prompt_err),
        None => ErrorResponse::new(processing_message(format!("{:#}", err))),
    }
}
