use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::Cli;
use cli::commands::prompt;

fn main() -> ExitCode {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // stderr doubles as the error channel, so stay quiet unless asked
    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match prompt::execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Prompt generation failed: {:?}", err);
            match prompt::error_response(&err).to_json() {
                Ok(json) => eprintln!("{}", json),
                Err(json_err) => debug!("Failed to encode error response: {}", json_err),
            }
            ExitCode::FAILURE
        }
    }
}
