use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "codex-prompt",
    version,
    about = "Codex Prompt - Turn a requirement document into a code-generation prompt",
    long_about = "Reads {\"requirement_doc\": \"...\"} as JSON on stdin and writes {\"codex_prompt\": \"...\"} to stdout. Failures are written to stderr as {\"error\": \"...\"} with exit code 1."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
