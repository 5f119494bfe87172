use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::error::MockError;
use crate::oracle::Responder;

const MOCK_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "judge-mock",
    version = MOCK_VERSION,
    about = "Mock model for LLM judge tests: prints a canned answer for a prompt",
    args_override_self = true
)]
pub struct Cli {
    /// The input prompt; may start with `-`
    #[arg(long, allow_hyphen_values = true)]
    pub input: String,
}

pub fn run(cli: Cli) -> Result<(), MockError> {
    let responder = Responder::builtin()?;
    debug!(
        overrides = responder.tables().overrides().len(),
        correct = responder.tables().correct().len(),
        "answer tables loaded"
    );
    let stdout = io::stdout();
    answer_to(&responder, &cli.input, &mut stdout.lock())
}

/// Writes the answer for `prompt` as one line.
pub fn answer_to<W: Write>(responder: &Responder, prompt: &str, out: &mut W) -> Result<(), MockError> {
    debug!(len = prompt.len(), "prompt received");
    let answer = responder.lookup(prompt);
    writeln!(out, "{}", answer.text())?;
    out.flush()?;
    Ok(())
}
