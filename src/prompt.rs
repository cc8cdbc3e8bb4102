//! Interactive Front End
//!
//! The line-reader/prompting front end is explicitly out of scope for the
//! core (§1) and specified only at its interface (§6): write a prompt,
//! read one line, hand it to the REPL's per-line body. No history, no
//! completion, no readline editing — a plain blocking read.

use std::io::{BufRead, Write};

use crate::error::ShellError;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::repl;
use crate::state::ShellState;

/// Default `PROMPT` template installed on first entry if the variable is
/// unset, per §6's "Environment variables" note.
const DEFAULT_PROMPT: &str = "tinysh$ ";

/// Drive the interactive loop: print `$PROMPT`, read one line from
/// `input`, run it, repeat until end-of-input. Installs `PROMPT` in the
/// environment if absent before the first read. Per §7, interactive mode
/// reprints the prompt even after a fatal status; only real end-of-input
/// ends the loop.
pub fn run<R: BufRead>(mut input: R, state: &mut ShellState) -> Result<i32, ShellError> {
    if std::env::var("PROMPT").is_err() {
        std::env::set_var("PROMPT", DEFAULT_PROMPT);
    }

    let mut status = 0;
    let mut line = String::new();
    loop {
        print!("{}", std::env::var("PROMPT").unwrap_or_default());
        std::io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // end-of-input terminates the loop cleanly
        }
        let trimmed = line.trim_end_matches('\n');

        status = repl::run_one(trimmed, state, &InputEndpoint::Inherit, &OutputEndpoint::Inherit)?;
    }
    Ok(status)
}
