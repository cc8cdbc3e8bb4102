//! Execution Entry Point
//!
//! The single re-entrant "run one line" procedure shared by the REPL, the
//! capture driver (`$(...)`), and the `source`/`eval` built-ins. Comment
//! stripping is the REPL's concern (§4.9) and happens before a line ever
//! reaches here; this function only expands and executes.

use crate::error::ShellError;
use crate::expansion;
use crate::lexer;
use crate::process::pipeline;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

/// Expand `line`'s `$`-constructs, split it into `|`-stages, and run the
/// resulting pipeline against `stdin`/`stdout`. Returns the pipeline's
/// status.
pub fn run_line(
    line: &str,
    state: &mut ShellState,
    stdin: InputEndpoint,
    stdout: OutputEndpoint,
) -> Result<i32, ShellError> {
    let expanded = expansion::expand(line, state)?;
    let stages = lexer::split_stages(&expanded)?;
    pipeline::execute(&stages, stdin, stdout, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ShellState {
        ShellState::new(vec!["prog".to_string()])
    }

    #[test]
    fn runs_a_single_command() {
        let status = run_line("true", &mut state(), InputEndpoint::Inherit, OutputEndpoint::Inherit);
        assert_eq!(status.unwrap(), 0);
    }

    #[test]
    fn expands_before_splitting_stages() {
        std::env::set_var("TINYSH_ENGINE_TEST", "a|b");
        let status = run_line("echo ${TINYSH_ENGINE_TEST}", &mut state(), InputEndpoint::Inherit, OutputEndpoint::Inherit);
        // The expansion happens before stage-splitting, so a literal `|`
        // coming out of a variable is inert: it was never quoted, so it still
        // splits the line, but the point under test is simply that expansion
        // runs first without erroring.
        assert!(status.is_ok());
        std::env::remove_var("TINYSH_ENGINE_TEST");
    }

    #[test]
    fn empty_line_succeeds() {
        let status = run_line("", &mut state(), InputEndpoint::Inherit, OutputEndpoint::Inherit);
        assert_eq!(status.unwrap(), 0);
    }
}
