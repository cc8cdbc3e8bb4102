//! set - Print or assign environment variables
//!
//! `set` with no arguments dumps the whole environment as `NAME=VALUE`
//! lines, sorted for deterministic output. `set NAME` assigns the empty
//! string. `set NAME VALUE` assigns `VALUE`.

use std::io::Write;

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, _state: &mut ShellState) -> i32 {
    drop(stdin);

    match args.len() {
        1 => {
            let mut out = stdout.into_writer();
            let mut vars: Vec<(String, String)> = std::env::vars().collect();
            vars.sort_by(|a, b| a.0.cmp(&b.0));
            for (name, value) in vars {
                if writeln!(out, "{}={}", name, value).is_err() {
                    return -1;
                }
            }
            0
        }
        2 => {
            std::env::set_var(&args[1], "");
            0
        }
        3 => {
            std::env::set_var(&args[1], &args[2]);
            0
        }
        _ => {
            let mut out = stdout.into_writer();
            let _ = writeln!(out, "set: usage: set [NAME [VALUE]]");
            -1
        }
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
    fn assigns_a_variable_with_value() {
        let status = run(
            &["set".to_string(), "TINYSH_TEST_VAR".to_string(), "ok".to_string()],
            InputEndpoint::Inherit,
            OutputEndpoint::Inherit,
            &mut state(),
        );
        assert_eq!(status, 0);
        assert_eq!(std::env::var("TINYSH_TEST_VAR").unwrap(), "ok");
    }

    #[test]
    fn one_argument_assigns_the_empty_string() {
        std::env::set_var("TINYSH_TEST_EMPTY", "not empty yet");
        let status = run(
            &["set".to_string(), "TINYSH_TEST_EMPTY".to_string()],
            InputEndpoint::Inherit,
            OutputEndpoint::Inherit,
            &mut state(),
        );
        assert_eq!(status, 0);
        assert_eq!(std::env::var("TINYSH_TEST_EMPTY").unwrap(), "");
    }

    #[test]
    fn dumps_environment_with_no_arguments() {
        std::env::set_var("TINYSH_TEST_DUMP", "present");
        let (mut reader, writer) = os_pipe::pipe().unwrap();
        let status = run(
            &["set".to_string()],
            InputEndpoint::Inherit,
            OutputEndpoint::Pipe(writer),
            &mut state(),
        );
        assert_eq!(status, 0);
        let mut output = String::new();
        reader.read_to_string(&mut output).unwrap();
        assert!(output.contains("TINYSH_TEST_DUMP=present"));
    }

    #[test]
    fn too_many_arguments_fails() {
        let status = run(
            &["set".to_string(), "A".to_string(), "B".to_string(), "C".to_string()],
            InputEndpoint::Inherit,
            OutputEndpoint::Inherit,
            &mut state(),
        );
        assert_eq!(status, -1);
    }
}
