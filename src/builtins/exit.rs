//! exit - Terminate the process with the given status

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, _state: &mut ShellState) -> i32 {
    drop(stdin);
    drop(stdout);

    let code = args
        .get(1)
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(0);
    std::process::exit(code);
}
