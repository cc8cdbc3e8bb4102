//! unset - Remove an environment variable

use std::io::Write;

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, _state: &mut ShellState) -> i32 {
    drop(stdin);

    let Some(name) = args.get(1) else {
        let mut out = stdout.into_writer();
        let _ = writeln!(out, "unset: missing variable name");
        return -1;
    };

    std::env::remove_var(name);
    0
}
