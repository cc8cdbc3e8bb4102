//! cd - Change the current working directory

use std::io::Write;

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, _state: &mut ShellState) -> i32 {
    drop(stdin); // cd never reads its input

    let Some(target) = args.get(1) else {
        let mut out = stdout.into_writer();
        let _ = writeln!(out, "cd: missing directory argument");
        return -1;
    };

    match std::env::set_current_dir(target) {
        Ok(()) => 0,
        Err(e) => {
            let mut out = stdout.into_writer();
            let _ = writeln!(out, "cd: {}: {}", target, e);
            -1
        }
    }
}
