//! help - List the built-in commands and their one-line usage

use std::io::Write;

use super::TABLE;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

pub fn run(_args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, _state: &mut ShellState) -> i32 {
    drop(stdin);
    let mut out = stdout.into_writer();
    for entry in TABLE {
        if writeln!(out, "{}", entry.help).is_err() {
            return -1;
        }
    }
    0
}
