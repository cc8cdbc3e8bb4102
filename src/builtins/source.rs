//! source - Read and execute commands from one or more files

use std::fs::File;
use std::io::{BufReader, Write};

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::repl;
use crate::state::ShellState;

pub fn run(args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, state: &mut ShellState) -> i32 {
    drop(stdin); // source reads its arguments, not its own standard input

    let mut status = 0;
    for path in &args[1..] {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                let mut out = stdout.try_clone().map(OutputEndpoint::into_writer).unwrap_or_else(|_| Box::new(std::io::sink()));
                let _ = writeln!(out, "source: {}: {}", path, e);
                return -1;
            }
        };

        match repl::run(BufReader::new(file), state, &InputEndpoint::Inherit, &stdout) {
            Ok(s) => status = s,
            Err(e) => {
                let mut out = stdout.try_clone().map(OutputEndpoint::into_writer).unwrap_or_else(|_| Box::new(std::io::sink()));
                let _ = writeln!(out, "source: {}: {}", path, e);
                return e.status();
            }
        }

        if status < 0 {
            return status;
        }
    }
    status
}
