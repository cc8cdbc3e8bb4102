//! Capture Driver
//!
//! Runs one pipeline to completion with its stdin optionally pre-fed from a
//! memory buffer and its stdout drained into a newly allocated buffer. Used
//! exclusively by the expander for `$(...)`.

use os_pipe::pipe;
use std::io::{Read, Write};

use crate::engine;
use crate::error::ShellError;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

/// Run `command` as a full pipeline (comment-stripping is a REPL-only
/// concern and does not apply here), feeding it `stdin` if given, and
/// return its captured stdout. Returns `Ok(None)` if the pipeline's status
/// was non-zero, per the §4.8 contract.
pub fn capture(command: &str, stdin: Option<&[u8]>, state: &mut ShellState) -> Result<Option<Vec<u8>>, ShellError> {
    let (in_read, mut in_write) = pipe()?;
    if let Some(data) = stdin {
        in_write.write_all(data)?;
    }
    drop(in_write); // close the write end so the reader sees EOF

    let (mut out_read, out_write) = pipe()?;

    let status = engine::run_line(
        command,
        state,
        InputEndpoint::Pipe(in_read),
        OutputEndpoint::Pipe(out_write),
    )?;

    let mut buffer = Vec::new();
    out_read.read_to_end(&mut buffer)?;

    if status == 0 {
        Ok(Some(buffer))
    } else {
        Ok(None)
    }
}

/// Convenience wrapper for the expander: capture `command`'s stdout as a
/// string, trimming exactly one trailing newline (the conventional
/// `$(...)` behavior needed for nested substitutions like
/// `$(echo $(echo deep))` to read back as a single line), substituting the
/// empty string when the command failed.
pub fn capture_to_string(command: &str, state: &mut ShellState) -> Result<String, ShellError> {
    match capture(command, None, state)? {
        Some(mut bytes) => {
            if bytes.last() == Some(&b'\n') {
                bytes.pop();
            }
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => Ok(String::new()),
    }
}
