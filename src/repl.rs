//! REPL Loop
//!
//! Reads lines from any buffered source until end-of-input, refreshing
//! well-known environment variables before each one, stripping comments,
//! and driving the rest through the engine against a shared `{stdin,
//! stdout}` pair. Used for interactive (`-i`) and piped stdin sessions, and
//! reused by the `source` built-in to drive a script file through the
//! exact same path, forwarding whatever endpoints `source` itself was
//! given.

use std::io::BufRead;

use crate::engine;
use crate::error::ShellError;
use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

/// Run every line of `lines` to completion, each against a fresh clone of
/// `stdin`/`stdout`. Returns the last recorded status; a negative (fatal)
/// status stops the loop early, matching §4.9.
pub fn run<R: BufRead>(
    lines: R,
    state: &mut ShellState,
    stdin: &InputEndpoint,
    stdout: &OutputEndpoint,
) -> Result<i32, ShellError> {
    let mut status = 0;
    for line in lines.lines() {
        status = run_one(&line?, state, stdin, stdout)?;
        if status < 0 {
            break;
        }
    }
    Ok(status)
}

/// The REPL's per-line body: refresh the environment, strip the comment,
/// run the line, and record its status. A parse/expansion error (§7) is
/// reported to standard error and recorded as status -1 rather than
/// unwinding out of this function — only a failure to clone the shared
/// stdin/stdout endpoints themselves propagates as an `Err`. Exposed
/// separately so the interactive front end (§6 — out of scope here beyond
/// this interface) can drive it one line at a time between prompt writes,
/// without duplicating this logic.
pub fn run_one(
    line: &str,
    state: &mut ShellState,
    stdin: &InputEndpoint,
    stdout: &OutputEndpoint,
) -> Result<i32, ShellError> {
    refresh_environment();
    let command = strip_comment(line);
    let status = match engine::run_line(command, state, stdin.try_clone()?, stdout.try_clone()?) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("tinysh: {}", e);
            e.status()
        }
    };
    state.record_status(status);
    Ok(status)
}

/// Refresh the two environment variables the REPL is responsible for:
/// `PWD` to the current working directory, `USER` to the login name of the
/// real UID (empty if it can't be resolved).
fn refresh_environment() {
    if let Ok(cwd) = std::env::current_dir() {
        std::env::set_var("PWD", cwd);
    }
    std::env::set_var("USER", current_user_name().unwrap_or_default());
}

fn current_user_name() -> Option<String> {
    unsafe {
        let passwd = libc::getpwuid(libc::getuid());
        if passwd.is_null() {
            return None;
        }
        let name = std::ffi::CStr::from_ptr((*passwd).pw_name);
        Some(name.to_string_lossy().into_owned())
    }
}

/// Truncate `line` at its first unquoted `#`, per the grammar's "`#` outside
/// quotes starts a comment to end-of-line".
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => in_quotes = !in_quotes,
            b'#' if !in_quotes => return &line[..i],
            b'\\' if in_quotes => i += 1,
            _ => {}
        }
        i += 1;
    }
    line
}
