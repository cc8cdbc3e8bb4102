//! Process Spawner
//!
//! Creates one child process per external pipeline stage: its standard
//! input and output are rewired to the caller-supplied endpoints, then the
//! named program is exec'd from the search path, inheriting the current
//! environment. `std::process::Command` performs the underlying
//! fork+exec+dup2 sequence; this module only supplies the endpoints and
//! classifies the spawn-time failure the way a shell would.

use std::process::{Child, Command};

use super::{InputEndpoint, OutputEndpoint};

/// Exit status a shell conventionally reports when a command can't be run.
pub const STATUS_NOT_FOUND: i32 = 127;
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

/// Spawn `argv[0]` with `argv[1..]` as arguments, wiring `stdin`/`stdout` to
/// the given endpoints and inheriting stderr and the environment. Returns
/// the running child on success, or the diagnostic status a shell would
/// report (printed to stderr) if the program could not be found/executed.
pub fn spawn(argv: &[String], stdin: InputEndpoint, stdout: OutputEndpoint) -> Result<Child, i32> {
    let Some(program) = argv.first() else {
        return Err(STATUS_NOT_FOUND);
    };

    let mut command = Command::new(program);
    command.args(&argv[1..]);
    command.stdin(stdin.into_stdio());
    command.stdout(stdout.into_stdio());
    command.stderr(std::process::Stdio::inherit());

    match command.spawn() {
        Ok(child) => Ok(child),
        Err(e) => {
            let status = match e.kind() {
                std::io::ErrorKind::NotFound => STATUS_NOT_FOUND,
                _ => STATUS_NOT_EXECUTABLE,
            };
            eprintln!("{}: {}", program, e);
            Err(status)
        }
    }
}
