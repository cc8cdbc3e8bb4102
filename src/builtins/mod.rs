//! Built-in Table
//!
//! A fixed mapping from command name to handler, with a help string.
//! Every handler receives the already-tokenized argument vector (`args[0]`
//! is the builtin's own name, matching ordinary `argv` convention) and the
//! stage's `{read, write}` endpoints, and returns a status: non-negative on
//! success, negative on failure.

mod cd;
mod eval;
mod exit;
mod help;
mod set;
mod source;
mod unset;

use crate::process::{InputEndpoint, OutputEndpoint};
use crate::state::ShellState;

/// One entry of the built-in table: name, one-line help, and handler.
pub struct Builtin {
    pub name: &'static str,
    pub help: &'static str,
    pub run: fn(&[String], InputEndpoint, OutputEndpoint, &mut ShellState) -> i32,
}

pub const TABLE: &[Builtin] = &[
    Builtin { name: "cd", help: "cd DIR - change the working directory", run: cd::run },
    Builtin { name: "exit", help: "exit [N] - terminate the shell with status N", run: exit::run },
    Builtin { name: "help", help: "help - list built-in commands", run: help::run },
    Builtin { name: "set", help: "set [NAME [VALUE]] - print or assign environment variables", run: set::run },
    Builtin { name: "unset", help: "unset NAME - remove an environment variable", run: unset::run },
    Builtin { name: "source", help: "source FILE... - read and execute commands from FILE", run: source::run },
    Builtin { name: "eval", help: "eval ARG... - re-expand and execute the joined arguments", run: eval::run },
];

/// Whether `name` names a built-in.
pub fn is_builtin(name: &str) -> bool {
    TABLE.iter().any(|b| b.name == name)
}

/// Dispatch to the named built-in. Panics if `name` is not a built-in;
/// callers must check `is_builtin` first.
pub fn run(name: &str, args: &[String], stdin: InputEndpoint, stdout: OutputEndpoint, state: &mut ShellState) -> i32 {
    let entry = TABLE.iter().find(|b| b.name == name).expect("checked by is_builtin");
    (entry.run)(args, stdin, stdout, state)
}
