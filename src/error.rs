//! Shell Error Kinds
//!
//! A single error enum unifying every failure mode the parser, expander,
//! and executor can produce. Kept as one type (rather than one per module)
//! because the REPL's top-level dispatch needs a uniform status mapping
//! regardless of which subsystem failed.

use thiserror::Error;

/// All error kinds the core can produce.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(char),

    #[error("unbalanced command substitution")]
    UnbalancedSubstitution,

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{command}: {message}")]
    Builtin { command: String, message: String },
}

impl ShellError {
    /// Map an error to the negative status the spec requires internal
    /// failures to carry (distinct from a child's own non-negative exit code).
    pub fn status(&self) -> i32 {
        -1
    }
}
