//! Shell State
//!
//! The handful of pieces of state that outlive a single line: the
//! launcher's positional parameters (read-only after startup) and the
//! last-status string. The environment itself is not duplicated here — it
//! is the process environment, read/written directly through `std::env` so
//! that child processes inherit it at fork without any extra plumbing.

/// A fixed, read-only view over the launcher's own command-line arguments.
#[derive(Debug, Clone)]
pub struct PositionalParams {
    args: Vec<String>,
}

impl PositionalParams {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// `$0..$9`. Out-of-range indices yield the empty string.
    pub fn get(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

/// The shell's mutable bookkeeping for one REPL session.
pub struct ShellState {
    pub positional: PositionalParams,
    /// Decimal string reflecting the integer result of the most recently
    /// completed top-level pipeline; read by `$?` expansion.
    pub last_status: String,
}

impl ShellState {
    pub fn new(positional: Vec<String>) -> Self {
        Self {
            positional: PositionalParams::new(positional),
            last_status: "00000".to_string(),
        }
    }

    /// Record the integer result of the most recently completed top-level
    /// pipeline, zero-padded to five digits per the REPL's `$?` convention.
    /// Updated exactly once per top-level call.
    pub fn record_status(&mut self, status: i32) {
        self.last_status = format!("{:05}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_out_of_range_is_empty() {
        let p = PositionalParams::new(vec!["prog".to_string(), "one".to_string()]);
        assert_eq!(p.get(0), "prog");
        assert_eq!(p.get(1), "one");
        assert_eq!(p.get(9), "");
    }

    #[test]
    fn last_status_is_zero_padded_to_five_digits() {
        let mut s = ShellState::new(vec!["prog".to_string()]);
        assert_eq!(s.last_status, "00000");
        s.record_status(1);
        assert_eq!(s.last_status, "00001");
        s.record_status(-1);
        assert_eq!(s.last_status, "-0001");
    }
}
