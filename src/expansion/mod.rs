//! Expander
//!
//! Walks a line and substitutes `$?`, `$N`, `${NAME}`, `$(...)`, and `$IDENT`
//! constructs. Command substitution re-enters the executor (via the capture
//! driver) and captures its output; everything else is a straight
//! environment or state lookup.
//!
//! Implemented as a single left-to-right scan with a paren depth counter
//! for `$(...)`, per the cleaner alternative spec.md's design notes call
//! out (the original dollar-split-and-rejoin recovery is an equally valid
//! strategy; this crate takes the depth-counter route since it avoids
//! re-deriving fragment boundaries on every retry).

use crate::error::ShellError;
use crate::process::capture;
use crate::state::ShellState;

/// Expand every `$`-construct in `line`, returning the substituted text.
/// Idempotent on any line containing no `$`.
pub fn expand(line: &str, state: &mut ShellState) -> Result<String, ShellError> {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            // Copy verbatim up to the next '$' (or end), respecting UTF-8
            // boundaries by scanning byte-wise but only ever slicing on
            // boundaries `$` search already respects (ASCII `$`).
            let start = i;
            while i < bytes.len() && bytes[i] != b'$' {
                i += 1;
            }
            out.push_str(&line[start..i]);
            continue;
        }

        // bytes[i] == '$'
        let after = i + 1;
        if after >= bytes.len() {
            out.push('$');
            i = after;
            continue;
        }

        match bytes[after] {
            b'(' => {
                let (inner, end) = scan_balanced_parens(bytes, after)?;
                let captured = capture::capture_to_string(inner, state)?;
                out.push_str(&captured);
                i = end;
            }
            b'{' => {
                let Some(close) = line[after + 1..].find('}') else {
                    // Unterminated ${...}: nothing sensible to recover; stop
                    // expanding the rest of the line, as spec.md prescribes
                    // for unbalanced constructs with no recovery.
                    out.push_str(&line[i..]);
                    return Ok(out);
                };
                let key = &line[after + 1..after + 1 + close];
                out.push_str(&std::env::var(key).unwrap_or_default());
                i = after + 1 + close + 1;
            }
            b'?' => {
                out.push_str(&state.last_status);
                i = after + 1;
            }
            d if d.is_ascii_digit() => {
                let index = (d - b'0') as usize;
                out.push_str(state.positional.get(index));
                let mut j = after + 1;
                while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                    j += 1;
                }
                i = j;
            }
            _ => {
                let mut j = after;
                while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                    j += 1;
                }
                if j == after {
                    // '$' followed by a non-identifier byte: pass through literally.
                    out.push('$');
                    i = after;
                } else {
                    let key = &line[after..j];
                    out.push_str(&std::env::var(key).unwrap_or_default());
                    i = j;
                }
            }
        }
    }

    Ok(out)
}

/// Find the end of a balanced `(...)` run starting at `open` (the index of
/// the `(` itself). Returns the inner text (exclusive of the parens) and
/// the index just past the matching `)`.
fn scan_balanced_parens(bytes: &[u8], open: usize) -> Result<(&str, usize), ShellError> {
    let mut depth = 0i32;
    let mut i = open;
    let inner_start = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    let inner = std::str::from_utf8(&bytes[inner_start..i]).unwrap_or("");
                    return Ok((inner, i + 1));
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(ShellError::UnbalancedSubstitution)
}
