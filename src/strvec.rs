//! String-Vector Utility
//!
//! The dynamic ordered sequence of owned byte strings that every other
//! module passes around (a tokenized line, a pipeline's stages, an argv).
//! Kept as free functions over `Vec<String>` rather than a newtype: nothing
//! in this crate needs invariants beyond what `Vec<String>` already gives,
//! and the teacher's fold/unfold idiom (split into a vector, mutate, rejoin)
//! is retained here precisely because it maps cleanly onto argument lists.

/// Split `input` on any byte in `delimiters`, collapsing consecutive
/// delimiters so no empty tokens are produced.
pub fn split(input: &str, delimiters: &[char]) -> Vec<String> {
    input
        .split(|c| delimiters.contains(&c))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Join `parts` with `separator`, optionally wrapping the result with a
/// `head` and `tail`. An empty `parts` yields the empty string unless
/// `head`/`tail` are supplied, in which case it yields their concatenation.
pub fn join(parts: &[String], separator: &str, head: Option<&str>, tail: Option<&str>) -> String {
    let body = parts.join(separator);
    format!("{}{}{}", head.unwrap_or(""), body, tail.unwrap_or(""))
}

/// Number of tokens in `parts`.
pub fn length(parts: &[String]) -> usize {
    parts.len()
}

// `release` from the spec's leaf-component list has no Rust counterpart:
// `Vec<String>` frees its storage (and every owned `String` inside it) when
// it goes out of scope, so the bulk-release step is just ordinary `Drop`.
