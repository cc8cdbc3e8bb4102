//! Quote-Aware Tokenizer
//!
//! Splits a line into words on a delimiter set while treating double-quoted
//! regions as atomic. Used twice per top-level line: first to split on `|`
//! with quotes kept (producing pipeline stages without disturbing their
//! inner quoting), then per-stage to split on whitespace with quotes
//! stripped (producing the argument vector handed to a built-in or exec).

use crate::escape::{self, Mode};
use crate::error::ShellError;

/// Tokenize `line` on any byte in `delimiters`, treating `"..."` regions as
/// atomic. When `keep_quotes` is true the surrounding quotes and any
/// embedded backslash escapes are preserved verbatim (for a later pass);
/// when false, quotes are stripped and escapes inside them are decoded.
pub fn tokenize(line: &str, delimiters: &[char], keep_quotes: bool) -> Result<Vec<String>, ShellError> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            if keep_quotes {
                current.push(b'"');
            }
            i += 1;
            let escape_mode = if keep_quotes { Mode::PassThrough } else { Mode::Decode };
            let mut closed = false;
            while i < bytes.len() {
                if bytes[i] == b'"' {
                    closed = true;
                    i += 1;
                    break;
                }
                if bytes[i] == b'\\' {
                    // In pass-through mode decode_one writes the backslash itself.
                    let consumed = escape::decode_one(bytes, i + 1, escape_mode, &mut current)?;
                    i += 1 + consumed;
                } else {
                    current.push(bytes[i]);
                    i += 1;
                }
            }
            if !closed {
                return Err(ShellError::UnterminatedString);
            }
            if keep_quotes {
                current.push(b'"');
            }
        } else if delimiters.contains(&(b as char)) {
            if !current.is_empty() {
                tokens.push(String::from_utf8_lossy(&current).into_owned());
                current.clear();
            }
            i += 1;
        } else {
            current.push(b);
            i += 1;
        }
    }

    if !current.is_empty() {
        tokens.push(String::from_utf8_lossy(&current).into_owned());
    }

    Ok(tokens)
}

/// Whitespace delimiter set used to split a pipeline stage into words.
pub const WORD_DELIMITERS: [char; 5] = [' ', '\t', '\x0B', '\n', ';'];

/// Split a top-level line into pipeline stages on `|`, preserving quoting.
pub fn split_stages(line: &str) -> Result<Vec<String>, ShellError> {
    tokenize(line, &['|'], true)
}

/// Split one pipeline stage into words, stripping quotes.
pub fn split_words(stage: &str) -> Result<Vec<String>, ShellError> {
    tokenize(stage, &WORD_DELIMITERS, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_pipe_is_one_stage() {
        let stages = split_stages(r#"echo "a|b""#).unwrap();
        assert_eq!(stages, vec![r#"echo "a|b""#]);
    }

    #[test]
    fn unquoted_pipe_splits_stages() {
        let stages = split_stages("echo hello | tr a-z A-Z").unwrap();
        assert_eq!(stages, vec!["echo hello ", " tr a-z A-Z"]);
    }

    #[test]
    fn quoted_and_unquoted_fragments_adjoin() {
        let words = split_words(r#"pre"fix"post"#).unwrap();
        assert_eq!(words, vec!["prefixpost"]);
    }

    #[test]
    fn whitespace_delimiters_collapse() {
        let words = split_words("a   b\tc").unwrap();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn unterminated_quote_errors() {
        let err = split_words(r#"echo "unterminated"#).unwrap_err();
        assert!(matches!(err, ShellError::UnterminatedString));
    }

    #[test]
    fn escape_decoded_inside_quotes_when_stripped() {
        let words = split_words(r#"echo "\x41\x42""#).unwrap();
        assert_eq!(words, vec!["echo", "AB"]);
    }

    #[test]
    fn escape_preserved_inside_quotes_when_kept() {
        let stages = split_stages(r#"echo "\x41\x42""#).unwrap();
        assert_eq!(stages, vec![r#"echo "\x41\x42""#]);
    }

    #[test]
    fn quoted_region_byte_length_preserved_when_kept() {
        let input = r#"echo "a b  c""#;
        let stages = split_stages(input).unwrap();
        assert_eq!(stages[0].len(), input.len());
    }
}
