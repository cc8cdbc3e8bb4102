//! End-to-end scenarios against real `/bin` utilities, run through the
//! public engine entry point exactly as the REPL and `$(...)` would.

use std::io::Read;

use tinysh::engine;
use tinysh::process::{InputEndpoint, OutputEndpoint};
use tinysh::repl;
use tinysh::state::ShellState;

fn state() -> ShellState {
    ShellState::new(vec!["tinysh".to_string()])
}

/// Run `line` against a fresh output pipe and return its captured stdout.
fn run_capture(line: &str, state: &mut ShellState) -> (i32, String) {
    let (mut reader, writer) = os_pipe::pipe().unwrap();
    let status = engine::run_line(line, state, InputEndpoint::Inherit, OutputEndpoint::Pipe(writer)).unwrap();
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    (status, out)
}

#[test]
fn pipeline_uppercases_through_tr() {
    let (status, out) = run_capture("echo hello | tr a-z A-Z", &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "HELLO\n");
}

#[test]
fn set_then_expand_round_trips_through_the_environment() {
    let mut s = state();
    let (status, _) = run_capture("set X 42", &mut s);
    assert_eq!(status, 0);
    let (status, out) = run_capture("echo ${X}", &mut s);
    assert_eq!(status, 0);
    assert_eq!(out, "42\n");
}

#[test]
fn nested_command_substitution_unwraps_fully() {
    let (status, out) = run_capture("echo $(echo $(echo deep))", &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "deep\n");
}

#[test]
fn quoted_pipe_is_passed_through_literally() {
    let (status, out) = run_capture(r#"echo "a|b""#, &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "a|b\n");
}

#[test]
fn escape_sequence_decodes_inside_quotes() {
    let (status, out) = run_capture(r#"echo "\x41\x42""#, &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "AB\n");
}

#[test]
fn last_status_is_visible_to_the_next_line() {
    let mut s = state();
    let (mut reader, writer) = os_pipe::pipe().unwrap();
    let status = repl::run(
        std::io::Cursor::new("false\necho $?\n"),
        &mut s,
        &InputEndpoint::Inherit,
        &OutputEndpoint::Pipe(writer),
    )
    .unwrap();
    assert_eq!(status, 0);
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "00001\n");
}

#[test]
fn empty_line_succeeds_with_no_output() {
    let (status, out) = run_capture("", &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "");
}

#[test]
fn failing_substitution_keeps_the_outer_pipeline_alive() {
    let (status, out) = run_capture("echo [$(false)]", &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "[]\n");
}

#[test]
fn three_stage_pipeline_runs_concurrently() {
    // The double-quoted literal's `\n` escapes decode to real newlines
    // before `echo` ever sees its argument, so this is one `echo` word
    // containing three already-separated lines.
    let (status, out) = run_capture(r#"echo "b\na\nc" | sort | head -2"#, &mut state());
    assert_eq!(status, 0);
    assert_eq!(out, "a\nb\n");
}
