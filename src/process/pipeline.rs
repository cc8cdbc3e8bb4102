//! Pipeline Executor
//!
//! Wires a sequence of stages together through a chain of anonymous pipes
//! and drives them to completion. Built-ins run inline in this process;
//! external commands are spawned via the spawner (§4.6). Every descriptor
//! this module allocates is closed by the time `execute` returns, and no
//! spawned child ever survives it.

use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::process::Child;

use super::{exit_code_from_wait_status, InputEndpoint, OutputEndpoint};
use crate::builtins;
use crate::error::ShellError;
use crate::lexer;
use crate::signals;
use crate::state::ShellState;

/// Run `stages` (already `|`-split, quotes intact) as one pipeline, reading
/// from `stdin` and writing to `stdout`. Returns the pipeline's status: the
/// last stage's result, or the first negative stage result encountered, per
/// §4.7. An empty stage list succeeds immediately without touching either
/// endpoint. Standard output is flushed on every exit path (§4.7 step 4,
/// §5), so a built-in's `OutputEndpoint::Inherit` write is ordered ahead of
/// whatever the next pipeline stage writes to the same inherited fd.
pub fn execute(
    stages: &[String],
    stdin: InputEndpoint,
    stdout: OutputEndpoint,
    state: &mut ShellState,
) -> Result<i32, ShellError> {
    let result = run(stages, stdin, stdout, state);
    let _ = std::io::stdout().flush();
    result
}

fn run(
    stages: &[String],
    stdin: InputEndpoint,
    stdout: OutputEndpoint,
    state: &mut ShellState,
) -> Result<i32, ShellError> {
    if stages.is_empty() {
        drop(stdin);
        drop(stdout);
        return Ok(0);
    }

    let n = stages.len();
    let mut inputs: Vec<Option<InputEndpoint>> = Vec::with_capacity(n);
    let mut outputs: Vec<Option<OutputEndpoint>> = Vec::with_capacity(n);
    inputs.push(Some(stdin));
    for _ in 0..n - 1 {
        let (read, write) = os_pipe::pipe()?;
        outputs.push(Some(OutputEndpoint::Pipe(write)));
        inputs.push(Some(InputEndpoint::Pipe(read)));
    }
    outputs.push(Some(stdout));

    let mut stage_results: Vec<Option<i32>> = vec![None; n];
    let mut children: Vec<(usize, Child, Option<signals::Slot>)> = Vec::new();

    for i in 0..n {
        let input = inputs[i].take().expect("each stage input is consumed exactly once");
        let output = outputs[i].take().expect("each stage output is consumed exactly once");

        let argv = match lexer::split_words(&stages[i]) {
            Ok(argv) => argv,
            Err(e) => {
                drop(input);
                drop(output);
                sweep(children);
                return Err(e);
            }
        };

        if argv.is_empty() {
            drop(input);
            drop(output);
            stage_results[i] = Some(0);
            continue;
        }

        if builtins::is_builtin(&argv[0]) {
            stage_results[i] = Some(builtins::run(&argv[0], &argv, input, output, state));
        } else {
            match crate::process::spawner::spawn(&argv, input, output) {
                Ok(child) => {
                    let slot = signals::track(child.id() as i32);
                    children.push((i, child, slot));
                }
                Err(status) => stage_results[i] = Some(status),
            }
        }
    }

    for (i, mut child, slot) in children {
        let status = match child.wait() {
            Ok(exit_status) => exit_code_from_wait_status(exit_status.into_raw()),
            Err(_) => -1,
        };
        if let Some(slot) = slot {
            signals::untrack(slot);
        }
        stage_results[i] = Some(status);
    }

    let results: Vec<i32> = stage_results.into_iter().map(|s| s.unwrap_or(0)).collect();
    let fatal = results.iter().find(|&&s| s < 0).copied();
    Ok(fatal.unwrap_or_else(|| *results.last().expect("non-empty pipeline")))
}

/// Unconditionally terminate every still-launched child, per the executor's
/// teardown invariant (used on a mid-launch parse failure).
fn sweep(children: Vec<(usize, Child, Option<signals::Slot>)>) {
    for (_, mut child, slot) in children {
        let _ = child.kill();
        let _ = child.wait();
        if let Some(slot) = slot {
            signals::untrack(slot);
        }
    }
}
