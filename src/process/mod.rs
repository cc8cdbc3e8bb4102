//! Process Orchestration
//!
//! Everything that touches real operating-system processes and pipes:
//! the spawner (§4.6), the pipeline executor (§4.7), and the capture driver
//! (§4.8 — built on top of the other two).

pub mod spawner;
pub mod pipeline;
pub mod capture;

use std::io::{self, Read, Write};
use os_pipe::{PipeReader, PipeWriter};
use std::process::Stdio;

/// One stage's input source: either the process's own inherited stdin, or
/// the read half of an anonymous pipe wired up by the executor.
pub enum InputEndpoint {
    Inherit,
    Pipe(PipeReader),
}

/// One stage's output sink: either the process's own inherited stdout, or
/// the write half of an anonymous pipe wired up by the executor.
pub enum OutputEndpoint {
    Inherit,
    Pipe(PipeWriter),
}

impl InputEndpoint {
    pub fn into_stdio(self) -> Stdio {
        match self {
            InputEndpoint::Inherit => Stdio::inherit(),
            InputEndpoint::Pipe(r) => Stdio::from(r),
        }
    }

    /// A fresh handle onto the same source, for callers (the REPL loop)
    /// that drive more than one pipeline off of one outer endpoint.
    pub fn try_clone(&self) -> io::Result<InputEndpoint> {
        match self {
            InputEndpoint::Inherit => Ok(InputEndpoint::Inherit),
            InputEndpoint::Pipe(r) => Ok(InputEndpoint::Pipe(r.try_clone()?)),
        }
    }

    /// A reader a built-in can use, per the §4.5 contract ("close the
    /// read-end immediately if it does not read input"): built-ins that
    /// never call `.read()` on this simply drop it, closing the descriptor.
    pub fn into_reader(self) -> Box<dyn Read> {
        match self {
            InputEndpoint::Inherit => Box::new(io::stdin()),
            InputEndpoint::Pipe(r) => Box::new(r),
        }
    }
}

impl OutputEndpoint {
    pub fn into_stdio(self) -> Stdio {
        match self {
            OutputEndpoint::Inherit => Stdio::inherit(),
            OutputEndpoint::Pipe(w) => Stdio::from(w),
        }
    }

    pub fn into_writer(self) -> Box<dyn Write> {
        match self {
            OutputEndpoint::Inherit => Box::new(io::stdout()),
            OutputEndpoint::Pipe(w) => Box::new(w),
        }
    }

    /// A fresh handle onto the same sink, for callers (the REPL loop) that
    /// drive more than one pipeline off of one outer endpoint.
    pub fn try_clone(&self) -> io::Result<OutputEndpoint> {
        match self {
            OutputEndpoint::Inherit => Ok(OutputEndpoint::Inherit),
            OutputEndpoint::Pipe(w) => Ok(OutputEndpoint::Pipe(w.try_clone()?)),
        }
    }
}

/// Map a raw `waitpid` status word to the shell's exit code convention:
/// normal exit keeps its code, a terminating signal maps to `128 + signum`.
pub fn exit_code_from_wait_status(status: libc::c_int) -> i32 {
    unsafe {
        if libc::WIFEXITED(status) {
            libc::WEXITSTATUS(status)
        } else if libc::WIFSIGNALED(status) {
            128 + libc::WTERMSIG(status)
        } else {
            1
        }
    }
}
