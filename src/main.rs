use std::io::BufReader;

use tinysh::cli::{self, Mode};
use tinysh::process::{InputEndpoint, OutputEndpoint};
use tinysh::state::ShellState;
use tinysh::{engine, prompt, repl, signals};

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let mut state = ShellState::new(argv.clone());

    let status = match cli::resolve(&argv) {
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(-1);
        }
        Ok(Mode::Help) => {
            println!("{}", cli::usage());
            std::process::exit(0);
        }
        Ok(Mode::Command(command)) => {
            run_and_report(|| engine::run_line(&command, &mut state, InputEndpoint::Inherit, OutputEndpoint::Inherit))
        }
        Ok(Mode::Interactive) => {
            signals::install();
            let stdin = BufReader::new(std::io::stdin());
            run_and_report(|| prompt::run(stdin, &mut state))
        }
        Ok(Mode::Repl) => {
            let stdin = BufReader::new(std::io::stdin());
            run_and_report(|| repl::run(stdin, &mut state, &InputEndpoint::Inherit, &OutputEndpoint::Inherit))
        }
    };

    std::process::exit(exit_code(status));
}

fn run_and_report(f: impl FnOnce() -> Result<i32, tinysh::error::ShellError>) -> i32 {
    match f() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("tinysh: {}", e);
            e.status()
        }
    }
}

/// The bottom three bits mirror a successful pipeline's last-stage status;
/// a negative (fatal) status propagates as-is, per §6's exit-status note.
fn exit_code(status: i32) -> i32 {
    if status < 0 {
        status
    } else {
        status & 0x7
    }
}
