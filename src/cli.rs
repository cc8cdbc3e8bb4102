//! Launcher Argument Dispatch
//!
//! The four mutually exclusive invocation modes of §6. `clap` supplies the
//! `Cli` struct used purely to render a consistent usage string (for `-h`
//! and for the unknown-flag error path); the actual mode selection and the
//! "unknown flag → usage to stderr, exit -1" behavior are implemented by
//! hand below, since clap's own validation exits with its own status and
//! format, which doesn't match what the launcher is required to report.

use clap::Parser;

/// Shown by `-h` and on an unrecognized flag. Never instantiated for
/// dispatch itself — `clap`'s only job here is generating this text.
#[derive(Parser)]
#[command(name = "tinysh", about = "A small interactive and scriptable command interpreter")]
struct Cli {
    /// Execute STRING as one pipeline and exit with its status
    #[arg(short = 'c', value_name = "STRING")]
    command: Option<String>,

    /// Install the SIGINT handler and enter the interactive REPL
    #[arg(short = 'i')]
    interactive: bool,
}

/// The launcher's selected mode, resolved from `std::env::args()`.
pub enum Mode {
    /// `-c STRING`: run one pipeline and exit with its status.
    Command(String),
    /// `-h`: print usage and exit 0.
    Help,
    /// `-i`: install SIGINT handling and run the interactive REPL.
    Interactive,
    /// No flags: drive the REPL over standard input.
    Repl,
}

/// Resolve `argv` (including the program name at index 0) into a `Mode`.
/// Returns `Err(usage text)` for an unrecognized flag, per §6's "unknown
/// flag: write usage to standard error and exit with status `-1`".
pub fn resolve(argv: &[String]) -> Result<Mode, String> {
    match argv.get(1).map(String::as_str) {
        None => Ok(Mode::Repl),
        Some("-h") => Ok(Mode::Help),
        Some("-i") => Ok(Mode::Interactive),
        Some("-c") => match argv.get(2) {
            Some(s) => Ok(Mode::Command(s.clone())),
            None => Err(usage()),
        },
        Some(flag) if flag.starts_with('-') => Err(usage()),
        Some(_) => Ok(Mode::Repl),
    }
}

/// Render the usage string `clap` derives from `Cli`.
pub fn usage() -> String {
    Cli::command_usage()
}

impl Cli {
    fn command_usage() -> String {
        use clap::CommandFactory;
        Cli::command().render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_selects_repl() {
        assert!(matches!(resolve(&argv(&["tinysh"])).unwrap(), Mode::Repl));
    }

    #[test]
    fn dash_h_selects_help() {
        assert!(matches!(resolve(&argv(&["tinysh", "-h"])).unwrap(), Mode::Help));
    }

    #[test]
    fn dash_i_selects_interactive() {
        assert!(matches!(resolve(&argv(&["tinysh", "-i"])).unwrap(), Mode::Interactive));
    }

    #[test]
    fn dash_c_carries_its_string() {
        match resolve(&argv(&["tinysh", "-c", "echo hi"])).unwrap() {
            Mode::Command(s) => assert_eq!(s, "echo hi"),
            _ => panic!("expected Command mode"),
        }
    }

    #[test]
    fn dash_c_without_a_string_is_an_error() {
        assert!(resolve(&argv(&["tinysh", "-c"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(resolve(&argv(&["tinysh", "-z"])).is_err());
    }

    #[test]
    fn non_flag_argument_still_selects_repl() {
        assert!(matches!(resolve(&argv(&["tinysh", "whatever"])).unwrap(), Mode::Repl));
    }
}
