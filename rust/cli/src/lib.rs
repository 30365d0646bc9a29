//! # Robot Hold'Em CLI Library
//!
//! Command-line front end for the robot poker engine: configure a table of
//! robots, play a session and watch it hand by hand.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["robot-holdem", "play", "--hands", "10", "--robots", "random,tight"];
//! let code = robot_holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a session between robots and print the final standings
//! - `cfg`: Display the resolved configuration and value sources
//! - `deal`: Deal a single board and show every seat's best hand

use clap::Parser;
use std::io::Write;

pub mod broadcast;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod openai;
pub mod ui;

use cli::{Commands, RobotHoldemCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use commands::{build_robots, PlayArgs};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["robot-holdem", "deal", "--seed", "42"];
/// let code = robot_holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RobotHoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal { seed, players } => handle_deal_command(seed, usize::from(players), out),
        Commands::Play {
            hands,
            seed,
            stack,
            small_blind,
            big_blind,
            robots,
            quiet,
            history,
        } => {
            let args = PlayArgs {
                overrides: config::Overrides {
                    hands,
                    seed,
                    starting_stack: stack,
                    small_blind,
                    big_blind,
                    robots,
                    quiet,
                },
                history,
            };
            handle_play_command(&args, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "Usage: robot-holdem <command> [options]\n");
            let _ = writeln!(err, "Commands:");
            for c in Commands::NAMES {
                let _ = writeln!(err, "  {}", c);
            }
            let _ = writeln!(err, "\nFor full help, run: robot-holdem --help");
            exit_code::ERROR
        }
    }
}
