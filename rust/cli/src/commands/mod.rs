//! Command handler modules for the robot-holdem CLI.
//!
//! Each command lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Errors propagated via [`crate::CliError`]

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{build_robots, handle_play_command, PlayArgs};
