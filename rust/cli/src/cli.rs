//! Command-line definitions (clap derive).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "robot-holdem",
    version,
    about = "Robot Hold'Em: no-limit Texas Hold'em played by robots"
)]
pub struct RobotHoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a session between robots and print the final standings
    Play {
        /// Number of hands to play
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        /// Session seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack for every seat
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long)]
        small_blind: Option<u32>,
        #[arg(long)]
        big_blind: Option<u32>,
        /// Comma separated robots: random, conservative, aggressive, tight, llm[:personality]
        #[arg(long, value_delimiter = ',')]
        robots: Option<Vec<String>>,
        /// Print only hand results, never hole cards
        #[arg(long)]
        quiet: bool,
        /// Append every hand record to this JSONL file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Deal one board and show each seat's best hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
    },
}

impl Commands {
    pub const NAMES: [&'static str; 3] = ["play", "cfg", "deal"];
}
