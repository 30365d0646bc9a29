//! # robot-holdem-ai: robot players
//!
//! Implementations of the engine's [`Robot`] trait.
//!
//! ## Core Components
//!
//! - [`random`] - uniform choice among legal actions
//! - [`heuristic`] - rule-based styles driven by [`strength`] estimates
//! - [`llm`] - asks a language model through an [`llm::LlmBackend`]
//! - [`personality`] - playing styles described to the language model
//! - [`create_bot`] - factory for the non-LLM robots by name
//!
//! ## Quick Start
//!
//! ```rust
//! use robot_holdem_ai::create_bot;
//! use robot_holdem_engine::config::SessionConfig;
//! use robot_holdem_engine::engine::Engine;
//! use robot_holdem_engine::events::NullSink;
//!
//! let config = SessionConfig { hands: 2, seed: Some(9), ..SessionConfig::default() };
//! let mut robots = vec![
//!     create_bot("conservative", 1).unwrap(),
//!     create_bot("aggressive", 2).unwrap(),
//!     create_bot("random", 3).unwrap(),
//! ];
//! let names: Vec<String> = robots.iter().map(|r| r.label().to_string()).collect();
//! let mut engine = Engine::new(config, names).unwrap();
//! let summary = engine.run(&mut robots, &mut NullSink).unwrap();
//! assert!(summary.hands_played <= 2);
//! ```

use std::sync::Arc;
use std::time::Duration;

use robot_holdem_engine::decision::{Observation, Robot};
use robot_holdem_engine::player::PlayerAction;
use thiserror::Error;

pub mod heuristic;
pub mod llm;
pub mod personality;
pub mod random;
pub mod strength;

use heuristic::{HeuristicBot, Style};
use llm::{LlmBackend, LlmBot};
use personality::Personality;
use random::RandomBot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown robot type: {0} (expected random, conservative, aggressive, tight or llm)")]
    UnknownRobot(String),
    #[error("Unknown personality: {0}")]
    UnknownPersonality(String),
    #[error("Custom personality needs a description, e.g. custom:<text>")]
    MissingCustomPersonality,
}

/// Robot kinds accepted by [`create_bot`].
pub const ROBOT_KINDS: [&str; 4] = ["random", "conservative", "aggressive", "tight"];

/// Any of the robots in this crate behind one concrete type, so a table can
/// mix them in a single `Vec`.
#[derive(Debug)]
pub enum Bot {
    Random(RandomBot),
    Heuristic(HeuristicBot),
    Llm(LlmBot),
}

impl Bot {
    pub fn llm(personality: Personality, backend: Arc<dyn LlmBackend>, timeout: Duration) -> Self {
        Bot::Llm(LlmBot::new(personality, backend, timeout))
    }

    pub fn label(&self) -> &str {
        self.name()
    }

    /// Replace the display name, e.g. to tell two robots of the same kind apart.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match &mut self {
            Bot::Random(b) => b.set_name(name),
            Bot::Heuristic(b) => b.set_name(name),
            Bot::Llm(b) => b.set_name(name),
        }
        self
    }
}

impl Robot for Bot {
    fn name(&self) -> &str {
        match self {
            Bot::Random(b) => b.name(),
            Bot::Heuristic(b) => b.name(),
            Bot::Llm(b) => b.name(),
        }
    }

    fn decide(&mut self, view: &Observation) -> PlayerAction {
        match self {
            Bot::Random(b) => b.decide(view),
            Bot::Heuristic(b) => b.decide(view),
            Bot::Llm(b) => b.decide(view),
        }
    }
}

/// Factory for the robots that need no external service.
///
/// # Arguments
///
/// * `kind` - one of [`ROBOT_KINDS`] (case-insensitive; `tight-aggressive` is accepted too)
/// * `seed` - seed for the robot's own RNG
///
/// # Errors
///
/// [`AiError::UnknownRobot`] for any other name, including `llm`, which
/// needs a backend and is built with [`Bot::llm`].
pub fn create_bot(kind: &str, seed: u64) -> Result<Bot, AiError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Bot::Random(RandomBot::new(seed))),
        "conservative" => Ok(Bot::Heuristic(HeuristicBot::new(Style::Conservative, seed))),
        "aggressive" => Ok(Bot::Heuristic(HeuristicBot::new(Style::Aggressive, seed))),
        "tight" | "tight-aggressive" | "tag" => {
            Ok(Bot::Heuristic(HeuristicBot::new(Style::TightAggressive, seed)))
        }
        other => Err(AiError::UnknownRobot(other.to_string())),
    }
}
