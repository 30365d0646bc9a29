use serde::{Deserialize, Serialize};

use crate::errors::GameError;

pub const STARTING_STACK: u32 = 1000;
pub const SMALL_BLIND: u32 = 5;
pub const BIG_BLIND: u32 = 10;
pub const NUM_HANDS: u32 = 3;

/// Session parameters handed to [`crate::engine::Engine::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub hands: u32,
    /// Show every seat's hole cards to the renderer
    pub broadcast: bool,
    /// Session RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            hands: NUM_HANDS,
            broadcast: true,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be greater than 0".into(),
            ));
        }
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig(
                "small_blind must be greater than 0".into(),
            ));
        }
        if self.big_blind < self.small_blind {
            return Err(GameError::InvalidConfig(format!(
                "big_blind ({}) must be at least small_blind ({})",
                self.big_blind, self.small_blind
            )));
        }
        if self.hands == 0 {
            return Err(GameError::InvalidConfig("hands must be greater than 0".into()));
        }
        Ok(())
    }
}
