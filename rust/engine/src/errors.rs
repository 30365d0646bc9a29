use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient stack: needs {needed}, has {available}")]
    InsufficientStack { needed: u32, available: u32 },
    #[error("Cannot check facing a bet of {to_call}")]
    CheckFacingBet { to_call: u32 },
    #[error("Illegal action: {0}")]
    IllegalAction(String),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Seat {0} is not active in this hand")]
    PlayerNotActive(usize),
    #[error("Betting on this street is closed")]
    StreetClosed,
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    ExhaustedDeck { requested: usize, remaining: usize },
    #[error("Chip conservation violated: expected {expected}, found {actual}")]
    ChipConservation { expected: u64, actual: u64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Table needs between 2 and {max} seats, got {actual}")]
    SeatCount { max: usize, actual: usize },
    #[error("Expected {expected} robots, got {actual}")]
    RobotCountMismatch { expected: usize, actual: usize },
    #[error("Session is over")]
    SessionOver,
    #[error("Hole cards already dealt to seat {0}")]
    HoleCardsFull(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}

impl GameError {
    /// Errors that mean the engine itself is broken rather than a caller
    /// having asked for something illegal.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::ExhaustedDeck { .. } | GameError::ChipConservation { .. }
        )
    }
}
