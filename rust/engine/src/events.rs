//! Events emitted while a hand is played, for whatever renders the table.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandStrength;
use crate::logger::Street;
use crate::player::PlayerAction;
use crate::rules::ValidatedAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub seat: usize,
    pub name: String,
    pub stack: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Blind {
    Small,
    Big,
}

/// A hand revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub seat: usize,
    pub name: String,
    pub hole: [Card; 2],
    pub strength: HandStrength,
    pub best_five: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    HandStarted {
        hand_number: u32,
        hand_id: String,
        button: usize,
        small_blind: u32,
        big_blind: u32,
        seats: Vec<SeatInfo>,
    },
    BlindPosted {
        seat: usize,
        name: String,
        blind: Blind,
        amount: u32,
    },
    HoleCardsDealt {
        seat: usize,
        name: String,
        cards: [Card; 2],
    },
    BoardDealt {
        street: Street,
        /// Cards added on this street
        cards: Vec<Card>,
        board: Vec<Card>,
    },
    PlayerActed {
        seat: usize,
        name: String,
        street: Street,
        action: ValidatedAction,
        /// Seat's total on this street after the action
        street_bet: u32,
        stack: u32,
        pot: u32,
    },
    ActionRejected {
        seat: usize,
        name: String,
        requested: PlayerAction,
        reason: String,
    },
    Showdown {
        hands: Vec<ShowdownHand>,
    },
    PotAwarded {
        pot_index: usize,
        seat: usize,
        name: String,
        amount: u32,
        /// Won without a showdown
        uncontested: bool,
    },
    HandFinished {
        hand_number: u32,
        stacks: Vec<SeatInfo>,
    },
}

pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
