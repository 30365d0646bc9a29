use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Where a seat stands within the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Dealt in and still able to act
    Active,
    /// Gave up the hand; no further chips, no pot eligibility
    Folded,
    /// Whole stack committed; stays in for showdown but never acts again
    AllIn,
    /// Not dealt in (no chips at the start of the hand)
    SittingOut,
}

/// An action requested by a robot. Amounts are chips, not multiples.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting with the given amount
    Bet(u32),
    /// Raise the current bet by the given amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// Maximum number of seats at one table.
pub const MAX_SEATS: usize = 10;

/// A seat at the table: chips, cards and what it has put in this hand.
#[derive(Debug, Clone)]
pub struct Player {
    seat: usize,
    name: String,
    stack: u32,
    status: PlayerStatus,
    hole: Option<[Card; 2]>,
    /// Chips committed on the current street
    street_bet: u32,
    /// Chips committed over the whole hand
    hand_contribution: u32,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, stack: u32) -> Self {
        Self {
            seat,
            name: name.into(),
            stack,
            status: if stack > 0 {
                PlayerStatus::Active
            } else {
                PlayerStatus::SittingOut
            },
            hole: None,
            street_bet: 0,
            hand_contribution: 0,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn hand_contribution(&self) -> u32 {
        self.hand_contribution
    }

    /// Still contesting the pot (active or all-in).
    pub fn in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Can still be asked for a decision.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn give_cards(&mut self, cards: [Card; 2]) -> Result<(), GameError> {
        if self.hole.is_some() {
            return Err(GameError::HoleCardsFull(self.seat));
        }
        self.hole = Some(cards);
        Ok(())
    }

    pub fn clear_cards(&mut self) {
        self.hole = None;
    }

    /// Prepares the seat for a new hand; an empty stack sits the hand out.
    pub fn reset_for_hand(&mut self) {
        self.clear_cards();
        self.street_bet = 0;
        self.hand_contribution = 0;
        self.status = if self.stack > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::SittingOut
        };
    }

    pub fn reset_street(&mut self) {
        self.street_bet = 0;
    }

    pub fn fold(&mut self) -> Result<(), GameError> {
        if !self.can_act() {
            return Err(GameError::PlayerNotActive(self.seat));
        }
        self.status = PlayerStatus::Folded;
        Ok(())
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves chips from the stack into this street's bet. Emptying the stack
    /// puts the player all-in.
    pub fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if !self.can_act() {
            return Err(GameError::PlayerNotActive(self.seat));
        }
        if amount > self.stack {
            return Err(GameError::InsufficientStack {
                needed: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.street_bet += amount;
        self.hand_contribution += amount;
        if self.stack == 0 {
            self.status = PlayerStatus::AllIn;
        }
        Ok(())
    }
}
