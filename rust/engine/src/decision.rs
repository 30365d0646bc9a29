use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::logger::Street;
use crate::player::{PlayerAction, PlayerStatus};

/// What a seat can see of another seat. Hole cards are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub seat: usize,
    pub name: String,
    pub stack: u32,
    pub street_bet: u32,
    pub status: PlayerStatus,
}

/// Everything a robot is shown when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub seat: usize,
    pub name: String,
    pub hole_cards: [Card; 2],
    pub community: Vec<Card>,
    pub street: Street,
    pub pot: u32,
    pub current_bet: u32,
    pub to_call: u32,
    pub min_raise: u32,
    pub stack: u32,
    pub street_bet: u32,
    pub big_blind: u32,
    pub button: usize,
    pub opponents: Vec<OpponentView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
            ActionKind::AllIn => "ALL-IN",
        }
    }
}

impl Observation {
    /// Action kinds the rules accept in this spot, given a suitable amount.
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        let mut kinds = vec![ActionKind::Fold];
        if self.to_call == 0 {
            kinds.push(ActionKind::Check);
        } else {
            kinds.push(ActionKind::Call);
        }
        if self.current_bet == 0 && self.stack > 0 {
            kinds.push(ActionKind::Bet);
        }
        if self.current_bet > 0 && self.stack > self.to_call {
            kinds.push(ActionKind::Raise);
        }
        if self.stack > 0 {
            kinds.push(ActionKind::AllIn);
        }
        kinds
    }

    /// Players still contesting the pot, this seat included.
    pub fn players_in_hand(&self) -> usize {
        1 + self
            .opponents
            .iter()
            .filter(|o| matches!(o.status, PlayerStatus::Active | PlayerStatus::AllIn))
            .count()
    }
}

/// A seat occupant. The engine validates every decision it returns.
pub trait Robot {
    fn name(&self) -> &str;
    fn decide(&mut self, view: &Observation) -> PlayerAction;
}

impl<R: Robot + ?Sized> Robot for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn decide(&mut self, view: &Observation) -> PlayerAction {
        (**self).decide(view)
    }
}

/// Check when nothing is owed, otherwise fold.
pub fn safe_default(to_call: u32) -> PlayerAction {
    if to_call == 0 {
        PlayerAction::Check
    } else {
        PlayerAction::Fold
    }
}
