//! Rule-based robots.
//!
//! Three styles share one skeleton: estimate hand strength (see
//! [`crate::strength`]), sort it into weak / medium / strong bands using the
//! style's thresholds, then pick an action for the band. Randomness (bluffs,
//! occasional stabs) comes from a seeded ChaCha20 RNG so a session seed
//! replays the same decisions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use robot_holdem_engine::decision::{Observation, Robot};
use robot_holdem_engine::player::PlayerAction;
use serde::{Deserialize, Serialize};

use crate::strength::hand_strength;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Only plays strong hands; calls small bets with medium ones
    Conservative,
    /// Bets and raises often, adds a random bluff boost to every read
    Aggressive,
    /// Plays few hands but plays them hard
    TightAggressive,
}

impl Style {
    pub fn name(self) -> &'static str {
        match self {
            Style::Conservative => "Conservative",
            Style::Aggressive => "Aggressive",
            Style::TightAggressive => "Tight-Aggressive",
        }
    }
}

/// A robot that plays one [`Style`].
///
/// # Strategy
///
/// **Conservative:** below 0.3 check or fold; below 0.6 check, or call up
/// to two big blinds; otherwise bet two big blinds, raising when above 0.8.
///
/// **Aggressive:** adds a random 0.0 to 0.3 to every read. Below 0.2 check
/// or fold (raising as a bluff one time in ten); below 0.4 stab 30% of the
/// time or call up to three big blinds; otherwise bet big and raise
/// two to five times the amount owed.
///
/// **TightAggressive:** below 0.4 check or fold (5% bluff raises); below 0.6
/// bet 40% of the time or call up to three big blinds; otherwise bet three
/// to six big blinds and raise two to four times the amount owed above 0.7.
#[derive(Debug, Clone)]
pub struct HeuristicBot {
    name: String,
    style: Style,
    rng: ChaCha20Rng,
}

impl HeuristicBot {
    pub fn new(style: Style, seed: u64) -> Self {
        Self {
            name: style.name().to_string(),
            style,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    fn decide_conservative(&mut self, view: &Observation, s: f64) -> PlayerAction {
        let bb = view.big_blind;
        if s < 0.3 {
            check_or_fold(view)
        } else if s < 0.6 {
            if view.to_call == 0 {
                PlayerAction::Check
            } else if view.to_call <= bb * 2 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if view.to_call == 0 {
            bet(view, bb * 2)
        } else if s > 0.8 && view.stack > view.to_call * 2 {
            raise(view, view.to_call)
        } else {
            PlayerAction::Call
        }
    }

    fn decide_aggressive(&mut self, view: &Observation, s: f64) -> PlayerAction {
        let bb = view.big_blind;
        let s = (s + self.rng.random::<f64>() * 0.3).min(1.0);
        if s < 0.2 {
            if view.to_call == 0 {
                PlayerAction::Check
            } else if self.chance(0.1) {
                raise(view, bb * 2)
            } else {
                PlayerAction::Fold
            }
        } else if s < 0.4 {
            if view.to_call == 0 {
                if self.chance(0.3) {
                    bet(view, bb * 2)
                } else {
                    PlayerAction::Check
                }
            } else if view.to_call <= bb * 3 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if view.to_call == 0 {
            bet(view, (f64::from(bb) * (2.0 + s * 4.0)) as u32)
        } else if s > 0.5 && view.stack > view.to_call * 2 {
            let factor = 2 + (s * 3.0) as u32;
            raise(view, view.to_call * (factor - 1))
        } else {
            PlayerAction::Call
        }
    }

    fn decide_tight(&mut self, view: &Observation, s: f64) -> PlayerAction {
        let bb = view.big_blind;
        if s < 0.4 {
            if view.to_call == 0 {
                PlayerAction::Check
            } else if self.chance(0.05) {
                raise(view, bb * 2)
            } else {
                PlayerAction::Fold
            }
        } else if s < 0.6 {
            if view.to_call == 0 {
                if self.chance(0.4) {
                    bet(view, bb * 2)
                } else {
                    PlayerAction::Check
                }
            } else if view.to_call <= bb * 3 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if view.to_call == 0 {
            bet(view, (f64::from(bb) * (3.0 + s * 3.0)) as u32)
        } else if s > 0.7 {
            let factor = 2 + (s * 2.0) as u32;
            raise(view, view.to_call * (factor - 1))
        } else {
            PlayerAction::Call
        }
    }
}

impl Robot for HeuristicBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &Observation) -> PlayerAction {
        let s = hand_strength(self.style, view.hole_cards, &view.community);
        match self.style {
            Style::Conservative => self.decide_conservative(view, s),
            Style::Aggressive => self.decide_aggressive(view, s),
            Style::TightAggressive => self.decide_tight(view, s),
        }
    }
}

fn check_or_fold(view: &Observation) -> PlayerAction {
    if view.to_call == 0 {
        PlayerAction::Check
    } else {
        PlayerAction::Fold
    }
}

/// Opening bet of at least the minimum; the whole stack when it cannot cover that.
pub(crate) fn bet(view: &Observation, amount: u32) -> PlayerAction {
    let amount = amount.max(view.min_raise);
    if amount >= view.stack {
        PlayerAction::AllIn
    } else {
        PlayerAction::Bet(amount)
    }
}

/// Raise by at least the minimum increment; all-in when the stack runs out first.
pub(crate) fn raise(view: &Observation, by: u32) -> PlayerAction {
    let by = by.max(view.min_raise);
    if view.to_call.saturating_add(by) >= view.stack {
        PlayerAction::AllIn
    } else {
        PlayerAction::Raise(by)
    }
}
