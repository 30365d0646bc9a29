use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use robot_holdem_engine::decision::{ActionKind, Observation, Robot};
use robot_holdem_engine::player::PlayerAction;

/// Picks uniformly among fold, check/call and bet/raise, with a random size
/// between the minimum and the whole stack.
#[derive(Debug, Clone)]
pub struct RandomBot {
    name: String,
    rng: ChaCha20Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Robot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &Observation) -> PlayerAction {
        let choices: Vec<ActionKind> = view
            .legal_actions()
            .into_iter()
            .filter(|k| *k != ActionKind::AllIn)
            .collect();
        let kind = choices
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(ActionKind::Fold);
        match kind {
            ActionKind::Fold => PlayerAction::Fold,
            ActionKind::Check => PlayerAction::Check,
            ActionKind::Call => PlayerAction::Call,
            ActionKind::AllIn => PlayerAction::AllIn,
            ActionKind::Bet => {
                let min = view.min_raise.max(view.big_blind).min(view.stack);
                PlayerAction::Bet(self.rng.random_range(min..=view.stack))
            }
            ActionKind::Raise => {
                let room = view.stack - view.to_call;
                let min = view.min_raise.min(room);
                PlayerAction::Raise(self.rng.random_range(min..=room))
            }
        }
    }
}
