use crate::errors::GameError;
use crate::logger::Street;
use crate::player::{Player, PlayerAction};
use crate::pot::PotManager;
use crate::rules::{validate_action, ValidatedAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingAction(usize),
    StreetClosed,
}

/// Betting on one street.
///
/// The round only tracks the bet to match and who has acted since the last
/// increase; chips live on the players and in the [`PotManager`].
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    current_bet: u32,
    min_raise: u32,
    acted: Vec<bool>,
    state: RoundState,
}

impl BettingRound {
    /// Opens the street. Blinds already posted count as the bet to match.
    pub fn new(street: Street, players: &[Player], first_to_act: usize, big_blind: u32) -> Self {
        let current_bet = players.iter().map(Player::street_bet).max().unwrap_or(0);
        let mut round = Self {
            street,
            current_bet,
            min_raise: big_blind.max(1),
            acted: vec![false; players.len()],
            state: RoundState::StreetClosed,
        };
        round.state = round.next_state(players, first_to_act);
        round
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn state(&self) -> RoundState {
        self.state
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn is_closed(&self) -> bool {
        self.state == RoundState::StreetClosed
    }

    pub fn to_call(&self, player: &Player) -> u32 {
        self.current_bet.saturating_sub(player.street_bet())
    }

    /// Validates and executes `action` for `seat`.
    ///
    /// Rejected actions leave the round, the players and the pot untouched.
    pub fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        players: &mut [Player],
        pot: &mut PotManager,
    ) -> Result<ValidatedAction, GameError> {
        let expected = match self.state {
            RoundState::StreetClosed => return Err(GameError::StreetClosed),
            RoundState::AwaitingAction(s) => s,
        };
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        let player = players.get_mut(seat).ok_or(GameError::PlayerNotActive(seat))?;
        let to_call = self.to_call(player);
        let validated = validate_action(player.stack(), to_call, self.min_raise, action)?;

        match validated {
            ValidatedAction::Fold => {
                player.fold()?;
                pot.mark_folded(seat);
            }
            ValidatedAction::Check => {}
            ref other => pot.contribute(player, other.chips())?,
        }

        let street_bet = player.street_bet();
        if street_bet > self.current_bet {
            let increase = street_bet - self.current_bet;
            if increase >= self.min_raise {
                self.min_raise = increase;
            }
            self.current_bet = street_bet;
            self.acted.iter_mut().for_each(|a| *a = false);
        }
        self.acted[seat] = true;
        self.state = self.next_state(players, (seat + 1) % players.len());
        Ok(validated)
    }

    fn next_state(&self, players: &[Player], from: usize) -> RoundState {
        let in_hand = players.iter().filter(|p| p.in_hand()).count();
        if in_hand <= 1 {
            return RoundState::StreetClosed;
        }
        let actors: Vec<&Player> = players.iter().filter(|p| p.can_act()).collect();
        match actors.as_slice() {
            [] => return RoundState::StreetClosed,
            [only] if self.to_call(only) == 0 => return RoundState::StreetClosed,
            _ => {}
        }
        let n = players.len();
        (0..n)
            .map(|offset| (from + offset) % n)
            .find(|&seat| {
                let p = &players[seat];
                p.can_act() && (!self.acted[seat] || self.to_call(p) > 0)
            })
            .map_or(RoundState::StreetClosed, RoundState::AwaitingAction)
    }
}
