use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::betting::{BettingRound, RoundState};
use crate::cards::Card;
use crate::config::SessionConfig;
use crate::deck::Deck;
use crate::decision::{safe_default, Observation, OpponentView, Robot};
use crate::errors::GameError;
use crate::events::{Blind, EventSink, GameEvent, SeatInfo, ShowdownHand};
use crate::game::GameState;
use crate::hand::best_hand;
use crate::logger::{
    format_hand_id, ActionRecord, BlindRecord, HandRecord, SeatRecord, ShowdownInfo, Street,
};
use crate::player::Player;
use crate::pot::PotManager;

/// Outcome of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_number: u32,
    /// Seats that won at least one pot
    pub winners: Vec<usize>,
    pub went_to_showdown: bool,
    pub record: HandRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: usize,
    pub name: String,
    pub stack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub hands_played: u32,
    /// Richest first
    pub standings: Vec<Standing>,
}

/// Runs a cash-game session for one table of robots.
///
/// The engine owns the players and the session RNG; each hand gets a fresh
/// deck shuffled from a seed drawn from that RNG, so a session seed replays
/// exactly.
///
/// # Examples
///
/// ```
/// use robot_holdem_engine::config::SessionConfig;
/// use robot_holdem_engine::decision::{Observation, Robot};
/// use robot_holdem_engine::engine::Engine;
/// use robot_holdem_engine::events::NullSink;
/// use robot_holdem_engine::player::PlayerAction;
///
/// struct Caller;
/// impl Robot for Caller {
///     fn name(&self) -> &str { "caller" }
///     fn decide(&mut self, _view: &Observation) -> PlayerAction { PlayerAction::Call }
/// }
///
/// let config = SessionConfig { seed: Some(7), hands: 2, ..SessionConfig::default() };
/// let mut engine = Engine::new(config, ["a", "b", "c"]).unwrap();
/// let mut robots = vec![Caller, Caller, Caller];
/// let summary = engine.run(&mut robots, &mut NullSink).unwrap();
/// assert_eq!(summary.hands_played, 2);
/// assert_eq!(engine.total_chips(), 3000);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: SessionConfig,
    table: GameState,
    rng: ChaCha20Rng,
    hands_played: u32,
    date: String,
    total_chips: u64,
}

// Per-hand working state shared by the streets.
struct HandState {
    pot: PotManager,
    board: Vec<Card>,
    actions: Vec<ActionRecord>,
}

impl Engine {
    pub fn new<I, S>(config: SessionConfig, names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(seat, name, config.starting_stack))
            .collect();
        let table = GameState::new(players)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let total_chips = u64::from(config.starting_stack) * table.seats() as u64;
        Ok(Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            table,
            hands_played: 0,
            date: chrono::Utc::now().format("%Y%m%d").to_string(),
            total_chips,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        self.table.players()
    }
    pub fn button(&self) -> usize {
        self.table.button_index()
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }
    pub fn total_chips(&self) -> u64 {
        self.total_chips
    }

    /// True once the hand count is reached or one player holds every chip.
    pub fn is_finished(&self) -> bool {
        self.hands_played >= self.config.hands || self.table.funded_seats() < 2
    }

    pub fn standings(&self) -> Vec<Standing> {
        let mut out: Vec<Standing> = self
            .players()
            .iter()
            .map(|p| Standing {
                seat: p.seat(),
                name: p.name().to_string(),
                stack: p.stack(),
            })
            .collect();
        out.sort_by(|a, b| b.stack.cmp(&a.stack).then(a.seat.cmp(&b.seat)));
        out
    }

    pub fn run<R: Robot>(
        &mut self,
        robots: &mut [R],
        sink: &mut dyn EventSink,
    ) -> Result<SessionSummary, GameError> {
        self.run_while(robots, sink, |_| true)
    }

    /// Plays hands until the session ends or `keep_going` returns false after a hand.
    pub fn run_while<R, F>(
        &mut self,
        robots: &mut [R],
        sink: &mut dyn EventSink,
        mut keep_going: F,
    ) -> Result<SessionSummary, GameError>
    where
        R: Robot,
        F: FnMut(&HandSummary) -> bool,
    {
        while !self.is_finished() {
            let summary = self.play_hand(robots, sink)?;
            if !keep_going(&summary) {
                break;
            }
        }
        Ok(SessionSummary {
            hands_played: self.hands_played,
            standings: self.standings(),
        })
    }

    /// Plays one complete hand, from blinds to payout.
    pub fn play_hand<R: Robot>(
        &mut self,
        robots: &mut [R],
        sink: &mut dyn EventSink,
    ) -> Result<HandSummary, GameError> {
        if robots.len() != self.table.seats() {
            return Err(GameError::RobotCountMismatch {
                expected: self.table.seats(),
                actual: robots.len(),
            });
        }
        if self.is_finished() {
            return Err(GameError::SessionOver);
        }

        self.hands_played += 1;
        let hand_number = self.hands_played;
        let hand_id = format_hand_id(&self.date, hand_number);
        let seed: u64 = self.rng.random();
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();

        for p in self.table.players_mut() {
            p.reset_for_hand();
        }
        let seats: Vec<SeatRecord> = self
            .players()
            .iter()
            .map(|p| SeatRecord {
                seat: p.seat(),
                name: p.name().to_string(),
                stack: p.stack(),
            })
            .collect();
        let button = self.button();
        debug!(hand_id = %hand_id, button, seed, "hand started");
        sink.emit(&GameEvent::HandStarted {
            hand_number,
            hand_id: hand_id.clone(),
            button,
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            seats: self.seat_infos(),
        });

        let mut hand = HandState {
            pot: PotManager::new(self.table.seats()),
            board: Vec::with_capacity(5),
            actions: Vec::new(),
        };

        let (sb, bb) = self.table.blind_seats();
        let mut blinds = Vec::with_capacity(2);
        for (seat, blind, amount) in [
            (sb, Blind::Small, self.config.small_blind),
            (bb, Blind::Big, self.config.big_blind),
        ] {
            let player = &mut self.table.players_mut()[seat];
            let amount = amount.min(player.stack());
            hand.pot.contribute(player, amount)?;
            blinds.push(BlindRecord { seat, amount });
            sink.emit(&GameEvent::BlindPosted {
                seat,
                name: player.name().to_string(),
                blind,
                amount,
            });
        }

        self.deal_hole_cards(&mut deck, sink)?;

        for street in Street::ALL {
            if self.in_hand_count() < 2 {
                break;
            }
            if street != Street::Preflop {
                deck.burn_card()?;
                let cards = deck.deal(street.cards_dealt())?;
                hand.board.extend_from_slice(&cards);
                for p in self.table.players_mut() {
                    p.reset_street();
                }
                sink.emit(&GameEvent::BoardDealt {
                    street,
                    cards,
                    board: hand.board.clone(),
                });
            }
            self.betting_round(street, robots, &mut hand, sink)?;
        }

        // showdown
        let went_to_showdown = self.in_hand_count() >= 2;
        let mut strengths = HashMap::new();
        let mut revealed = Vec::new();
        if went_to_showdown {
            for p in self.players().iter().filter(|p| p.in_hand()) {
                let Some(hole) = p.hole_cards() else {
                    continue;
                };
                let mut cards = hole.to_vec();
                cards.extend_from_slice(&hand.board);
                let (strength, best_five) = best_hand(&cards);
                strengths.insert(p.seat(), strength);
                revealed.push(ShowdownHand {
                    seat: p.seat(),
                    name: p.name().to_string(),
                    hole,
                    strength,
                    best_five,
                });
            }
            sink.emit(&GameEvent::Showdown {
                hands: revealed.clone(),
            });
        }

        let awards = hand.pot.settle(&strengths, &self.table.payout_order())?;
        let mut winners: Vec<usize> = Vec::new();
        for award in &awards {
            let player = &mut self.table.players_mut()[award.seat];
            player.add_chips(award.amount);
            if !winners.contains(&award.seat) {
                winners.push(award.seat);
            }
            sink.emit(&GameEvent::PotAwarded {
                pot_index: award.pot_index,
                seat: award.seat,
                name: player.name().to_string(),
                amount: award.amount,
                uncontested: !went_to_showdown,
            });
        }

        let actual: u64 = self.players().iter().map(|p| u64::from(p.stack())).sum();
        if actual != self.total_chips {
            return Err(GameError::ChipConservation {
                expected: self.total_chips,
                actual,
            });
        }

        let pot_total = hand.pot.total();
        let result = winners
            .iter()
            .map(|&s| self.players()[s].name().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let record = HandRecord {
            hand_id,
            seed: Some(seed),
            button,
            seats,
            blinds,
            actions: hand.actions,
            board: hand.board,
            showdown: went_to_showdown.then(|| ShowdownInfo {
                winners: winners.clone(),
                notes: (hand.pot.pots().len() > 1).then(|| "side pots".to_string()),
                hands: revealed,
            }),
            payouts: awards,
            stacks: self.players().iter().map(Player::stack).collect(),
            result: Some(format!("{result} won {pot_total}")),
            ts: None,
            meta: None,
        };

        sink.emit(&GameEvent::HandFinished {
            hand_number,
            stacks: self.seat_infos(),
        });
        debug!(hand_id = %record.hand_id, ?winners, pot = pot_total, "hand finished");
        self.table.rotate_button();

        Ok(HandSummary {
            hand_number,
            winners,
            went_to_showdown,
            record,
        })
    }

    fn deal_hole_cards(
        &mut self,
        deck: &mut Deck,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let order = self.table.deal_order();
        let first = deck.deal(order.len())?;
        let second = deck.deal(order.len())?;
        for (i, &seat) in order.iter().enumerate() {
            let player = &mut self.table.players_mut()[seat];
            let cards = [first[i], second[i]];
            player.give_cards(cards)?;
            sink.emit(&GameEvent::HoleCardsDealt {
                seat,
                name: player.name().to_string(),
                cards,
            });
        }
        Ok(())
    }

    fn betting_round<R: Robot>(
        &mut self,
        street: Street,
        robots: &mut [R],
        hand: &mut HandState,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let first = self.table.first_to_act(street);
        let mut round = BettingRound::new(street, self.players(), first, self.config.big_blind);

        while let RoundState::AwaitingAction(seat) = round.state() {
            let view = self.observe(seat, &round, hand)?;
            let requested = robots[seat].decide(&view);
            let players = self.table.players_mut();
            let validated = match round.apply(seat, requested.clone(), players, &mut hand.pot) {
                Ok(v) => v,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    let name = players[seat].name().to_string();
                    warn!(seat, robot = %name, ?requested, error = %e, "rejected action, using safe default");
                    sink.emit(&GameEvent::ActionRejected {
                        seat,
                        name,
                        requested,
                        reason: e.to_string(),
                    });
                    round.apply(seat, safe_default(view.to_call), players, &mut hand.pot)?
                }
            };
            let player = &players[seat];
            sink.emit(&GameEvent::PlayerActed {
                seat,
                name: player.name().to_string(),
                street,
                action: validated.clone(),
                street_bet: player.street_bet(),
                stack: player.stack(),
                pot: hand.pot.total(),
            });
            hand.actions.push(ActionRecord {
                seat,
                street,
                action: validated,
            });
        }
        Ok(())
    }

    fn observe(
        &self,
        seat: usize,
        round: &BettingRound,
        hand: &HandState,
    ) -> Result<Observation, GameError> {
        let me = self
            .players()
            .get(seat)
            .ok_or(GameError::PlayerNotActive(seat))?;
        let hole_cards = me.hole_cards().ok_or(GameError::PlayerNotActive(seat))?;
        Ok(Observation {
            seat,
            name: me.name().to_string(),
            hole_cards,
            community: hand.board.clone(),
            street: round.street(),
            pot: hand.pot.total(),
            current_bet: round.current_bet(),
            to_call: round.to_call(me),
            min_raise: round.min_raise(),
            stack: me.stack(),
            street_bet: me.street_bet(),
            big_blind: self.config.big_blind,
            button: self.button(),
            opponents: self
                .players()
                .iter()
                .filter(|p| p.seat() != seat)
                .map(|p| OpponentView {
                    seat: p.seat(),
                    name: p.name().to_string(),
                    stack: p.stack(),
                    street_bet: p.street_bet(),
                    status: p.status(),
                })
                .collect(),
        })
    }

    fn in_hand_count(&self) -> usize {
        self.players().iter().filter(|p| p.in_hand()).count()
    }

    fn seat_infos(&self) -> Vec<SeatInfo> {
        self.players()
            .iter()
            .map(|p| SeatInfo {
                seat: p.seat(),
                name: p.name().to_string(),
                stack: p.stack(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_refuses_a_seat_without_hole_cards() {
        let engine = Engine::new(SessionConfig::default(), ["a", "b"]).unwrap();
        let round = BettingRound::new(Street::Preflop, engine.players(), 0, 10);
        let hand = HandState {
            pot: PotManager::new(2),
            board: Vec::new(),
            actions: Vec::new(),
        };
        assert_eq!(
            engine.observe(1, &round, &hand).unwrap_err(),
            GameError::PlayerNotActive(1)
        );
        assert_eq!(
            engine.observe(5, &round, &hand).unwrap_err(),
            GameError::PlayerNotActive(5)
        );
    }
}
