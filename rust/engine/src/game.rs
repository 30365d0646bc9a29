use crate::errors::GameError;
use crate::logger::Street;
use crate::player::{Player, PlayerStatus, MAX_SEATS};

/// Seats at the table and the button position.
///
/// Seat order is clockwise; "left of" a seat means the next seat in that order.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Index of the button player
    button_index: usize,
    players: Vec<Player>,
}

impl GameState {
    /// The button starts on seat 0.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 || players.len() > MAX_SEATS {
            return Err(GameError::SeatCount {
                max: MAX_SEATS,
                actual: players.len(),
            });
        }
        Ok(Self {
            button_index: 0,
            players,
        })
    }

    pub fn button_index(&self) -> usize {
        self.button_index
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Seats holding chips.
    pub fn funded_seats(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    /// Moves the button to the next seat that still has chips.
    pub fn rotate_button(&mut self) {
        if let Some(next) = self.next_seat(self.button_index, |p| p.stack() > 0) {
            self.button_index = next;
        }
    }

    /// Next seat clockwise after `from` matching `pred`; may wrap around to `from` itself.
    pub fn next_seat(&self, from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|offset| (from + offset) % n)
            .find(|&seat| pred(&self.players[seat]))
    }

    fn dealt_in(p: &Player) -> bool {
        p.status() != PlayerStatus::SittingOut
    }

    fn dealt_in_count(&self) -> usize {
        self.players.iter().filter(|p| Self::dealt_in(p)).count()
    }

    /// Small and big blind seats for the hand being played.
    /// Heads-up the button posts the small blind.
    pub fn blind_seats(&self) -> (usize, usize) {
        let button = self.button_index;
        let sb = if self.dealt_in_count() == 2 && Self::dealt_in(&self.players[button]) {
            button
        } else {
            self.next_seat(button, Self::dealt_in).unwrap_or(button)
        };
        let bb = self.next_seat(sb, Self::dealt_in).unwrap_or(sb);
        (sb, bb)
    }

    /// Seat asked first on `street`. Betting skips seats that cannot act.
    pub fn first_to_act(&self, street: Street) -> usize {
        match street {
            Street::Preflop => {
                let (sb, bb) = self.blind_seats();
                if self.dealt_in_count() == 2 {
                    sb
                } else {
                    (bb + 1) % self.seats()
                }
            }
            _ => (self.button_index + 1) % self.seats(),
        }
    }

    /// Dealt-in seats clockwise from the first seat left of the button.
    pub fn deal_order(&self) -> Vec<usize> {
        self.payout_order()
            .into_iter()
            .filter(|&s| Self::dealt_in(&self.players[s]))
            .collect()
    }

    /// Every seat clockwise starting left of the button; odd chips follow this order.
    pub fn payout_order(&self) -> Vec<usize> {
        let n = self.seats();
        (1..=n).map(|offset| (self.button_index + offset) % n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(stacks: &[u32]) -> GameState {
        let players = stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| Player::new(i, format!("p{i}"), s))
            .collect();
        GameState::new(players).unwrap()
    }

    #[test]
    fn heads_up_button_posts_small_blind() {
        let gs = table(&[100, 100]);
        assert_eq!(gs.blind_seats(), (0, 1));
        assert_eq!(gs.first_to_act(Street::Preflop), 0);
        assert_eq!(gs.first_to_act(Street::Flop), 1);
    }

    #[test]
    fn ring_blinds_skip_empty_seats() {
        let gs = table(&[100, 0, 100, 100]);
        assert_eq!(gs.blind_seats(), (2, 3));
        assert_eq!(gs.first_to_act(Street::Preflop), 0);
        assert_eq!(gs.deal_order(), vec![2, 3, 0]);
    }

    #[test]
    fn rotation_skips_busted_seats() {
        let mut gs = table(&[100, 0, 100]);
        gs.rotate_button();
        assert_eq!(gs.button_index(), 2);
        gs.rotate_button();
        assert_eq!(gs.button_index(), 0);
    }

    #[test]
    fn seat_count_is_bounded() {
        assert!(matches!(
            GameState::new(vec![Player::new(0, "solo", 10)]),
            Err(GameError::SeatCount { actual: 1, .. })
        ));
    }
}
