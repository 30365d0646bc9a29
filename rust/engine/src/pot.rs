use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::HandStrength;
use crate::player::Player;

/// One pot segment: the main pot is always first, side pots follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub pot_index: usize,
    pub seat: usize,
    pub amount: u32,
}

/// Per-hand record of what every seat has put in.
#[derive(Debug, Clone)]
pub struct PotManager {
    contributions: Vec<u32>,
    folded: Vec<bool>,
}

impl PotManager {
    pub fn new(seats: usize) -> Self {
        Self {
            contributions: vec![0; seats],
            folded: vec![false; seats],
        }
    }

    /// Moves `amount` chips from the player's stack into the pot.
    /// Nothing changes when the player cannot cover it.
    pub fn contribute(&mut self, player: &mut Player, amount: u32) -> Result<(), GameError> {
        let seat = player.seat();
        if seat >= self.contributions.len() {
            return Err(GameError::SeatCount {
                max: self.contributions.len(),
                actual: seat + 1,
            });
        }
        player.commit(amount)?;
        self.contributions[seat] += amount;
        Ok(())
    }

    pub fn mark_folded(&mut self, seat: usize) {
        if let Some(f) = self.folded.get_mut(seat) {
            *f = true;
        }
    }

    pub fn total(&self) -> u32 {
        self.contributions.iter().sum()
    }

    pub fn contributed(&self, seat: usize) -> u32 {
        self.contributions.get(seat).copied().unwrap_or(0)
    }

    /// Splits the contributions into a main pot and side pots.
    ///
    /// Each distinct contribution level forms a layer; a seat is eligible for a
    /// layer when it has not folded and reached that level. Neighbouring layers
    /// with the same eligible seats are one pot, and a layer nobody can win
    /// (only folded contributors) goes into the pot below it.
    pub fn pots(&self) -> Vec<Pot> {
        let mut levels: Vec<u32> = self
            .contributions
            .iter()
            .copied()
            .filter(|&c| c > 0)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::new();
        let mut carry = 0u32;
        let mut prev = 0u32;
        for level in levels {
            let amount: u32 = self
                .contributions
                .iter()
                .map(|&c| c.min(level) - c.min(prev))
                .sum::<u32>()
                + carry;
            carry = 0;
            prev = level;
            let eligible: Vec<usize> = self
                .contributions
                .iter()
                .enumerate()
                .filter(|&(seat, &c)| c >= level && !self.folded[seat])
                .map(|(seat, _)| seat)
                .collect();

            let merge = eligible.is_empty()
                || pots.last().is_some_and(|last| last.eligible == eligible);
            match pots.last_mut() {
                Some(last) if merge => last.amount += amount,
                None if eligible.is_empty() => carry = amount,
                _ => pots.push(Pot { amount, eligible }),
            }
        }
        if carry > 0 {
            pots.push(Pot {
                amount: carry,
                eligible: Vec::new(),
            });
        }
        pots
    }

    /// Pays out every pot.
    ///
    /// `strengths` holds the showdown hands; it may be empty when a single seat
    /// is left. Tied winners split evenly and odd chips go one each to the
    /// winners in `payout_order`.
    pub fn settle(
        &self,
        strengths: &HashMap<usize, HandStrength>,
        payout_order: &[usize],
    ) -> Result<Vec<PotAward>, GameError> {
        let mut awards = Vec::new();
        for (pot_index, pot) in self.pots().into_iter().enumerate() {
            let winners = pot_winners(&pot, strengths, payout_order);
            if winners.is_empty() {
                continue;
            }
            let n = winners.len() as u32;
            let share = pot.amount / n;
            let odd = (pot.amount % n) as usize;
            for (i, seat) in winners.into_iter().enumerate() {
                let amount = share + u32::from(i < odd);
                if amount > 0 {
                    awards.push(PotAward {
                        pot_index,
                        seat,
                        amount,
                    });
                }
            }
        }

        let paid: u64 = awards.iter().map(|a| u64::from(a.amount)).sum();
        let expected = u64::from(self.total());
        if paid != expected {
            return Err(GameError::ChipConservation {
                expected,
                actual: paid,
            });
        }
        Ok(awards)
    }
}

// Winners of one pot, ordered for odd-chip placement.
fn pot_winners(
    pot: &Pot,
    strengths: &HashMap<usize, HandStrength>,
    payout_order: &[usize],
) -> Vec<usize> {
    let contenders: Vec<usize> = if pot.eligible.len() == 1 {
        pot.eligible.clone()
    } else {
        let mut best: Option<&HandStrength> = None;
        let mut seats = Vec::new();
        for seat in &pot.eligible {
            let Some(hs) = strengths.get(seat) else {
                continue;
            };
            match best.map(|b| hs.cmp(b)) {
                None | Some(Ordering::Greater) => {
                    best = Some(hs);
                    seats = vec![*seat];
                }
                Some(Ordering::Equal) => seats.push(*seat),
                Some(Ordering::Less) => {}
            }
        }
        seats
    };

    let mut ordered: Vec<usize> = payout_order
        .iter()
        .copied()
        .filter(|s| contenders.contains(s))
        .collect();
    for seat in contenders {
        if !ordered.contains(&seat) {
            ordered.push(seat);
        }
    }
    ordered
}
