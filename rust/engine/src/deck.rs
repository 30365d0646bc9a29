use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck dealt from the top. Dealt and burned cards never return to
/// the deck until the next `shuffle` or `reset`.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    burned: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            burned: Vec::with_capacity(3),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.reset();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::ExhaustedDeck {
                requested: 1,
                remaining: 0,
            })?;
        self.position += 1;
        Ok(c)
    }

    /// Removes `n` cards from the top, or none at all if fewer remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::ExhaustedDeck {
                requested: n,
                remaining,
            });
        }
        let out = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }

    pub fn burn_card(&mut self) -> Result<Card, GameError> {
        let c = self.deal_card()?;
        self.burned.push(c);
        Ok(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
        self.burned.clear();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn burned(&self) -> &[Card] {
        &self.burned
    }
}
