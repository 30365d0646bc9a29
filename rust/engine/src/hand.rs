use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable strength of a best five-card hand. The derived ordering compares
/// the category first, then the kickers high to low.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero padded
    pub kickers: [u8; 5],
}

impl HandStrength {
    pub fn describe(&self) -> String {
        if self.category == Category::StraightFlush && self.kickers[0] == 14 {
            "Royal Flush".to_string()
        } else {
            self.category.name().to_string()
        }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Strength of the best hand available in `cards` (2 to 7 cards).
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    best_hand(cards).0
}

/// Best hand in `cards` together with the cards forming it.
///
/// Five or more cards are searched exhaustively over every five-card subset.
/// Fewer than five cards (pre-flop reads) are ranked on rank groups alone.
pub fn best_hand(cards: &[Card]) -> (HandStrength, Vec<Card>) {
    let n = cards.len();
    if n < 5 {
        return (classify(cards, false), cards.to_vec());
    }
    let mut best: Option<(HandStrength, [Card; 5])> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = classify(&five, true);
                        let better = match &best {
                            Some((current, _)) => strength > *current,
                            None => true,
                        };
                        if better {
                            best = Some((strength, five));
                        }
                    }
                }
            }
        }
    }
    match best {
        Some((strength, five)) => (strength, order_for_display(&five, &strength)),
        None => (classify(cards, false), cards.to_vec()),
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn classify(cards: &[Card], made_hands: bool) -> HandStrength {
    let groups = rank_groups(cards);

    if made_hands && cards.len() == 5 {
        let flush = cards.iter().all(|c| c.suit == cards[0].suit);
        let straight = if groups.len() == 5 {
            let distinct: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
            straight_high(&distinct)
        } else {
            None
        };
        if let Some(high) = straight {
            let category = if flush {
                Category::StraightFlush
            } else {
                Category::Straight
            };
            return HandStrength {
                category,
                kickers: [high, 0, 0, 0, 0],
            };
        }
        if flush {
            return HandStrength {
                category: Category::Flush,
                kickers: kickers_from(&groups),
            };
        }
    }

    let first = groups.first().map_or(0, |g| g.0);
    let second = groups.get(1).map_or(0, |g| g.0);
    let category = match (first, second) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    HandStrength {
        category,
        kickers: kickers_from(&groups),
    }
}

/// (count, rank) pairs, most frequent first, then highest rank first.
fn rank_groups(cards: &[Card]) -> Vec<(u8, u8)> {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// High card of a straight over five distinct ranks given high -> low.
/// The wheel (A-5-4-3-2) counts as five high.
fn straight_high(distinct_desc: &[u8]) -> Option<u8> {
    if distinct_desc.len() != 5 {
        return None;
    }
    if distinct_desc[0] - distinct_desc[4] == 4 {
        return Some(distinct_desc[0]);
    }
    if distinct_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn kickers_from(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, &(_, rank)) in k.iter_mut().zip(groups.iter()) {
        *slot = rank;
    }
    k
}

// Orders the winning five so the defining ranks come first (the wheel's ace goes last).
fn order_for_display(five: &[Card; 5], strength: &HandStrength) -> Vec<Card> {
    let mut v = five.to_vec();
    let groups = rank_groups(five);
    let weight = |c: &Card| {
        groups
            .iter()
            .position(|&(_, r)| r == c.rank.value())
            .unwrap_or(groups.len())
    };
    v.sort_by_key(weight);
    let wheel = matches!(
        strength.category,
        Category::Straight | Category::StraightFlush
    ) && strength.kickers[0] == 5;
    if wheel {
        v.rotate_left(1);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn strength(s: &str) -> HandStrength {
        evaluate_hand(&parse_cards(s).unwrap())
    }

    #[test]
    fn wheel_is_five_high() {
        let hs = strength("Ah 2d 3c 4s 5h");
        assert_eq!(hs.category, Category::Straight);
        assert_eq!(hs.kickers[0], 5);
    }

    #[test]
    fn flush_with_trips_prefers_best_five() {
        // seven cards: trips of nines plus five hearts
        let hs = strength("9h 9d 9c 2h 5h Jh Kh");
        assert_eq!(hs.category, Category::Flush);
        assert_eq!(hs.kickers, [13, 11, 9, 5, 2]);
    }

    #[test]
    fn partial_hands_rank_by_groups() {
        assert_eq!(strength("Ah Ad").category, Category::OnePair);
        assert_eq!(strength("Ah Kd").kickers, [14, 13, 0, 0, 0]);
        assert_eq!(strength("Ah Ad Kc Kd").category, Category::TwoPair);
    }

    #[test]
    fn best_hand_orders_wheel_with_ace_last() {
        let (hs, five) = best_hand(&parse_cards("Ah 2d 3c 4s 5h Kd Qc").unwrap());
        assert_eq!(hs.category, Category::Straight);
        assert_eq!(five.last().map(|c| c.rank.value()), Some(14));
    }

    #[test]
    fn royal_flush_is_described() {
        assert_eq!(strength("Ah Kh Qh Jh Th").describe(), "Royal Flush");
        assert_eq!(strength("9h Kh Qh Jh Th").describe(), "Straight Flush");
    }
}
