//! Hand strength estimates on a 0.0 to 1.0 scale.
//!
//! Pre-flop the estimate comes from the hole cards alone (pairs, high card,
//! suitedness, connectedness). Once the flop is out it comes from the made
//! hand category of hole cards plus board. Every [`Style`] reads hands a
//! little differently: aggressive players are more optimistic, tight ones
//! reserve their top marks for premium holdings.

use robot_holdem_engine::cards::Card;
use robot_holdem_engine::hand::{evaluate_hand, Category};

use crate::heuristic::Style;

/// Strength of `hole` on `board` as judged by `style`.
pub fn hand_strength(style: Style, hole: [Card; 2], board: &[Card]) -> f64 {
    if board.is_empty() {
        preflop_strength(style, hole)
    } else {
        postflop_strength(style, hole, board)
    }
}

/// Estimate from the hole cards alone.
///
/// # Returns
///
/// - Conservative: pairs 0.5 to 0.9, other hands capped at 0.5
/// - Aggressive: pairs 0.6 to 0.95, other hands capped at 0.6
/// - TightAggressive: TT+ 0.8 to 1.0, smaller pairs 0.4 to 0.8, big
///   broadway combinations 0.7 to 0.8, everything else 0.1 to 0.6
pub fn preflop_strength(style: Style, hole: [Card; 2]) -> f64 {
    let r1 = hole[0].rank.value();
    let r2 = hole[1].rank.value();
    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
    let suited = hole[0].suit == hole[1].suit;
    let connected = high - low == 1;
    let high_f = f64::from(high - 2);

    match style {
        Style::Conservative | Style::Aggressive => {
            let (pair_base, pair_span, base, span, bonus, cap) = match style {
                Style::Conservative => (0.5, 0.4, 0.1, 0.3, 0.1, 0.5),
                _ => (0.6, 0.35, 0.2, 0.4, 0.15, 0.6),
            };
            if high == low {
                return pair_base + pair_span * high_f / 12.0;
            }
            let mut s = base + span * high_f / 12.0;
            if suited {
                s += bonus;
            }
            if connected {
                s += bonus;
            }
            s.min(cap)
        }
        Style::TightAggressive => {
            if high == low {
                return if high >= 10 {
                    0.8 + 0.2 * f64::from(high - 10) / 4.0
                } else {
                    0.4 + 0.4 * f64::from(high - 2) / 8.0
                };
            }
            if is_premium(high, low, suited) {
                return 0.7 + 0.1 * f64::from(high - 11) / 3.0;
            }
            let gap = f64::from(high - low);
            let mut s = 0.2 + 0.3 * high_f / 12.0 - 0.05 * gap;
            if suited {
                s += 0.1;
            }
            if connected {
                s += 0.1;
            }
            s.clamp(0.1, 0.6)
        }
    }
}

// AK, AQ, KQ in any suits; AJ only suited.
fn is_premium(high: u8, low: u8, suited: bool) -> bool {
    matches!((high, low), (14, 13) | (14, 12) | (13, 12)) || (suited && (high, low) == (14, 11))
}

/// Estimate from the best made hand.
pub fn postflop_strength(style: Style, hole: [Card; 2], board: &[Card]) -> f64 {
    let mut cards = hole.to_vec();
    cards.extend_from_slice(board);
    let hs = evaluate_hand(&cards);
    if hs.category == Category::StraightFlush && hs.kickers[0] == 14 {
        return 1.0;
    }
    let table: [f64; 9] = match style {
        Style::Conservative => [0.1, 0.2, 0.4, 0.6, 0.7, 0.8, 0.9, 0.95, 0.98],
        Style::Aggressive => [0.2, 0.4, 0.6, 0.7, 0.8, 0.85, 0.9, 0.95, 0.98],
        Style::TightAggressive => [0.1, 0.3, 0.5, 0.7, 0.8, 0.85, 0.9, 0.95, 0.98],
    };
    table[hs.category as usize]
}
