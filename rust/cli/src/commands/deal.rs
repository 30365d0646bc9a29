//! Deal command handler.
//!
//! Shuffles one deck, deals hole cards to every seat and a full board (with
//! burn cards, as at the table), then prints each seat's best five-card hand
//! and who would win the showdown. The same seed always deals the same cards.

use crate::error::CliError;
use crate::formatters::{format_board, format_card};
use robot_holdem_engine::deck::Deck;
use robot_holdem_engine::hand::best_hand;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `players` - Number of seats to deal in (2 to 10)
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be between 2 and 10, got {}",
            players
        )));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let first = deck.deal(players)?;
    let second = deck.deal(players)?;
    let mut board = Vec::with_capacity(5);
    for n in [3, 1, 1] {
        deck.burn_card()?;
        board.extend(deck.deal(n)?);
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Board: {}", format_board(&board))?;
    let mut results = Vec::with_capacity(players);
    for seat in 0..players {
        let hole = [first[seat], second[seat]];
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&board);
        let (strength, best) = best_hand(&cards);
        let best: Vec<String> = best.iter().map(format_card).collect();
        writeln!(
            out,
            "Seat {}: {} - {} [{}]",
            seat,
            format_board(&hole),
            strength,
            best.join(" ")
        )?;
        results.push((seat, strength));
    }

    if let Some(top) = results.iter().map(|(_, s)| *s).max() {
        let winners: Vec<String> = results
            .iter()
            .filter(|(_, s)| *s == top)
            .map(|(seat, _)| format!("Seat {}", seat))
            .collect();
        writeln!(out, "Winner: {} with {}", winners.join(", "), top)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), 3, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6, "seed, board, three seats, winner");
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("Board: ["));
        assert!(lines[2].starts_with("Seat 0: "));
        assert!(lines[5].starts_with("Winner: Seat"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), 4, &mut out1).unwrap();
        handle_deal_command(Some(12345), 4, &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_rejects_bad_seat_count() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_deal_command(Some(1), 11, &mut out),
            Err(CliError::InvalidInput(_))
        ));
    }
}
