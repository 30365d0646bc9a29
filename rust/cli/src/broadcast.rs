//! Console rendering of engine events.

use std::io::{self, Write};

use robot_holdem_engine::events::{Blind, EventSink, GameEvent};

use crate::formatters::{format_action, format_board, format_card, format_validated};

/// Writes a running commentary of the session to a text stream.
///
/// With `show_everything` every seat's hole cards, each action and each board
/// card are printed; otherwise only hand headers, showdowns and results.
/// [`EventSink::emit`] cannot fail, so the first write error is kept and
/// reported by [`ConsoleBroadcaster::finish`].
pub struct ConsoleBroadcaster<'a> {
    out: &'a mut dyn Write,
    show_everything: bool,
    error: Option<io::Error>,
}

impl<'a> ConsoleBroadcaster<'a> {
    pub fn new(out: &'a mut dyn Write, show_everything: bool) -> Self {
        Self {
            out,
            show_everything,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => self.out.flush(),
        }
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let verbose = self.show_everything;
        let out = &mut *self.out;
        match event {
            GameEvent::HandStarted {
                hand_number,
                hand_id,
                button,
                small_blind,
                big_blind,
                seats,
            } => {
                writeln!(out)?;
                writeln!(
                    out,
                    "=== Hand {} ({}) - blinds {}/{} ===",
                    hand_number, hand_id, small_blind, big_blind
                )?;
                if verbose {
                    for s in seats {
                        let marker = if s.seat == *button { " (button)" } else { "" };
                        writeln!(out, "  Seat {}: {} - {} chips{}", s.seat, s.name, s.stack, marker)?;
                    }
                }
            }
            GameEvent::BlindPosted {
                name, blind, amount, ..
            } if verbose => {
                let which = match blind {
                    Blind::Small => "small",
                    Blind::Big => "big",
                };
                writeln!(out, "{} posts {} blind {}", name, which, amount)?;
            }
            GameEvent::HoleCardsDealt { name, cards, .. } if verbose => {
                writeln!(out, "{} is dealt {}", name, format_board(cards))?;
            }
            GameEvent::BoardDealt { street, board, .. } if verbose => {
                writeln!(out, "--- {}: {} ---", street, format_board(board))?;
            }
            GameEvent::PlayerActed {
                name,
                action,
                stack,
                pot,
                ..
            } if verbose => {
                writeln!(
                    out,
                    "{} {} (stack {}, pot {})",
                    name,
                    format_validated(action),
                    stack,
                    pot
                )?;
            }
            GameEvent::ActionRejected {
                name,
                requested,
                reason,
                ..
            } if verbose => {
                writeln!(
                    out,
                    "{} tried to {} but {}; using the safe default",
                    name,
                    format_action(requested),
                    reason
                )?;
            }
            GameEvent::Showdown { hands } => {
                writeln!(out, "Showdown:")?;
                for h in hands {
                    let best: Vec<String> = h.best_five.iter().map(format_card).collect();
                    writeln!(
                        out,
                        "  {} shows {} - {} [{}]",
                        h.name,
                        format_board(&h.hole),
                        h.strength,
                        best.join(" ")
                    )?;
                }
            }
            GameEvent::PotAwarded {
                pot_index,
                name,
                amount,
                uncontested,
                ..
            } => {
                let pot = if *pot_index == 0 {
                    "the main pot".to_string()
                } else {
                    format!("side pot {}", pot_index)
                };
                if *uncontested {
                    writeln!(out, "{} wins {} chips from {} uncontested", name, amount, pot)?;
                } else {
                    writeln!(out, "{} wins {} chips from {}", name, amount, pot)?;
                }
            }
            GameEvent::HandFinished { stacks, .. } => {
                let line: Vec<String> = stacks
                    .iter()
                    .map(|s| format!("{} {}", s.name, s.stack))
                    .collect();
                writeln!(out, "Stacks: {}", line.join(", "))?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl EventSink for ConsoleBroadcaster<'_> {
    fn emit(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.render(event) {
            self.error = Some(e);
        }
    }
}
