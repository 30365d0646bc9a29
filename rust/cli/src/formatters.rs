//! Card, board, and action formatters for terminal display.
//!
//! Pure functions used by the console broadcaster and the `deal` command.
//! Suits render as Unicode symbols with an ASCII fallback for terminals that
//! can't show them (see [`supports_unicode`]).
//!
//! ## Example
//!
//! ```rust
//! use robot_holdem_engine::cards::{Card, Rank, Suit};
//! use robot_holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use robot_holdem_engine::cards::{Card, Suit};
use robot_holdem_engine::player::PlayerAction;
use robot_holdem_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use robot_holdem_engine::cards::{Card, Rank, Suit};
/// # use robot_holdem_cli::formatters::format_card;
///
/// let ten_hearts = Card { rank: Rank::Ten, suit: Suit::Hearts };
/// let formatted = format_card(&ten_hearts);
/// assert!(formatted == "T♥" || formatted == "Th");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Format a board (list of cards) in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// Format a requested action as a human-readable string.
///
/// # Example
///
/// ```rust
/// use robot_holdem_engine::player::PlayerAction;
/// # use robot_holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(100)), "raise by 100");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise by {}", amount),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// Format an action the engine applied, with the chips it moved.
pub fn format_validated(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::Check => "checks".to_string(),
        ValidatedAction::Call(c) => format!("calls {}", c),
        ValidatedAction::Bet(c) => format!("bets {}", c),
        ValidatedAction::Raise { by, chips } => format!("raises by {} (puts in {})", by, chips),
        ValidatedAction::AllIn(c) => format!("goes all-in for {}", c),
    }
}
