//! # robot-holdem-engine: Texas Hold'em Engine Core
//!
//! A deterministic no-limit Texas Hold'em engine for a single table of two to
//! ten automated players. The engine deals, runs the betting, settles main
//! and side pots and reports what happened; deciding what to do is left to
//! the [`decision::Robot`] implementations sitting at the table.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG, dealing and burning
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Player state, actions, and stack management
//! - [`rules`] - Action validation
//! - [`pot`] - Contributions, side pots and payouts
//! - [`betting`] - The per-street betting state machine
//! - [`game`] - Seats, button rotation and positions
//! - [`decision`] - The robot interface and what robots observe
//! - [`engine`] - Hand and session orchestration
//! - [`events`] - Events for renderers
//! - [`config`] - Session parameters
//! - [`logger`] - HandRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use robot_holdem_engine::cards::parse_cards;
//! use robot_holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! assert_eq!(strength.describe(), "Royal Flush");
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use robot_holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal(5).unwrap(), deck2.deal(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
