use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action that passed validation. Every amount is the number of chips the
/// player moves into the pot with this action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    /// Raise the current bet by `by`, committing `chips` (the call plus the raise)
    Raise { by: u32, chips: u32 },
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(c) | ValidatedAction::Bet(c) | ValidatedAction::AllIn(c) => *c,
            ValidatedAction::Raise { chips, .. } => *chips,
        }
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`].
/// A request that commits exactly the whole stack becomes [`ValidatedAction::AllIn`];
/// calling with a stack no larger than the amount owed is an all-in call.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `to_call` - Amount needed to call the current bet
/// * `min_raise` - Minimum bet, and minimum raise increment (last full raise, at least the big blind)
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::CheckFacingBet`] - check while chips are owed
/// - [`GameError::IllegalAction`] - bet while facing a bet, or all-in with no chips
/// - [`GameError::InvalidBetAmount`] - bet/raise of zero or below the minimum
/// - [`GameError::InsufficientStack`] - bet/raise committing more than the stack
///
/// # Examples
///
/// ```
/// use robot_holdem_engine::rules::{validate_action, ValidatedAction};
/// use robot_holdem_engine::player::PlayerAction;
///
/// let result = validate_action(1000, 50, 100, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::Call(50))));
///
/// // Short stack calling goes all-in for what it has
/// let result = validate_action(30, 50, 100, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::AllIn(30))));
/// ```
///
/// ```
/// use robot_holdem_engine::rules::validate_action;
/// use robot_holdem_engine::player::PlayerAction;
/// use robot_holdem_engine::errors::GameError;
///
/// let result = validate_action(1000, 50, 100, PlayerAction::Check);
/// assert!(matches!(result, Err(GameError::CheckFacingBet { to_call: 50 })));
///
/// let result = validate_action(1000, 50, 100, PlayerAction::Raise(50));
/// assert!(matches!(result, Err(GameError::InvalidBetAmount { .. })));
/// ```
pub fn validate_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CheckFacingBet { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if to_call > 0 {
                return Err(GameError::IllegalAction(format!(
                    "cannot bet while facing {to_call}; raise instead"
                )));
            }
            sized(stack, amount, amount, min_raise).map(|chips| match chips {
                Sized::AllIn(c) => ValidatedAction::AllIn(c),
                Sized::Exact(c) => ValidatedAction::Bet(c),
            })
        }
        A::Raise(by) => {
            let chips = to_call.saturating_add(by);
            sized(stack, by, chips, min_raise).map(|s| match s {
                Sized::AllIn(c) => ValidatedAction::AllIn(c),
                Sized::Exact(chips) => ValidatedAction::Raise { by, chips },
            })
        }
        A::AllIn => {
            if stack == 0 {
                Err(GameError::IllegalAction("no chips left to go all-in".into()))
            } else {
                Ok(ValidatedAction::AllIn(stack))
            }
        }
    }
}

enum Sized {
    Exact(u32),
    AllIn(u32),
}

// Shared sizing for bets and raises: the increment must reach the minimum
// unless the chips committed are the whole stack.
fn sized(stack: u32, increment: u32, chips: u32, min_raise: u32) -> Result<Sized, GameError> {
    if increment == 0 {
        return Err(GameError::InvalidBetAmount {
            amount: 0,
            minimum: min_raise.max(1),
        });
    }
    if chips > stack {
        return Err(GameError::InsufficientStack {
            needed: chips,
            available: stack,
        });
    }
    if chips == stack {
        return Ok(Sized::AllIn(stack));
    }
    if increment < min_raise {
        return Err(GameError::InvalidBetAmount {
            amount: increment,
            minimum: min_raise,
        });
    }
    Ok(Sized::Exact(chips))
}
