use robot_holdem_engine::errors::GameError;
use robot_holdem_engine::player::PlayerAction as A;
use robot_holdem_engine::rules::{validate_action, ValidatedAction};

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(
        10_000,
        /*to_call*/ 0,
        /*min_raise*/ 100,
        A::Bet(0),
    )
    .unwrap_err();
    match err {
        GameError::InvalidBetAmount { .. } => {}
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_stack_is_rejected() {
    let err = validate_action(50, 0, 10, A::Bet(100)).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientStack {
            needed: 100,
            available: 50
        }
    );
}

#[test]
fn bet_of_whole_stack_is_allin_even_below_minimum() {
    let va = validate_action(40, 0, 100, A::Bet(40)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(40));
}

#[test]
fn bet_below_minimum_is_invalid() {
    let err = validate_action(1000, 0, 20, A::Bet(10)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBetAmount {
            amount: 10,
            minimum: 20
        }
    );
}

#[test]
fn bet_facing_a_bet_is_illegal() {
    let err = validate_action(1000, 20, 20, A::Bet(40)).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn check_facing_bet_is_rejected() {
    let err = validate_action(1000, 20, 20, A::Check).unwrap_err();
    assert_eq!(err, GameError::CheckFacingBet { to_call: 20 });
}

#[test]
fn call_with_nothing_owed_is_a_check() {
    assert_eq!(
        validate_action(1000, 0, 10, A::Call).unwrap(),
        ValidatedAction::Check
    );
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(60, 100, 100, A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn raise_commits_call_plus_increment() {
    let va = validate_action(1000, 30, 20, A::Raise(40)).unwrap();
    assert_eq!(va, ValidatedAction::Raise { by: 40, chips: 70 });
    assert_eq!(va.chips(), 70);
}

#[test]
fn raise_below_minimum_is_invalid_unless_allin() {
    let err = validate_action(1000, 100, 100, A::Raise(50)).unwrap_err();
    assert!(matches!(err, GameError::InvalidBetAmount { .. }));

    // to_call=100, stack=150, Raise(50) commits the whole stack
    let va = validate_action(150, 100, 100, A::Raise(50)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(150));
}

#[test]
fn raise_with_nothing_owed_is_allowed() {
    // big blind's option pre-flop
    let va = validate_action(990, 0, 10, A::Raise(10)).unwrap();
    assert_eq!(va, ValidatedAction::Raise { by: 10, chips: 10 });
}

#[test]
fn allin_requires_chips() {
    assert_eq!(
        validate_action(75, 10, 10, A::AllIn).unwrap(),
        ValidatedAction::AllIn(75)
    );
    assert!(matches!(
        validate_action(0, 10, 10, A::AllIn),
        Err(GameError::IllegalAction(_))
    ));
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(
        validate_action(0, 0, 10, A::Fold).unwrap(),
        ValidatedAction::Fold
    );
}
