use robot_holdem_engine::cards::{Card, Rank, Suit};
use robot_holdem_engine::errors::GameError;
use robot_holdem_engine::game::GameState;
use robot_holdem_engine::logger::Street;
use robot_holdem_engine::player::{Player, PlayerAction, PlayerStatus};

#[test]
fn players_start_active_unless_broke() {
    let p1 = Player::new(0, "alice", 1000);
    let p2 = Player::new(1, "bob", 0);
    assert_eq!(p1.stack(), 1000);
    assert_eq!(p1.status(), PlayerStatus::Active);
    assert_eq!(p2.status(), PlayerStatus::SittingOut);
    assert!(!p2.in_hand());
}

#[test]
fn player_receives_two_hole_cards_once() {
    let mut p = Player::new(0, "alice", 1000);
    let a = Card::new(Rank::Ace, Suit::Spades);
    let k = Card::new(Rank::King, Suit::Spades);
    p.give_cards([a, k]).unwrap();
    assert_eq!(p.hole_cards(), Some([a, k]));
    assert_eq!(p.give_cards([k, a]), Err(GameError::HoleCardsFull(0)));
    p.reset_for_hand();
    assert_eq!(p.hole_cards(), None);
}

#[test]
fn commit_reduces_stack_and_cannot_overbet() {
    let mut p = Player::new(3, "carol", 1000);
    p.commit(500).expect("commit should succeed");
    assert_eq!(p.stack(), 500);
    assert_eq!(p.street_bet(), 500);
    assert_eq!(p.hand_contribution(), 500);

    let err = p.commit(100_000).unwrap_err();
    assert!(err.to_string().contains("Insufficient"));
    assert_eq!(p.stack(), 500, "failed commit must not move chips");

    p.reset_street();
    assert_eq!(p.street_bet(), 0);
    assert_eq!(p.hand_contribution(), 500);
}

#[test]
fn committing_whole_stack_goes_allin() {
    let mut p = Player::new(0, "dave", 40);
    p.commit(40).unwrap();
    assert_eq!(p.status(), PlayerStatus::AllIn);
    assert!(p.in_hand());
    assert!(!p.can_act());
    assert_eq!(p.commit(0), Err(GameError::PlayerNotActive(0)));
}

#[test]
fn folded_player_cannot_act() {
    let mut p = Player::new(2, "erin", 100);
    p.fold().unwrap();
    assert_eq!(p.status(), PlayerStatus::Folded);
    assert!(!p.in_hand());
    assert_eq!(p.fold(), Err(GameError::PlayerNotActive(2)));
}

#[test]
fn game_state_rotates_button_clockwise() {
    let players = (0..4).map(|i| Player::new(i, format!("p{i}"), 100)).collect();
    let mut gs = GameState::new(players).unwrap();
    assert_eq!(gs.button_index(), 0);
    assert_eq!(gs.blind_seats(), (1, 2));
    assert_eq!(gs.first_to_act(Street::Preflop), 3);
    assert_eq!(gs.first_to_act(Street::River), 1);
    gs.rotate_button();
    assert_eq!(gs.button_index(), 1);
    assert_eq!(gs.blind_seats(), (2, 3));
    assert_eq!(gs.payout_order(), vec![2, 3, 0, 1]);
}

#[test]
fn player_action_enum_is_available() {
    let a = PlayerAction::Bet(123);
    match a {
        PlayerAction::Bet(n) => assert_eq!(n, 123),
        _ => panic!("expected Bet variant"),
    }
}
