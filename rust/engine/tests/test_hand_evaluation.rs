use std::cmp::Ordering;

use robot_holdem_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use robot_holdem_engine::hand::{best_hand, compare_hands, evaluate_hand, Category};

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

fn eval(s: &str) -> robot_holdem_engine::hand::HandStrength {
    evaluate_hand(&parse_cards(s).expect("valid cards"))
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate_hand(&cards);
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.to_string(), "Royal Flush");
}

#[test]
fn royal_flush_beats_four_of_a_kind() {
    let royal = eval("Ah Kh Qh Jh Th");
    let quads = eval("9s 9h 9d 9c 2h");
    assert_eq!(compare_hands(&royal, &quads), Ordering::Greater);
}

#[test]
fn category_ladder_is_ordered() {
    let ladder = [
        "As Kd 9h 7c 3s",
        "As Ad 9h 7c 3s",
        "As Ad 9h 9c 3s",
        "As Ad Ah 7c 3s",
        "6s 7d 8h 9c Ts",
        "2h 7h 9h Jh Kh",
        "Ks Kd Kh 3c 3s",
        "4s 4d 4h 4c Ks",
        "5c 6c 7c 8c 9c",
    ];
    let strengths: Vec<_> = ladder.iter().map(|h| eval(h)).collect();
    for pair in strengths.windows(2) {
        assert!(pair[1] > pair[0], "{} should beat {}", pair[1], pair[0]);
    }
}

#[test]
fn wheel_ranks_below_six_high_straight() {
    let wheel = eval("Ah 2d 3c 4s 5h");
    let six_high = eval("2d 3c 4s 5h 6d");
    assert_eq!(wheel.category, Category::Straight);
    assert!(compare_hands(&six_high, &wheel).is_gt());
}

#[test]
fn steel_wheel_is_a_five_high_straight_flush() {
    let hs = eval("Ad 2d 3d 4d 5d Kc Qs");
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers[0], 5);
    assert_eq!(hs.describe(), "Straight Flush");
}

#[test]
fn two_pair_compares_high_pair_low_pair_then_kicker() {
    let a = eval("Ks Kd 4h 4c As 2d 3h");
    let b = eval("Kh Kc 4s 4d Qs 2c 3d");
    assert_eq!(a.kickers, [13, 4, 14, 0, 0]);
    assert!(a > b);

    let c = eval("Qs Qd Jh Jc As 2d 3h");
    assert!(b > c, "kings up beat queens up regardless of kicker");
}

#[test]
fn suits_never_break_ties() {
    let a = eval("As Kd 9h 7c 3s");
    let b = eval("Ah Kc 9d 7s 3h");
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn best_five_uses_board_when_board_plays() {
    let cards = parse_cards("2c 3d Ts Js Qs Ks As").unwrap();
    let (hs, five) = best_hand(&cards);
    assert_eq!(hs.describe(), "Royal Flush");
    assert_eq!(five.len(), 5);
    assert!(five.iter().all(|card| card.suit == S::Spades));
}

#[test]
fn pair_beats_high_card() {
    let pair = eval("Ac Ah 9s 3d 4c 8d Jh");
    let high = eval("Ac Kh 9s 8d 7c 3d 2h");
    assert_eq!(pair.category, Category::OnePair);
    assert_eq!(high.category, Category::HighCard);
    assert!(compare_hands(&pair, &high).is_gt());
}
