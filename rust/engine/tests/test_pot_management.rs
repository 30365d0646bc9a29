use std::collections::HashMap;

use robot_holdem_engine::cards::parse_cards;
use robot_holdem_engine::errors::GameError;
use robot_holdem_engine::hand::{evaluate_hand, HandStrength};
use robot_holdem_engine::player::Player;
use robot_holdem_engine::pot::{Pot, PotAward, PotManager};

fn players(stacks: &[u32]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(i, format!("p{i}"), s))
        .collect()
}

fn strength(cards: &str) -> HandStrength {
    evaluate_hand(&parse_cards(cards).unwrap())
}

fn chips(players: &[Player], pm: &PotManager) -> u32 {
    players.iter().map(Player::stack).sum::<u32>() + pm.total()
}

#[test]
fn contribute_conserves_chips() {
    let mut ps = players(&[100, 100]);
    let mut pm = PotManager::new(2);
    pm.contribute(&mut ps[0], 30).unwrap();
    pm.contribute(&mut ps[1], 30).unwrap();
    assert_eq!(pm.total(), 60);
    assert_eq!(pm.contributed(1), 30);
    assert_eq!(chips(&ps, &pm), 200);
}

#[test]
fn contribute_over_stack_fails_without_change() {
    let mut ps = players(&[50]);
    let mut pm = PotManager::new(1);
    let err = pm.contribute(&mut ps[0], 60).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientStack {
            needed: 60,
            available: 50
        }
    );
    assert_eq!(pm.total(), 0);
    assert_eq!(ps[0].stack(), 50);
}

#[test]
fn equal_stacks_no_side_pot() {
    let mut ps = players(&[1000, 1000]);
    let mut pm = PotManager::new(2);
    pm.contribute(&mut ps[0], 1000).unwrap();
    pm.contribute(&mut ps[1], 1000).unwrap();
    let pots = pm.pots();
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, 2000);
}

#[test]
fn short_allin_creates_exactly_one_side_pot() {
    let mut ps = players(&[50, 200, 200]);
    let mut pm = PotManager::new(3);
    pm.contribute(&mut ps[0], 50).unwrap();
    pm.contribute(&mut ps[1], 200).unwrap();
    pm.contribute(&mut ps[2], 200).unwrap();

    let pots = pm.pots();
    assert_eq!(
        pots,
        vec![
            Pot {
                amount: 150,
                eligible: vec![0, 1, 2]
            },
            Pot {
                amount: 300,
                eligible: vec![1, 2]
            },
        ]
    );
    assert_eq!(pots.iter().map(|p| p.amount).sum::<u32>(), pm.total());
}

#[test]
fn allin_winner_only_takes_main_pot() {
    let mut ps = players(&[50, 200, 200]);
    let mut pm = PotManager::new(3);
    for (seat, amount) in [(0, 50), (1, 200), (2, 200)] {
        pm.contribute(&mut ps[seat], amount).unwrap();
    }
    let mut hands = HashMap::new();
    hands.insert(0, strength("Ah Ad Ac Kh Kd"));
    hands.insert(1, strength("Qh Qd 7c 5h 2d"));
    hands.insert(2, strength("Jh Jd 7c 5h 2d"));

    let awards = pm.settle(&hands, &[1, 2, 0]).unwrap();
    assert_eq!(
        awards,
        vec![
            PotAward {
                pot_index: 0,
                seat: 0,
                amount: 150
            },
            PotAward {
                pot_index: 1,
                seat: 1,
                amount: 300
            },
        ]
    );
}

#[test]
fn folded_seat_is_never_paid() {
    let mut ps = players(&[100, 100, 100]);
    let mut pm = PotManager::new(3);
    for seat in 0..3 {
        pm.contribute(&mut ps[seat], 40).unwrap();
    }
    pm.mark_folded(0);
    let mut hands = HashMap::new();
    // the folded seat would have won
    hands.insert(0, strength("Ah Ad Ac As Kd"));
    hands.insert(1, strength("Qh Qd 7c 5h 2d"));
    hands.insert(2, strength("Jh Jd 7c 5h 2d"));
    let awards = pm.settle(&hands, &[1, 2, 0]).unwrap();
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].seat, 1);
    assert_eq!(awards[0].amount, 120);
}

#[test]
fn tie_splits_with_odd_chip_in_payout_order() {
    let mut ps = players(&[100, 100, 100]);
    let mut pm = PotManager::new(3);
    pm.contribute(&mut ps[0], 33).unwrap();
    pm.contribute(&mut ps[1], 34).unwrap();
    pm.contribute(&mut ps[2], 34).unwrap();
    pm.mark_folded(0);

    let mut hands = HashMap::new();
    hands.insert(1, strength("Kh Qd 9c 7h 5d"));
    hands.insert(2, strength("Ks Qc 9d 7s 5c"));

    // payout order starts left of the button: seat 2 first
    let awards = pm.settle(&hands, &[2, 0, 1]).unwrap();
    let total: u32 = awards.iter().map(|a| a.amount).sum();
    assert_eq!(total, 101);
    let to = |seat| -> u32 {
        awards
            .iter()
            .filter(|a| a.seat == seat)
            .map(|a| a.amount)
            .sum()
    };
    assert_eq!(to(2), 51);
    assert_eq!(to(1), 50);
}

#[test]
fn uncontested_pot_needs_no_hands() {
    let mut ps = players(&[100, 100]);
    let mut pm = PotManager::new(2);
    pm.contribute(&mut ps[0], 5).unwrap();
    pm.contribute(&mut ps[1], 10).unwrap();
    pm.mark_folded(0);
    let awards = pm.settle(&HashMap::new(), &[1, 0]).unwrap();
    assert_eq!(
        awards,
        vec![PotAward {
            pot_index: 0,
            seat: 1,
            amount: 15
        }]
    );
}

#[test]
fn staggered_allins_layer_from_smallest_to_largest() {
    let mut ps = players(&[30, 60, 100, 100]);
    let mut pm = PotManager::new(4);
    for (seat, amount) in [(0, 30), (1, 60), (2, 100), (3, 100)] {
        pm.contribute(&mut ps[seat], amount).unwrap();
    }
    assert_eq!(
        pm.pots(),
        vec![
            Pot {
                amount: 120,
                eligible: vec![0, 1, 2, 3]
            },
            Pot {
                amount: 90,
                eligible: vec![1, 2, 3]
            },
            Pot {
                amount: 80,
                eligible: vec![2, 3]
            },
        ]
    );

    // each shorter stack holds the better hand, so every layer has its own winner
    let mut hands = HashMap::new();
    hands.insert(0, strength("Ah Ad Ac Kh Kd"));
    hands.insert(1, strength("Kc Ks 9h 9d 2c"));
    hands.insert(2, strength("Qh Qd 7c 5h 2d"));
    hands.insert(3, strength("Jh Td 7s 5c 2h"));
    let awards = pm.settle(&hands, &[1, 2, 3, 0]).unwrap();
    assert_eq!(
        awards,
        vec![
            PotAward {
                pot_index: 0,
                seat: 0,
                amount: 120
            },
            PotAward {
                pot_index: 1,
                seat: 1,
                amount: 90
            },
            PotAward {
                pot_index: 2,
                seat: 2,
                amount: 80
            },
        ]
    );
    assert_eq!(awards.iter().map(|a| a.amount).sum::<u32>(), 290);
    assert_eq!(pm.contributed(1), 60);
}
