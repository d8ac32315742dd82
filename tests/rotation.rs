//! Integration tests for the baseline round robin.

use pairing_planner_web::{generate_round_robin, opponent_in_round, PairingError};
use std::collections::HashSet;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn eight() -> Vec<String> {
    names(&["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"])
}

#[test]
fn odd_player_count_is_rejected() {
    assert!(matches!(
        generate_round_robin(&names(&["A", "B", "C"])),
        Err(PairingError::OddPlayerCount(3))
    ));
}

#[test]
fn eight_players_give_seven_rounds_of_perfect_matchings() {
    let rounds = generate_round_robin(&eight()).unwrap();
    assert_eq!(rounds.len(), 7);
    for round in &rounds {
        assert_eq!(round.len(), 4);
        let mut seen = HashSet::new();
        for (a, b) in round {
            assert!(seen.insert(a.clone()));
            assert!(seen.insert(b.clone()));
        }
        assert_eq!(seen.len(), 8);
    }
}

#[test]
fn first_player_is_pinned_and_meets_everyone_once() {
    let rounds = generate_round_robin(&eight()).unwrap();
    let mut faced = HashSet::new();
    for round in &rounds {
        let (a, b) = &round[0];
        assert_eq!(a, "P1");
        assert!(faced.insert(b.clone()));
    }
    assert_eq!(faced.len(), 7);
}

#[test]
fn opponent_lookup_wraps_past_one_cycle() {
    let players = eight();
    let round_1 = opponent_in_round(&players, "P1", 1).unwrap();
    let round_8 = opponent_in_round(&players, "P1", 8).unwrap();
    assert!(round_1.is_some());
    assert_eq!(round_1, round_8);
}

#[test]
fn unknown_player_has_no_opponent() {
    assert_eq!(opponent_in_round(&eight(), "Zed", 1).unwrap(), None);
}

#[test]
fn empty_list_yields_no_rounds() {
    assert!(generate_round_robin(&[]).unwrap().is_empty());
}
