//! Integration tests for roster validation.

use pairing_planner_web::{validate_players, PairingError};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn accepts_eight_distinct_names_in_order() {
    let input = names(&["You", "Ana", "Ben", "Cleo", "Dan", "Eve", "Finn", "Gus"]);
    let roster = validate_players(&input).unwrap();
    assert_eq!(roster.names(), input.as_slice());
    assert_eq!(roster.fixed(), "You");
    assert_eq!(roster.opponents().len(), 7);
}

#[test]
fn trims_whitespace_but_preserves_case() {
    let input = names(&["  You ", "Ana", "BEN", "Cleo", "Dan", "Eve", "Finn", "Gus"]);
    let roster = validate_players(&input).unwrap();
    assert_eq!(roster.fixed(), "You");
    assert_eq!(roster.opponents()[1], "BEN");
}

#[test]
fn rejects_blank_entry() {
    let input = names(&["You", "Ana", "   ", "Cleo", "Dan", "Eve", "Finn", "Gus"]);
    assert!(matches!(
        validate_players(&input),
        Err(PairingError::IncompleteInput)
    ));
}

#[test]
fn rejects_wrong_count() {
    let input = names(&["You", "Ana", "Ben"]);
    assert!(matches!(
        validate_players(&input),
        Err(PairingError::IncompleteInput)
    ));
}

#[test]
fn rejects_case_insensitive_duplicate() {
    let input = names(&["You", "Ana", "ana", "Cleo", "Dan", "Eve", "Finn", "Gus"]);
    assert!(matches!(
        validate_players(&input),
        Err(PairingError::DuplicatePlayer)
    ));
}
