//! Integration tests for dropdown option filtering.

use pairing_planner_web::{selectable_options, validate_players, Roster};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn roster() -> Roster {
    validate_players(&names(&["You", "A", "B", "C", "D", "E", "F", "G"])).unwrap()
}

#[test]
fn fixed_player_is_never_offered() {
    let r = roster();
    let opts = selectable_options(&r, &names(&["", "", ""]), 0);
    assert_eq!(opts, names(&["A", "B", "C", "D", "E", "F", "G"]));
}

#[test]
fn opponents_used_elsewhere_disappear() {
    let r = roster();
    let opts = selectable_options(&r, &names(&["A", "B", ""]), 2);
    assert_eq!(opts, names(&["C", "D", "E", "F", "G"]));
}

#[test]
fn editing_slot_keeps_its_own_pick() {
    let r = roster();
    let opts = selectable_options(&r, &names(&["A", "B", ""]), 1);
    assert!(opts.contains(&"B".to_string()));
    assert!(!opts.contains(&"A".to_string()));
}

#[test]
fn out_of_range_index_still_filters_used_picks() {
    let r = roster();
    let opts = selectable_options(&r, &names(&["A"]), 5);
    assert_eq!(opts, names(&["B", "C", "D", "E", "F", "G"]));
}
