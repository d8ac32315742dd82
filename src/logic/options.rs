//! Dropdown option filtering, kept pure so the page never decides eligibility.

use crate::models::Roster;

/// Opponents selectable for the slot at `editing_index`, in roster order.
///
/// A player is offered unless some other slot already uses it; the slot's own
/// current value stays offered so the user can keep or re-pick it. The fixed
/// player is never offered.
pub fn selectable_options(
    roster: &Roster,
    selections: &[String],
    editing_index: usize,
) -> Vec<String> {
    let current = selections
        .get(editing_index)
        .map(String::as_str)
        .unwrap_or("");

    let used_elsewhere: Vec<&str> = selections
        .iter()
        .enumerate()
        .filter(|(i, s)| *i != editing_index && !s.trim().is_empty())
        .map(|(_, s)| s.as_str())
        .collect();

    roster
        .opponents()
        .iter()
        .filter(|p| p.as_str() == current || !used_elsewhere.contains(&p.as_str()))
        .cloned()
        .collect()
}
