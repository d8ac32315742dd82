//! Assignment validation, remaining-pool computation, and schedule completion.

use crate::logic::roster::validate_players;
use crate::models::{
    Completion, PairingError, PartialAssignment, Roster, RoundPairing, ScheduleConfig,
};
use std::collections::HashSet;

/// Validate the dropdown selections into a `PartialAssignment`.
///
/// Blank entries are unselected slots and are dropped. The remaining entries
/// must number at least `min_chosen`, must each be a non-fixed roster member,
/// and must be pairwise distinct. The UI's option filtering already prevents
/// duplicates, but a JSON client is not bound by it, so the engine re-checks.
pub fn validate_partial_assignment(
    roster: &Roster,
    chosen: &[String],
    min_chosen: usize,
) -> Result<PartialAssignment, PairingError> {
    let picked: Vec<String> = chosen
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if picked.len() < min_chosen {
        return Err(PairingError::IncompleteRounds {
            required: min_chosen,
            chosen: picked.len(),
        });
    }

    let mut seen = HashSet::new();
    for name in &picked {
        if !roster.opponents().iter().any(|p| p == name) {
            return Err(PairingError::UnknownOpponent(name.clone()));
        }
        if !seen.insert(name.clone()) {
            return Err(PairingError::DuplicateOpponent(name.clone()));
        }
    }

    Ok(PartialAssignment::from_validated(picked))
}

/// All players except the fixed player and those already assigned, in roster
/// order. Completion rotates over this list, so the order is load-bearing.
pub fn remaining_pool(roster: &Roster, assignment: &PartialAssignment) -> Vec<String> {
    roster
        .opponents()
        .iter()
        .filter(|p| !assignment.contains(p))
        .cloned()
        .collect()
}

/// Fill every round label, returning two candidate completions.
///
/// The chosen prefix is copied verbatim into both. Each open slot `k` (counted
/// from the end of the prefix) takes `pool[k mod |pool|]` in the first
/// completion and `pool[(k+1) mod |pool|]` in the second, so the second is the
/// first with the pool rotated one step. Neither is claimed correct; they are
/// two fillings consistent with the known prefix. Pure and deterministic.
pub fn complete_rounds(
    config: &ScheduleConfig,
    assignment: &PartialAssignment,
    pool: &[String],
) -> Result<(Completion, Completion), PairingError> {
    let labels = &config.round_labels;
    let open_slots = labels.len().saturating_sub(assignment.len());
    if assignment.len() > labels.len() || pool.len() != open_slots {
        return Err(PairingError::InsufficientRemainingPlayers {
            remaining: pool.len(),
            open_slots,
        });
    }

    let mut first = Vec::with_capacity(labels.len());
    let mut second = Vec::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if i < assignment.len() {
            let opponent = &assignment.opponents()[i];
            first.push(RoundPairing::new(label, opponent));
            second.push(RoundPairing::new(label, opponent));
        } else {
            let k = i - assignment.len();
            first.push(RoundPairing::new(label, &pool[k % pool.len()]));
            second.push(RoundPairing::new(label, &pool[(k + 1) % pool.len()]));
        }
    }

    Ok((Completion { rounds: first }, Completion { rounds: second }))
}

/// Full solve pass: validate the roster and the chosen prefix, derive the
/// remaining pool, and complete the schedule. Fails fast at the first violated
/// precondition; no partial result is ever produced.
pub fn solve(
    config: &ScheduleConfig,
    players: &[String],
    chosen: &[String],
) -> Result<(Completion, Completion), PairingError> {
    let roster = validate_players(players)?;
    let assignment = validate_partial_assignment(&roster, chosen, config.min_chosen)?;
    let pool = remaining_pool(&roster, &assignment);
    complete_rounds(config, &assignment, &pool)
}
