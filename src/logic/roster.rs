//! Roster validation: 8 trimmed, non-empty, case-insensitively distinct names.

use crate::models::{PairingError, Roster, ROSTER_SIZE};
use std::collections::HashSet;

/// Validate the raw player fields into a `Roster`.
///
/// Requires exactly 8 entries, each non-empty after trimming, all distinct when
/// folded to lowercase. Returns the names trimmed but otherwise unchanged, in
/// input order, with element 0 as the fixed player.
pub fn validate_players(names: &[String]) -> Result<Roster, PairingError> {
    if names.len() != ROSTER_SIZE {
        return Err(PairingError::IncompleteInput);
    }

    let trimmed: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
    if trimmed.iter().any(|n| n.is_empty()) {
        return Err(PairingError::IncompleteInput);
    }

    let mut seen = HashSet::new();
    for name in &trimmed {
        if !seen.insert(name.to_lowercase()) {
            return Err(PairingError::DuplicatePlayer);
        }
    }

    Ok(Roster::from_validated(trimmed))
}
