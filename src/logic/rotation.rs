//! Baseline round-robin schedule: circle method with the first player pinned.

use crate::models::PairingError;

/// Generate one full round-robin cycle for an even number of players.
///
/// Produces `n - 1` rounds of `n / 2` pairings each. The first player stays in
/// place; the rest rotate one step per round, so over a full cycle every player
/// meets every other player exactly once.
pub fn generate_round_robin(players: &[String]) -> Result<Vec<Vec<(String, String)>>, PairingError> {
    let n = players.len();
    if n % 2 != 0 {
        return Err(PairingError::OddPlayerCount(n));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut order: Vec<String> = players.to_vec();
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let mut pairs = Vec::with_capacity(n / 2);
        pairs.push((order[0].clone(), order[n - 1].clone()));
        for i in 1..n / 2 {
            pairs.push((order[i].clone(), order[n - 1 - i].clone()));
        }
        rounds.push(pairs);
        // rotate everyone except the pinned first player one step right
        order[1..].rotate_right(1);
    }

    Ok(rounds)
}

/// Who `player` faces in the 1-based `round_number`, wrapping cyclically past
/// one full round-robin cycle. `None` if the player is not in the list.
pub fn opponent_in_round(
    players: &[String],
    player: &str,
    round_number: usize,
) -> Result<Option<String>, PairingError> {
    let rounds = generate_round_robin(players)?;
    if rounds.is_empty() || round_number == 0 {
        return Ok(None);
    }
    let idx = (round_number - 1) % rounds.len();
    for (a, b) in &rounds[idx] {
        if a == player {
            return Ok(Some(b.clone()));
        }
        if b == player {
            return Ok(Some(a.clone()));
        }
    }
    Ok(None)
}
