//! Roster: the validated 8-player set.

use serde::Serialize;

/// Number of players in a bracket: the fixed player plus seven opponents.
pub const ROSTER_SIZE: usize = 8;

/// The validated player set. Element 0 is the fixed player ("You"); the other
/// seven are the opponents. Built only via `validate_players`; immutable after.
/// Order matters: completion rotates over the remaining players in roster order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Wrap names that already passed validation (count, non-empty, distinct).
    pub(crate) fn from_validated(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The fixed player's name (element 0).
    pub fn fixed(&self) -> &str {
        &self.names[0]
    }

    /// The seven non-fixed players, in input order.
    pub fn opponents(&self) -> &[String] {
        &self.names[1..]
    }

    /// All names including the fixed player, in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
