//! Pairing errors. All are user-input errors; there is no internal failure class.

/// Errors that can occur while validating input or completing the schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PairingError {
    /// A player field is missing or blank (all 8 names are required).
    IncompleteInput,
    /// Two player names collide case-insensitively.
    DuplicatePlayer,
    /// Fewer opponents chosen than the schedule requires.
    IncompleteRounds { required: usize, chosen: usize },
    /// Leftover players cannot fill the open round slots exactly.
    InsufficientRemainingPlayers { remaining: usize, open_slots: usize },
    /// The same opponent was chosen for more than one round.
    DuplicateOpponent(String),
    /// A chosen opponent is not one of the roster's non-fixed players.
    UnknownOpponent(String),
    /// Round-robin generation needs an even number of players.
    OddPlayerCount(usize),
}

impl std::fmt::Display for PairingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingError::IncompleteInput => write!(f, "All 8 player names must be filled in"),
            PairingError::DuplicatePlayer => {
                write!(f, "Player names must be unique (case-insensitive)")
            }
            PairingError::IncompleteRounds { required, chosen } => {
                write!(f, "Choose at least {} opponents first ({} chosen)", required, chosen)
            }
            PairingError::InsufficientRemainingPlayers { remaining, open_slots } => {
                write!(
                    f,
                    "Inconsistent data: {} remaining players for {} open rounds",
                    remaining, open_slots
                )
            }
            PairingError::DuplicateOpponent(name) => {
                write!(f, "Opponent \"{}\" is chosen for more than one round", name)
            }
            PairingError::UnknownOpponent(name) => {
                write!(f, "\"{}\" is not an available opponent", name)
            }
            PairingError::OddPlayerCount(count) => {
                write!(f, "Round robin needs an even number of players (got {})", count)
            }
        }
    }
}
