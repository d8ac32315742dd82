//! Pairing planner web app: library with models and pairing logic.

pub mod logic;
pub mod models;

pub use logic::{
    complete_rounds, generate_round_robin, opponent_in_round, remaining_pool,
    selectable_options, solve, validate_partial_assignment, validate_players,
};
pub use models::{
    Completion, PairingError, PartialAssignment, Roster, RoundPairing, ScheduleConfig,
    ROSTER_SIZE,
};
