//! Pairing business logic: roster validation, completion, option filtering, round robin.

mod options;
mod pairing;
mod roster;
mod rotation;

pub use options::selectable_options;
pub use pairing::{complete_rounds, remaining_pool, solve, validate_partial_assignment};
pub use roster::validate_players;
pub use rotation::{generate_round_robin, opponent_in_round};
