//! Data structures for the pairing planner: roster, schedule config, completions.

mod error;
mod roster;
mod schedule;

pub use error::PairingError;
pub use roster::{Roster, ROSTER_SIZE};
pub use schedule::{Completion, PartialAssignment, RoundPairing, ScheduleConfig};
