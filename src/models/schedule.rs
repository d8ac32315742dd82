//! Round-label configuration, the chosen-opponent prefix, and completion output.

use serde::{Deserialize, Serialize};

fn default_round_labels() -> Vec<String> {
    ["II-4", "II-5", "II-6", "III-1", "III-2", "III-4", "III-5"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_min_chosen() -> usize {
    5
}

/// Which round slots must be filled and how many opponents must be pre-chosen.
/// Label count and threshold vary between bracket formats, so both are request
/// parameters with defaults rather than constants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Ordered labels for every round slot that must be filled.
    #[serde(default = "default_round_labels")]
    pub round_labels: Vec<String>,
    /// How many opponents must be chosen before solving.
    #[serde(default = "default_min_chosen")]
    pub min_chosen: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            round_labels: default_round_labels(),
            min_chosen: default_min_chosen(),
        }
    }
}

/// Opponents already chosen for the leading rounds, in round order.
/// Built only via `validate_partial_assignment`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialAssignment {
    opponents: Vec<String>,
}

impl PartialAssignment {
    /// Wrap a chosen prefix that already passed validation.
    pub(crate) fn from_validated(opponents: Vec<String>) -> Self {
        Self { opponents }
    }

    pub fn opponents(&self) -> &[String] {
        &self.opponents
    }

    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.opponents.iter().any(|o| o == name)
    }
}

/// One round slot paired with the fixed player's opponent for it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPairing {
    pub label: String,
    pub opponent: String,
}

impl RoundPairing {
    pub fn new(label: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            opponent: opponent.into(),
        }
    }
}

/// One full hypothesis: every round label mapped to an opponent, with the
/// chosen prefix verbatim and the open slots filled from the remaining pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub rounds: Vec<RoundPairing>,
}
