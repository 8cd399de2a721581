use soroban_sdk::{contracttype, Address};

use crate::domain::Feedback;

/// Result of giving feedback (returned to frontend)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedbackResult {
    /// Which guess of the turn was scored (0-based)
    pub guess_index: u32,
    /// Feedback claimed the code was cracked
    pub solved: bool,
    /// Turn is over; the code-maker must reveal next
    pub awaiting_reveal: bool,
    pub guesses_left: u32,
}

/// Outcome of a dispute (returned to frontend)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeVerdict {
    pub game_id: u32,
    pub guess_index: u32,
    /// The code-maker was caught cheating
    pub upheld: bool,
    pub recorded: Feedback,
    /// Feedback recomputed from the revealed code, if it was honest
    pub recomputed: Option<Feedback>,
    pub winner: Address,
}
