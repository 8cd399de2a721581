//! Contract events.
//!
//! Every event carries the game ID and the game's `seq` right after the
//! transition it reports. Observers keep the last `seq` they applied per game
//! and ignore anything at or below it, which makes replays and duplicates
//! harmless; gaps mean a missed event and call for a `get_game` refresh.

use soroban_sdk::{contractevent, Address, Bytes, BytesN};

use crate::domain::GameOutcome;

#[contractevent]
pub struct EvGameCreated {
    pub game_id: u32,
    pub seq: u32,
    pub creator: Address,
    /// Reserved opponent; `None` for a public game
    pub opponent: Option<Address>,
    pub stake: i128,
}

#[contractevent]
pub struct EvGameJoined {
    pub game_id: u32,
    pub seq: u32,
    pub opponent: Address,
}

#[contractevent]
pub struct EvGameStarted {
    pub game_id: u32,
    pub seq: u32,
    pub code_maker: Address,
    pub code_breaker: Address,
}

#[contractevent]
pub struct EvCodeCommitted {
    pub game_id: u32,
    pub seq: u32,
    pub code_maker: Address,
    pub hash: BytesN<32>,
}

#[contractevent]
pub struct EvCodeGuessed {
    pub game_id: u32,
    pub seq: u32,
    pub guess: Bytes,
    pub guess_index: u32,
    pub guesses_left: u32,
}

/// Feedback said every peg is exact; the maker must now reveal.
#[contractevent]
pub struct EvCodeGuessedSuccessfully {
    pub game_id: u32,
    pub seq: u32,
    pub guess_index: u32,
}

#[contractevent]
pub struct EvCodeGuessedUnsuccessfully {
    pub game_id: u32,
    pub seq: u32,
    pub guess_index: u32,
    pub exact: u32,
    pub color_only: u32,
    pub guesses_left: u32,
}

#[contractevent]
pub struct EvCodeRevealed {
    pub game_id: u32,
    pub seq: u32,
    pub code: Bytes,
    pub matches_commitment: bool,
}

#[contractevent]
pub struct EvDisputeVerdict {
    pub game_id: u32,
    pub seq: u32,
    pub guess_index: u32,
    pub upheld: bool,
    pub winner: Address,
}

#[contractevent]
pub struct EvTurnCompleted {
    pub game_id: u32,
    pub seq: u32,
    pub code_breaker: Address,
    pub points: u32,
    pub creator_score: u32,
    pub opponent_score: u32,
    pub turns_left: u32,
}

#[contractevent]
pub struct EvAfkAccusation {
    pub game_id: u32,
    pub seq: u32,
    pub accuser: Address,
    pub accused: Address,
    pub deadline: u64,
}

#[contractevent]
pub struct EvAfkResolved {
    pub game_id: u32,
    pub seq: u32,
    pub forfeited: bool,
}

#[contractevent]
pub struct EvGameEnded {
    pub game_id: u32,
    pub seq: u32,
    pub outcome: GameOutcome,
    pub winner: Option<Address>,
}
