mod afk;
mod code;
mod commitment;
mod dispute;
mod errors;
mod feedback;
pub mod game;
pub mod rules;
mod turn;

pub use afk::AfkResolution;
pub use code::commitment_of;
pub use errors::DomainError;
pub use feedback::Feedback;
pub use game::{
    AfkAccusation, DisputeRecord, EndReason, Game, GameOutcome, GameState, TurnPhase,
};
pub use rules::GameRules;
