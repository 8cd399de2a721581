mod commands;
mod dto;
mod events;
mod queries;
mod settlement;

pub use commands::{
    AcceptRevealCommand, CommitCodeCommand, CreateGameCommand, DisputeCommand,
    EndAccuseAfkCommand, FeedbackCommand, GuessCommand, JoinGameCommand, RevealCodeCommand,
    StartAccuseAfkCommand, StartGameCommand,
};
pub use dto::{DisputeVerdict, FeedbackResult};
pub use queries::{
    GetGameQuery, GetGuessesAndTurnsLeftQuery, GetOutcomeQuery, GetRulesQuery, GetScoresQuery,
    GetWinnerQuery, OpenGamesQuery, RandomOpenGameQuery,
};
