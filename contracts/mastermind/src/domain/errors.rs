use soroban_sdk::contracterror;

/// Domain-specific errors for Mastermind game logic
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DomainError {
    // Registry errors
    GameNotFound = 1,
    InvalidStake = 2,
    StakeMismatch = 3,
    SelfPlay = 4,
    ReservedForAnotherOpponent = 5,
    NoOpenGames = 6,

    // Lifecycle errors
    WrongPhase = 7,
    WrongRole = 8,
    GameAlreadyEnded = 9,
    NotPlayer = 10,

    // Code and feedback errors
    InvalidCode = 11,
    InvalidFeedback = 12,
    InvalidIndex = 13,

    // Liveness errors
    AccusationAlreadyActive = 14,
    NoActiveAccusation = 15,
    TooEarly = 16,

    // Configuration errors
    InvalidRules = 17,
    NotConfigured = 18,
    GameIdsExhausted = 19,
}
