use soroban_sdk::{contracttype, Address, Bytes, Env, Vec};

use super::code::CodeCommitment;
use super::errors::DomainError;
use super::feedback::Feedback;
use super::rules::GameRules;

/// Coarse lifecycle of a match
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    /// Creator deposited, waiting for an opponent
    Created,
    /// Both stakes deposited, waiting for `start_game`
    Joined,
    /// Turns are being played
    InProgress,
    /// Winner decided, stakes settled
    Ended,
}

impl GameState {
    /// Lifecycle transition table
    pub fn can_advance_to(self, next: GameState) -> bool {
        matches!(
            (self, next),
            (GameState::Created, GameState::Joined)
                | (GameState::Joined, GameState::InProgress)
                | (GameState::InProgress, GameState::Ended)
        )
    }
}

/// Step inside a turn; only meaningful while `InProgress`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnPhase {
    /// Code-maker must commit the hash of a secret code
    AwaitingCommit,
    /// Code-breaker must guess
    Guess,
    /// Code-maker must score the last guess
    Feedback,
    /// Code-maker must reveal the committed code
    Reveal,
    /// Code-breaker may dispute a feedback or accept the turn
    AwaitingDispute,
}

impl TurnPhase {
    /// Turn transition table
    pub fn can_advance_to(self, next: TurnPhase) -> bool {
        matches!(
            (self, next),
            (TurnPhase::AwaitingCommit, TurnPhase::Guess)
                | (TurnPhase::Guess, TurnPhase::Feedback)
                | (TurnPhase::Feedback, TurnPhase::Guess)
                | (TurnPhase::Feedback, TurnPhase::Reveal)
                | (TurnPhase::Reveal, TurnPhase::AwaitingDispute)
                | (TurnPhase::AwaitingDispute, TurnPhase::AwaitingCommit)
        )
    }
}

/// Final result of a match
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    Undecided,
    CreatorWins,
    OpponentWins,
    Draw,
}

/// Why a match ended
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EndReason {
    /// All turns played, decided by score
    TurnsExhausted,
    /// Breaker proved the maker cheated
    DisputeUpheld,
    /// Breaker disputed an honest feedback and forfeits
    DisputeRejected,
    /// Accused player did not act before the deadline
    Abandoned,
}

/// Outstanding liveness challenge
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AfkAccusation {
    pub accuser: Address,
    pub accused: Address,
    /// Ledger timestamp after which the accusation can be enforced
    pub deadline: u64,
    /// Game `seq` right after the accusation; any later action moves it
    pub seq: u32,
}

/// Adjudicated dispute, kept on the ended game as evidence
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeRecord {
    pub guess_index: u32,
    pub upheld: bool,
}

/// Game aggregate - core domain entity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub id: u32,
    pub rules: GameRules,

    // Players and stake
    pub creator: Address,
    /// `None` for a public game, a reserved identity for a private one
    pub requested_opponent: Option<Address>,
    pub opponent: Option<Address>,
    pub stake: i128,
    pub stake_released: bool,

    // Lifecycle
    pub state: GameState,
    pub phase: TurnPhase,
    /// Bumped on every transition; stamps emitted events
    pub seq: u32,

    // Current turn
    pub code_maker: Option<Address>,
    pub code_breaker: Option<Address>,
    pub secret_hash: Option<CodeCommitment>,
    pub secret_code: Option<Bytes>,
    /// Reveal matched the commitment and is a well-formed code
    pub reveal_honest: bool,
    pub current_turn_guesses: Vec<Bytes>,
    pub current_turn_feedbacks: Vec<Feedback>,
    pub guesses_left: u32,
    pub turns_left: u32,

    // Scores
    pub creator_score: u32,
    pub opponent_score: u32,

    // Adjudication
    pub afk_accusation: Option<AfkAccusation>,
    pub dispute_record: Option<DisputeRecord>,
    pub outcome: GameOutcome,
    pub end_reason: Option<EndReason>,
}

impl Game {
    /// Creates a new game in Created state
    pub fn new(
        env: &Env,
        id: u32,
        creator: Address,
        requested_opponent: Option<Address>,
        stake: i128,
        rules: GameRules,
    ) -> Result<Self, DomainError> {
        if stake <= 0 {
            return Err(DomainError::InvalidStake);
        }
        if requested_opponent.as_ref() == Some(&creator) {
            return Err(DomainError::SelfPlay);
        }

        let guesses_left = rules.max_guesses;
        let turns_left = rules.max_turns;
        Ok(Self {
            id,
            rules,
            creator,
            requested_opponent,
            opponent: None,
            stake,
            stake_released: false,
            state: GameState::Created,
            phase: TurnPhase::AwaitingCommit,
            seq: 0,
            code_maker: None,
            code_breaker: None,
            secret_hash: None,
            secret_code: None,
            reveal_honest: false,
            current_turn_guesses: Vec::new(env),
            current_turn_feedbacks: Vec::new(env),
            guesses_left,
            turns_left,
            creator_score: 0,
            opponent_score: 0,
            afk_accusation: None,
            dispute_record: None,
            outcome: GameOutcome::Undecided,
            end_reason: None,
        })
    }

    /// Second player matches the stake
    pub fn join(&mut self, joiner: &Address, stake: i128) -> Result<(), DomainError> {
        self.ensure_not_ended()?;
        self.ensure_state(GameState::Created)?;

        if stake != self.stake {
            return Err(DomainError::StakeMismatch);
        }
        if *joiner == self.creator {
            return Err(DomainError::SelfPlay);
        }
        if let Some(reserved) = &self.requested_opponent {
            if reserved != joiner {
                return Err(DomainError::ReservedForAnotherOpponent);
            }
        }

        self.opponent = Some(joiner.clone());
        self.advance_state(GameState::Joined)?;
        self.bump_seq();
        Ok(())
    }

    /// Assigns roles (creator makes the first code) and opens the first turn
    pub fn start(&mut self, caller: &Address) -> Result<(), DomainError> {
        self.ensure_not_ended()?;
        self.ensure_state(GameState::Joined)?;
        let opponent = self.opponent.clone().ok_or(DomainError::WrongPhase)?;
        self.ensure_player(caller)?;

        self.advance_state(GameState::InProgress)?;
        self.code_maker = Some(self.creator.clone());
        self.code_breaker = Some(opponent);
        self.phase = TurnPhase::AwaitingCommit;
        self.guesses_left = self.rules.max_guesses;
        self.turns_left = self.rules.max_turns;
        self.creator_score = 0;
        self.opponent_score = 0;
        self.bump_seq();
        Ok(())
    }

    // Queries

    pub fn is_public(&self) -> bool {
        self.requested_opponent.is_none()
    }

    pub fn is_player(&self, who: &Address) -> bool {
        *who == self.creator || self.opponent.as_ref() == Some(who)
    }

    /// The other player, if `who` is one of the two
    pub fn counterpart_of(&self, who: &Address) -> Result<Address, DomainError> {
        let opponent = self.opponent.clone().ok_or(DomainError::NotPlayer)?;
        if *who == self.creator {
            Ok(opponent)
        } else if *who == opponent {
            Ok(self.creator.clone())
        } else {
            Err(DomainError::NotPlayer)
        }
    }

    /// Winning identity; `None` while undecided or on a draw
    pub fn winner(&self) -> Option<Address> {
        match self.outcome {
            GameOutcome::CreatorWins => Some(self.creator.clone()),
            GameOutcome::OpponentWins => self.opponent.clone(),
            GameOutcome::Undecided | GameOutcome::Draw => None,
        }
    }

    pub fn guesses_used(&self) -> u32 {
        self.current_turn_guesses.len()
    }

    pub fn code_maker(&self) -> Result<Address, DomainError> {
        self.code_maker.clone().ok_or(DomainError::WrongPhase)
    }

    pub fn code_breaker(&self) -> Result<Address, DomainError> {
        self.code_breaker.clone().ok_or(DomainError::WrongPhase)
    }

    // Settlement

    /// Flags the escrow as paid out; fails if that already happened.
    /// Settlement is its own transition, so it gets its own `seq`.
    pub fn mark_stake_released(&mut self) -> Result<(), DomainError> {
        self.ensure_state(GameState::Ended)?;
        if self.stake_released {
            return Err(DomainError::GameAlreadyEnded);
        }
        self.stake_released = true;
        self.bump_seq();
        Ok(())
    }

    // Transitions shared by the per-concern impls

    pub(crate) fn advance_state(&mut self, next: GameState) -> Result<(), DomainError> {
        if !self.state.can_advance_to(next) {
            return Err(DomainError::WrongPhase);
        }
        self.state = next;
        Ok(())
    }

    pub(crate) fn advance_phase(&mut self, next: TurnPhase) -> Result<(), DomainError> {
        if !self.phase.can_advance_to(next) {
            return Err(DomainError::WrongPhase);
        }
        self.phase = next;
        Ok(())
    }

    pub(crate) fn bump_seq(&mut self) {
        self.seq = self.seq.saturating_add(1);
    }

    pub(crate) fn outcome_for(&self, winner: &Address) -> GameOutcome {
        if *winner == self.creator {
            GameOutcome::CreatorWins
        } else {
            GameOutcome::OpponentWins
        }
    }

    /// Moves to Ended; callers have already validated the transition
    pub(crate) fn finish(&mut self, outcome: GameOutcome, reason: EndReason) -> Result<(), DomainError> {
        self.advance_state(GameState::Ended)?;
        self.outcome = outcome;
        self.end_reason = Some(reason);
        self.afk_accusation = None;
        self.bump_seq();
        Ok(())
    }

    // Validation helpers

    pub(crate) fn ensure_not_ended(&self) -> Result<(), DomainError> {
        if self.state == GameState::Ended {
            return Err(DomainError::GameAlreadyEnded);
        }
        Ok(())
    }

    pub(crate) fn ensure_state(&self, expected: GameState) -> Result<(), DomainError> {
        if self.state != expected {
            return Err(DomainError::WrongPhase);
        }
        Ok(())
    }

    /// Active game in the given turn phase
    pub(crate) fn ensure_phase(&self, expected: TurnPhase) -> Result<(), DomainError> {
        self.ensure_not_ended()?;
        self.ensure_state(GameState::InProgress)?;
        if self.phase != expected {
            return Err(DomainError::WrongPhase);
        }
        Ok(())
    }

    pub(crate) fn ensure_player(&self, who: &Address) -> Result<(), DomainError> {
        if !self.is_player(who) {
            return Err(DomainError::NotPlayer);
        }
        Ok(())
    }

    pub(crate) fn ensure_is_code_maker(&self, who: &Address) -> Result<(), DomainError> {
        if *who != self.code_maker()? {
            return Err(DomainError::WrongRole);
        }
        Ok(())
    }

    pub(crate) fn ensure_is_code_breaker(&self, who: &Address) -> Result<(), DomainError> {
        if *who != self.code_breaker()? {
            return Err(DomainError::WrongRole);
        }
        Ok(())
    }
}
