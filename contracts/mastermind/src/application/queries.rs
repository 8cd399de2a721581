use soroban_sdk::{Address, Bytes, Env, Vec};

use crate::domain::{DomainError, Game, GameOutcome, GameRules};
use crate::infrastructure::{AdminRepository, GameRepository, OpenGamesRepository};

/// Query: Get game state
pub struct GetGameQuery;

impl GetGameQuery {
    pub fn execute(env: &Env, game_id: u32) -> Result<Game, DomainError> {
        GameRepository::load(env, game_id)
    }
}

/// Query: Get the rules new games will use
pub struct GetRulesQuery;

impl GetRulesQuery {
    pub fn execute(env: &Env) -> GameRules {
        AdminRepository::get_rules(env)
    }
}

/// Query: Guesses left in the current turn and turns left in the game
pub struct GetGuessesAndTurnsLeftQuery;

impl GetGuessesAndTurnsLeftQuery {
    pub fn execute(env: &Env, game_id: u32) -> Result<(u32, u32), DomainError> {
        let game = GameRepository::load(env, game_id)?;
        Ok((game.guesses_left, game.turns_left))
    }
}

/// Query: (creator score, opponent score)
pub struct GetScoresQuery;

impl GetScoresQuery {
    pub fn execute(env: &Env, game_id: u32) -> Result<(u32, u32), DomainError> {
        let game = GameRepository::load(env, game_id)?;
        Ok((game.creator_score, game.opponent_score))
    }
}

pub struct GetOutcomeQuery;

impl GetOutcomeQuery {
    pub fn execute(env: &Env, game_id: u32) -> Result<GameOutcome, DomainError> {
        Ok(GameRepository::load(env, game_id)?.outcome)
    }
}

/// Query: Winner of an ended game.
///
/// `None` until the game is decided, and on a draw. Clients poll this.
pub struct GetWinnerQuery;

impl GetWinnerQuery {
    pub fn execute(env: &Env, game_id: u32) -> Result<Option<Address>, DomainError> {
        Ok(GameRepository::load(env, game_id)?.winner())
    }
}

pub struct OpenGamesQuery;

impl OpenGamesQuery {
    pub fn execute(env: &Env) -> Vec<u32> {
        OpenGamesRepository::ids(env)
    }
}

/// Query: Pick a public game still waiting for an opponent.
///
/// Reads only the open-games index; joined games leave the index on join.
pub struct RandomOpenGameQuery;

impl RandomOpenGameQuery {
    pub fn execute(env: &Env, caller: &Address, seed: u64) -> Result<u32, DomainError> {
        let open = OpenGamesRepository::list(env);
        if open.is_empty() {
            return Err(DomainError::NoOpenGames);
        }

        let mut candidates: Vec<u32> = Vec::new(env);
        for entry in open.iter() {
            if entry.creator != *caller {
                candidates.push_back(entry.game_id);
            }
        }
        if candidates.is_empty() {
            return Err(DomainError::SelfPlay);
        }

        let pick = Self::draw(env, seed) % candidates.len();
        candidates.get(pick).ok_or(DomainError::NoOpenGames)
    }

    /// keccak256(seed || ledger sequence), first four bytes big-endian
    fn draw(env: &Env, seed: u64) -> u32 {
        let mut material = Bytes::from_array(env, &seed.to_be_bytes());
        material.extend_from_array(&env.ledger().sequence().to_be_bytes());
        let digest = env.crypto().keccak256(&material).to_array();
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}
