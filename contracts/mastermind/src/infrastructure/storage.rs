use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::domain::{DomainError, Game, GameRules};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Game state by game ID
    Game(u32),
    /// Last allocated game ID
    GameCounter,
    /// Public games waiting for an opponent
    OpenGames,
    /// Game Hub contract address
    GameHubAddress,
    /// Token the stakes are paid in
    TokenAddress,
    /// Rules applied to newly created games
    Rules,
    /// Admin address
    Admin,
}

/// Matchmaking index entry; carries the creator so picks never load games
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenGame {
    pub game_id: u32,
    pub creator: Address,
}

/// TTL for game storage (~30 days)
pub const GAME_TTL_LEDGERS: u32 = 518_400;

/// Repository pattern for game persistence
pub struct GameRepository;

impl GameRepository {
    /// Loads a game from storage
    pub fn load(env: &Env, game_id: u32) -> Result<Game, DomainError> {
        env.storage()
            .persistent()
            .get(&DataKey::Game(game_id))
            .ok_or(DomainError::GameNotFound)
    }

    /// Saves a game to storage with TTL extension
    pub fn save(env: &Env, game: &Game) {
        let key = DataKey::Game(game.id);
        env.storage().persistent().set(&key, game);
        env.storage()
            .persistent()
            .extend_ttl(&key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
        env.storage()
            .instance()
            .extend_ttl(GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }

    /// Allocates the next game ID (starts at 1, never reused)
    pub fn next_id(env: &Env) -> Result<u32, DomainError> {
        let last: u32 = env
            .storage()
            .instance()
            .get(&DataKey::GameCounter)
            .unwrap_or(0);
        let id = last.checked_add(1).ok_or(DomainError::GameIdsExhausted)?;
        env.storage().instance().set(&DataKey::GameCounter, &id);
        Ok(id)
    }
}

/// Index of public games in Created state, used by matchmaking
pub struct OpenGamesRepository;

impl OpenGamesRepository {
    pub fn list(env: &Env) -> Vec<OpenGame> {
        env.storage()
            .persistent()
            .get(&DataKey::OpenGames)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn ids(env: &Env) -> Vec<u32> {
        let mut ids = Vec::new(env);
        for entry in Self::list(env).iter() {
            ids.push_back(entry.game_id);
        }
        ids
    }

    pub fn insert(env: &Env, game_id: u32, creator: &Address) {
        let mut open = Self::list(env);
        if Self::position(&open, game_id).is_none() {
            open.push_back(OpenGame {
                game_id,
                creator: creator.clone(),
            });
        }
        Self::store(env, &open);
    }

    pub fn remove(env: &Env, game_id: u32) {
        let mut open = Self::list(env);
        if let Some(index) = Self::position(&open, game_id) {
            open.remove(index);
            Self::store(env, &open);
        }
    }

    fn position(open: &Vec<OpenGame>, game_id: u32) -> Option<u32> {
        open.iter()
            .position(|entry| entry.game_id == game_id)
            .map(|index| index as u32)
    }

    fn store(env: &Env, open: &Vec<OpenGame>) {
        env.storage().persistent().set(&DataKey::OpenGames, open);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::OpenGames, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }
}

/// Repository for admin configuration
pub struct AdminRepository;

impl AdminRepository {
    pub fn get_admin(env: &Env) -> Result<Address, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(DomainError::NotConfigured)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_game_hub(env: &Env) -> Result<Address, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::GameHubAddress)
            .ok_or(DomainError::NotConfigured)
    }

    pub fn set_game_hub(env: &Env, address: &Address) {
        env.storage()
            .instance()
            .set(&DataKey::GameHubAddress, address);
    }

    pub fn get_token(env: &Env) -> Result<Address, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::TokenAddress)
            .ok_or(DomainError::NotConfigured)
    }

    pub fn set_token(env: &Env, address: &Address) {
        env.storage().instance().set(&DataKey::TokenAddress, address);
    }

    pub fn get_rules(env: &Env) -> GameRules {
        env.storage()
            .instance()
            .get(&DataKey::Rules)
            .unwrap_or_else(|| GameRules::standard(env))
    }

    pub fn install_default_rules(env: &Env) {
        env.storage()
            .instance()
            .set(&DataKey::Rules, &GameRules::standard(env));
    }

    pub fn set_rules(env: &Env, rules: &GameRules) -> Result<(), DomainError> {
        rules.validate()?;
        env.storage().instance().set(&DataKey::Rules, rules);
        Ok(())
    }
}
