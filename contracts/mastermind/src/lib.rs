#![no_std]

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use application::{DisputeVerdict, FeedbackResult};
pub use domain::{
    commitment_of, AfkAccusation, DisputeRecord, DomainError as Error, EndReason, Feedback, Game,
    GameOutcome, GameRules, GameState, TurnPhase,
};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};

use application::{
    AcceptRevealCommand, CommitCodeCommand, CreateGameCommand, DisputeCommand,
    EndAccuseAfkCommand, FeedbackCommand, GetGameQuery, GetGuessesAndTurnsLeftQuery,
    GetOutcomeQuery, GetRulesQuery, GetScoresQuery, GetWinnerQuery, GuessCommand,
    JoinGameCommand, OpenGamesQuery, RandomOpenGameQuery, RevealCodeCommand,
    StartAccuseAfkCommand, StartGameCommand,
};
use infrastructure::AdminRepository;

#[contract]
pub struct MastermindContract;

#[contractimpl]
impl MastermindContract {
    /// Initialize contract with admin, game hub, and stake token addresses
    pub fn __constructor(env: Env, admin: Address, game_hub: Address, token: Address) {
        AdminRepository::set_admin(&env, &admin);
        AdminRepository::set_game_hub(&env, &game_hub);
        AdminRepository::set_token(&env, &token);
        AdminRepository::install_default_rules(&env);
    }

    // ==================== Lobby ====================

    /// Open a game and escrow `stake`. `opponent` reserves the seat; `None` is public.
    pub fn create_game(
        env: Env,
        creator: Address,
        opponent: Option<Address>,
        stake: i128,
    ) -> Result<u32, Error> {
        CreateGameCommand::execute(&env, creator, opponent, stake)
    }

    /// Take the free seat by matching the stake
    pub fn join_game(env: Env, game_id: u32, player: Address, stake: i128) -> Result<(), Error> {
        JoinGameCommand::execute(&env, game_id, player, stake)
    }

    /// Either player starts a joined game; the creator makes the first code
    pub fn start_game(env: Env, game_id: u32, player: Address) -> Result<(), Error> {
        StartGameCommand::execute(&env, game_id, player)
    }

    // ==================== Turn ====================

    /// Code-maker commits keccak256(code || salt)
    pub fn commit_secret_code(
        env: Env,
        game_id: u32,
        code_maker: Address,
        hash: BytesN<32>,
    ) -> Result<(), Error> {
        CommitCodeCommand::execute(&env, game_id, code_maker, hash)
    }

    /// Code-breaker guesses; returns `true` once feedback is pending
    pub fn make_guess(
        env: Env,
        game_id: u32,
        code_breaker: Address,
        guess: Bytes,
    ) -> Result<bool, Error> {
        GuessCommand::execute(&env, game_id, code_breaker, guess)
    }

    pub fn give_feedback(
        env: Env,
        game_id: u32,
        code_maker: Address,
        exact: u32,
        color_only: u32,
    ) -> Result<FeedbackResult, Error> {
        FeedbackCommand::execute(&env, game_id, code_maker, exact, color_only)
    }

    /// Code-maker opens the commitment; pass an empty `salt` for a plain hash
    pub fn reveal_code(
        env: Env,
        game_id: u32,
        code_maker: Address,
        code: Bytes,
        salt: Bytes,
    ) -> Result<(), Error> {
        RevealCodeCommand::execute(&env, game_id, code_maker, code, salt)
    }

    /// Challenge the feedback given for `guess_index`; ends the game
    pub fn dispute(
        env: Env,
        game_id: u32,
        code_breaker: Address,
        guess_index: u32,
    ) -> Result<DisputeVerdict, Error> {
        DisputeCommand::execute(&env, game_id, code_breaker, guess_index)
    }

    /// Accept the reveal and close the turn
    pub fn dont_dispute(env: Env, game_id: u32, code_breaker: Address) -> Result<(), Error> {
        AcceptRevealCommand::execute(&env, game_id, code_breaker)
    }

    // ==================== Liveness ====================

    pub fn start_accuse_afk(
        env: Env,
        game_id: u32,
        accuser: Address,
        accused: Address,
    ) -> Result<(), Error> {
        StartAccuseAfkCommand::execute(&env, game_id, accuser, accused)
    }

    /// Returns `true` when the accused forfeited
    pub fn end_accuse_afk(env: Env, game_id: u32, player: Address) -> Result<bool, Error> {
        EndAccuseAfkCommand::execute(&env, game_id, player)
    }

    // ==================== Queries ====================

    /// Get current game state
    pub fn get_game(env: Env, game_id: u32) -> Result<Game, Error> {
        GetGameQuery::execute(&env, game_id)
    }

    /// (guesses left this turn, turns left this game)
    pub fn get_guesses_and_turns_left(env: Env, game_id: u32) -> Result<(u32, u32), Error> {
        GetGuessesAndTurnsLeftQuery::execute(&env, game_id)
    }

    /// (creator score, opponent score)
    pub fn get_scores(env: Env, game_id: u32) -> Result<(u32, u32), Error> {
        GetScoresQuery::execute(&env, game_id)
    }

    pub fn get_outcome(env: Env, game_id: u32) -> Result<GameOutcome, Error> {
        GetOutcomeQuery::execute(&env, game_id)
    }

    /// `None` until decided, and on a draw
    pub fn get_winner(env: Env, game_id: u32) -> Result<Option<Address>, Error> {
        GetWinnerQuery::execute(&env, game_id)
    }

    pub fn get_open_games(env: Env) -> Vec<u32> {
        OpenGamesQuery::execute(&env)
    }

    /// Matchmaking: a public game waiting for a second player, not created by `player`
    pub fn get_random_game_with_one_player(
        env: Env,
        player: Address,
        seed: u64,
    ) -> Result<u32, Error> {
        RandomOpenGameQuery::execute(&env, &player, seed)
    }

    /// Rules applied to newly created games
    pub fn get_rules(env: Env) -> GameRules {
        GetRulesQuery::execute(&env)
    }

    /// Admitted color symbols, one ASCII byte each
    pub fn get_colors(env: Env) -> Bytes {
        GetRulesQuery::execute(&env).colors
    }

    // ==================== Admin Functions ====================

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        AdminRepository::get_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = AdminRepository::get_admin(&env)?;
        admin.require_auth();
        AdminRepository::set_admin(&env, &new_admin);
        Ok(())
    }

    pub fn get_hub(env: Env) -> Result<Address, Error> {
        AdminRepository::get_game_hub(&env)
    }

    pub fn set_hub(env: Env, new_hub: Address) -> Result<(), Error> {
        let admin = AdminRepository::get_admin(&env)?;
        admin.require_auth();
        AdminRepository::set_game_hub(&env, &new_hub);
        Ok(())
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        AdminRepository::get_token(&env)
    }

    /// Replace the rules for games created from now on
    pub fn set_rules(env: Env, rules: GameRules) -> Result<(), Error> {
        let admin = AdminRepository::get_admin(&env)?;
        admin.require_auth();
        AdminRepository::set_rules(&env, &rules)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin = AdminRepository::get_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
