use soroban_sdk::{contractclient, token, Address, Env};

use crate::domain::DomainError;

use super::storage::AdminRepository;

/// Game Hub contract interface
#[allow(dead_code)] // Trait is used by contractclient macro
#[contractclient(name = "GameHubClient")]
pub trait GameHubContract {
    fn start_game(
        env: Env,
        game_id: Address,
        session_id: u32,
        player1: Address,
        player2: Address,
        player1_points: i128,
        player2_points: i128,
    );

    fn end_game(env: Env, session_id: u32, player1_won: bool);
}

/// Gateway for interacting with Game Hub
pub struct GameHubGateway;

impl GameHubGateway {
    /// Notifies Game Hub that a game has started (creator is player 1)
    pub fn notify_game_started(
        env: &Env,
        game_id: u32,
        creator: &Address,
        opponent: &Address,
        stake: i128,
    ) -> Result<(), DomainError> {
        let hub_addr = AdminRepository::get_game_hub(env)?;
        let hub = GameHubClient::new(env, &hub_addr);

        hub.start_game(
            &env.current_contract_address(),
            &game_id,
            creator,
            opponent,
            &stake,
            &stake,
        );
        Ok(())
    }

    /// Notifies Game Hub that a game has ended
    pub fn notify_game_ended(env: &Env, game_id: u32, creator_won: bool) -> Result<(), DomainError> {
        let hub_addr = AdminRepository::get_game_hub(env)?;
        let hub = GameHubClient::new(env, &hub_addr);

        hub.end_game(&game_id, &creator_won);
        Ok(())
    }
}

/// Gateway for the stake escrow held by this contract
pub struct StakeGateway;

impl StakeGateway {
    /// Moves `amount` from `player` into escrow
    pub fn deposit(env: &Env, player: &Address, amount: i128) -> Result<(), DomainError> {
        let token_addr = AdminRepository::get_token(env)?;
        let token = token::Client::new(env, &token_addr);

        token.transfer(player, &env.current_contract_address(), &amount);
        Ok(())
    }

    /// Pays `amount` out of escrow to `recipient`
    pub fn release(env: &Env, recipient: &Address, amount: i128) -> Result<(), DomainError> {
        if amount <= 0 {
            return Ok(());
        }
        let token_addr = AdminRepository::get_token(env)?;
        let token = token::Client::new(env, &token_addr);

        token.transfer(&env.current_contract_address(), recipient, &amount);
        Ok(())
    }
}
