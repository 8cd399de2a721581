use soroban_sdk::{log, Env};

use crate::domain::{DomainError, Game, GameOutcome};
use crate::infrastructure::{GameHubGateway, StakeGateway};

use super::events::EvGameEnded;

/// Pays out the escrow of an ended game, exactly once
pub struct Settlement;

impl Settlement {
    /// No-op while the game is still running
    pub fn settle_if_ended(env: &Env, game: &mut Game) -> Result<(), DomainError> {
        if game.outcome == GameOutcome::Undecided {
            return Ok(());
        }
        game.mark_stake_released()?;

        let creator = game.creator.clone();
        let opponent = game.opponent.clone().ok_or(DomainError::NotPlayer)?;
        let pot = game.stake.checked_add(game.stake).ok_or(DomainError::InvalidStake)?;

        // Game Hub lifecycle: end_game before paying out.
        GameHubGateway::notify_game_ended(env, game.id, game.outcome == GameOutcome::CreatorWins)?;

        match game.outcome {
            GameOutcome::CreatorWins => StakeGateway::release(env, &creator, pot)?,
            GameOutcome::OpponentWins => StakeGateway::release(env, &opponent, pot)?,
            GameOutcome::Draw => {
                StakeGateway::release(env, &creator, game.stake)?;
                StakeGateway::release(env, &opponent, game.stake)?;
            }
            GameOutcome::Undecided => return Err(DomainError::WrongPhase),
        }

        log!(env, "game settled", game.id, game.stake);
        EvGameEnded {
            game_id: game.id,
            seq: game.seq,
            outcome: game.outcome,
            winner: game.winner(),
        }
        .publish(env);
        Ok(())
    }
}
