use soroban_sdk::{log, Address, Bytes, BytesN, Env};

use crate::domain::{AfkResolution, DomainError, Game};
use crate::infrastructure::{
    AdminRepository, GameHubGateway, GameRepository, OpenGamesRepository, StakeGateway,
};

use super::dto::{DisputeVerdict, FeedbackResult};
use super::events::{
    EvAfkAccusation, EvAfkResolved, EvCodeCommitted, EvCodeGuessed, EvCodeGuessedSuccessfully,
    EvCodeGuessedUnsuccessfully, EvCodeRevealed, EvDisputeVerdict, EvGameCreated, EvGameJoined,
    EvGameStarted, EvTurnCompleted,
};
use super::settlement::Settlement;

/// Command: Create a game and escrow the creator's stake
pub struct CreateGameCommand;

impl CreateGameCommand {
    pub fn execute(
        env: &Env,
        creator: Address,
        opponent: Option<Address>,
        stake: i128,
    ) -> Result<u32, DomainError> {
        creator.require_auth();

        let rules = AdminRepository::get_rules(env);
        let game_id = GameRepository::next_id(env)?;
        let game = Game::new(env, game_id, creator.clone(), opponent.clone(), stake, rules)?;

        StakeGateway::deposit(env, &creator, stake)?;
        GameRepository::save(env, &game);
        if game.is_public() {
            OpenGamesRepository::insert(env, game_id, &game.creator);
        }

        log!(env, "game created", game_id, stake);
        EvGameCreated {
            game_id,
            seq: game.seq,
            creator,
            opponent,
            stake,
        }
        .publish(env);
        Ok(game_id)
    }
}

/// Command: Join a game by matching its stake
pub struct JoinGameCommand;

impl JoinGameCommand {
    pub fn execute(env: &Env, game_id: u32, joiner: Address, stake: i128) -> Result<(), DomainError> {
        joiner.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        game.join(&joiner, stake)?;

        StakeGateway::deposit(env, &joiner, stake)?;
        GameRepository::save(env, &game);
        OpenGamesRepository::remove(env, game_id);

        EvGameJoined {
            game_id,
            seq: game.seq,
            opponent: joiner,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Assign roles and open the first turn
pub struct StartGameCommand;

impl StartGameCommand {
    pub fn execute(env: &Env, game_id: u32, caller: Address) -> Result<(), DomainError> {
        caller.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        game.start(&caller)?;

        let opponent = game.opponent.clone().ok_or(DomainError::NotPlayer)?;
        GameHubGateway::notify_game_started(env, game_id, &game.creator, &opponent, game.stake)?;
        GameRepository::save(env, &game);

        EvGameStarted {
            game_id,
            seq: game.seq,
            code_maker: game.code_maker()?,
            code_breaker: game.code_breaker()?,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Commit the hash of this turn's secret code
pub struct CommitCodeCommand;

impl CommitCodeCommand {
    pub fn execute(
        env: &Env,
        game_id: u32,
        code_maker: Address,
        hash: BytesN<32>,
    ) -> Result<(), DomainError> {
        code_maker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        game.commit_code(&code_maker, hash.clone())?;
        GameRepository::save(env, &game);

        EvCodeCommitted {
            game_id,
            seq: game.seq,
            code_maker,
            hash,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Submit a guess
pub struct GuessCommand;

impl GuessCommand {
    /// Returns `true`: the guess now awaits feedback
    pub fn execute(
        env: &Env,
        game_id: u32,
        code_breaker: Address,
        guess: Bytes,
    ) -> Result<bool, DomainError> {
        code_breaker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let guess_index = game.make_guess(&code_breaker, guess.clone())?;
        GameRepository::save(env, &game);

        EvCodeGuessed {
            game_id,
            seq: game.seq,
            guess,
            guess_index,
            guesses_left: game.guesses_left,
        }
        .publish(env);
        Ok(true)
    }
}

/// Command: Score the pending guess
pub struct FeedbackCommand;

impl FeedbackCommand {
    pub fn execute(
        env: &Env,
        game_id: u32,
        code_maker: Address,
        exact: u32,
        color_only: u32,
    ) -> Result<FeedbackResult, DomainError> {
        code_maker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let progress = game.give_feedback(&code_maker, exact, color_only)?;
        GameRepository::save(env, &game);

        let guess_index = game.guesses_used() - 1;
        let solved = game.turn_solved();
        if solved {
            EvCodeGuessedSuccessfully {
                game_id,
                seq: game.seq,
                guess_index,
            }
            .publish(env);
        } else {
            EvCodeGuessedUnsuccessfully {
                game_id,
                seq: game.seq,
                guess_index,
                exact,
                color_only,
                guesses_left: game.guesses_left,
            }
            .publish(env);
        }

        Ok(FeedbackResult {
            guess_index,
            solved,
            awaiting_reveal: progress.awaits_reveal(),
            guesses_left: game.guesses_left,
        })
    }
}

/// Command: Open the commitment at the end of the turn
pub struct RevealCodeCommand;

impl RevealCodeCommand {
    pub fn execute(
        env: &Env,
        game_id: u32,
        code_maker: Address,
        code: Bytes,
        salt: Bytes,
    ) -> Result<(), DomainError> {
        code_maker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let check = game.reveal_code(env, &code_maker, code.clone(), &salt)?;
        GameRepository::save(env, &game);

        if !check.honest {
            log!(env, "reveal does not open commitment", game_id);
        }
        EvCodeRevealed {
            game_id,
            seq: game.seq,
            code,
            matches_commitment: check.matches_commitment,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Challenge a feedback of the revealed turn
pub struct DisputeCommand;

impl DisputeCommand {
    pub fn execute(
        env: &Env,
        game_id: u32,
        code_breaker: Address,
        guess_index: u32,
    ) -> Result<DisputeVerdict, DomainError> {
        code_breaker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let ruling = game.dispute(&code_breaker, guess_index)?;

        EvDisputeVerdict {
            game_id,
            seq: game.seq,
            guess_index,
            upheld: ruling.upheld,
            winner: ruling.winner.clone(),
        }
        .publish(env);

        Settlement::settle_if_ended(env, &mut game)?;
        GameRepository::save(env, &game);

        Ok(DisputeVerdict {
            game_id,
            guess_index,
            upheld: ruling.upheld,
            recorded: ruling.recorded,
            recomputed: ruling.recomputed,
            winner: ruling.winner,
        })
    }
}

/// Command: Accept the revealed code and close the turn
pub struct AcceptRevealCommand;

impl AcceptRevealCommand {
    pub fn execute(env: &Env, game_id: u32, code_breaker: Address) -> Result<(), DomainError> {
        code_breaker.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let summary = game.accept_reveal(env, &code_breaker)?;

        EvTurnCompleted {
            game_id,
            seq: game.seq,
            code_breaker: summary.code_breaker,
            points: summary.points,
            creator_score: game.creator_score,
            opponent_score: game.opponent_score,
            turns_left: summary.turns_left,
        }
        .publish(env);

        if summary.game_over {
            Settlement::settle_if_ended(env, &mut game)?;
        }
        GameRepository::save(env, &game);
        Ok(())
    }
}

/// Command: Start the liveness clock against the stalling player
pub struct StartAccuseAfkCommand;

impl StartAccuseAfkCommand {
    pub fn execute(
        env: &Env,
        game_id: u32,
        accuser: Address,
        accused: Address,
    ) -> Result<(), DomainError> {
        accuser.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let accusation = game.start_accuse_afk(&accuser, &accused, env.ledger().timestamp())?;
        GameRepository::save(env, &game);

        EvAfkAccusation {
            game_id,
            seq: game.seq,
            accuser,
            accused,
            deadline: accusation.deadline,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Enforce an accusation after its deadline
pub struct EndAccuseAfkCommand;

impl EndAccuseAfkCommand {
    /// Returns `true` when the accused forfeited the game
    pub fn execute(env: &Env, game_id: u32, caller: Address) -> Result<bool, DomainError> {
        caller.require_auth();

        let mut game = GameRepository::load(env, game_id)?;
        let resolution = game.end_accuse_afk(&caller, env.ledger().timestamp())?;
        let forfeited = matches!(resolution, AfkResolution::Forfeited { .. });

        EvAfkResolved {
            game_id,
            seq: game.seq,
            forfeited,
        }
        .publish(env);

        if forfeited {
            Settlement::settle_if_ended(env, &mut game)?;
        }
        GameRepository::save(env, &game);
        Ok(forfeited)
    }
}
