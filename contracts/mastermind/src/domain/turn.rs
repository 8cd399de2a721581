use soroban_sdk::{Address, Bytes, Env, Vec};

use super::code::Code;
use super::errors::DomainError;
use super::feedback::Feedback;
use super::game::{EndReason, Game, GameOutcome, TurnPhase};

/// Where the turn stands after a feedback
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnProgress {
    /// Breaker may guess again
    Continue,
    /// Breaker cracked the code; maker must reveal
    Solved,
    /// Breaker ran out of guesses; maker must reveal
    Exhausted,
}

impl TurnProgress {
    pub fn awaits_reveal(&self) -> bool {
        !matches!(self, TurnProgress::Continue)
    }
}

/// Score bookkeeping for a completed turn
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TurnSummary {
    pub code_breaker: Address,
    pub points: u32,
    pub turns_left: u32,
    pub game_over: bool,
}

impl Game {
    /// Code-breaker submits a guess; returns its index in the turn
    pub fn make_guess(&mut self, caller: &Address, guess: Bytes) -> Result<u32, DomainError> {
        self.ensure_phase(TurnPhase::Guess)?;
        self.ensure_is_code_breaker(caller)?;
        if self.guesses_left == 0 {
            return Err(DomainError::WrongPhase);
        }
        Code::parse(&self.rules, &guess)?;

        self.advance_phase(TurnPhase::Feedback)?;
        let index = self.current_turn_guesses.len();
        self.current_turn_guesses.push_back(guess);
        self.guesses_left -= 1;
        self.bump_seq();
        Ok(index)
    }

    /// Code-maker scores the pending guess
    pub fn give_feedback(
        &mut self,
        caller: &Address,
        exact: u32,
        color_only: u32,
    ) -> Result<TurnProgress, DomainError> {
        self.ensure_phase(TurnPhase::Feedback)?;
        self.ensure_is_code_maker(caller)?;
        let feedback = Feedback::claimed(exact, color_only, self.rules.code_length)?;

        let progress = if feedback.is_solved(self.rules.code_length) {
            TurnProgress::Solved
        } else if self.guesses_left == 0 {
            TurnProgress::Exhausted
        } else {
            TurnProgress::Continue
        };

        let next = if progress.awaits_reveal() {
            TurnPhase::Reveal
        } else {
            TurnPhase::Guess
        };
        self.advance_phase(next)?;
        self.current_turn_feedbacks.push_back(feedback);
        self.bump_seq();
        Ok(progress)
    }

    /// Whether the last recorded feedback claims the code was cracked
    pub fn turn_solved(&self) -> bool {
        self.current_turn_feedbacks
            .last()
            .map(|f| f.is_solved(self.rules.code_length))
            .unwrap_or(false)
    }

    /// Credits the breaker, burns a turn and either ends the game or swaps
    /// roles for the next turn. Caller has validated phase and role.
    pub(crate) fn complete_turn(&mut self, env: &Env) -> Result<TurnSummary, DomainError> {
        let maker = self.code_maker()?;
        let breaker = self.code_breaker()?;
        let points = self
            .rules
            .turn_score(self.guesses_used(), self.turn_solved());

        if breaker == self.creator {
            self.creator_score = self.creator_score.saturating_add(points);
        } else {
            self.opponent_score = self.opponent_score.saturating_add(points);
        }
        self.turns_left = self.turns_left.saturating_sub(1);

        let game_over = self.turns_left == 0;
        if game_over {
            let outcome = if self.creator_score > self.opponent_score {
                GameOutcome::CreatorWins
            } else if self.opponent_score > self.creator_score {
                GameOutcome::OpponentWins
            } else {
                GameOutcome::Draw
            };
            self.finish(outcome, EndReason::TurnsExhausted)?;
        } else {
            self.advance_phase(TurnPhase::AwaitingCommit)?;
            self.code_maker = Some(breaker.clone());
            self.code_breaker = Some(maker);
            self.guesses_left = self.rules.max_guesses;
            self.secret_hash = None;
            self.secret_code = None;
            self.reveal_honest = false;
            self.current_turn_guesses = Vec::new(env);
            self.current_turn_feedbacks = Vec::new(env);
            self.bump_seq();
        }

        Ok(TurnSummary {
            code_breaker: breaker,
            points,
            turns_left: self.turns_left,
            game_over,
        })
    }
}
