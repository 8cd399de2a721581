use soroban_sdk::Address;

use super::errors::DomainError;
use super::game::{AfkAccusation, EndReason, Game, GameState, TurnPhase};

/// How an enforced accusation resolved
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AfkResolution {
    /// Accused never acted; accuser wins the game
    Forfeited { winner: Address },
    /// Accused acted in time; accusation dropped
    Cleared,
}

impl Game {
    /// The player whose action the current phase is blocked on
    pub fn expected_actor(&self) -> Result<Address, DomainError> {
        self.ensure_not_ended()?;
        self.ensure_state(GameState::InProgress)?;
        match self.phase {
            TurnPhase::AwaitingCommit | TurnPhase::Feedback | TurnPhase::Reveal => self.code_maker(),
            TurnPhase::Guess | TurnPhase::AwaitingDispute => self.code_breaker(),
        }
    }

    /// Whether an accusation exists and the accused has not acted since
    pub fn accusation_pending(&self) -> bool {
        self.afk_accusation
            .as_ref()
            .map(|a| a.seq == self.seq)
            .unwrap_or(false)
    }

    /// Starts the liveness clock against the player blocking progress
    pub fn start_accuse_afk(
        &mut self,
        accuser: &Address,
        accused: &Address,
        now: u64,
    ) -> Result<AfkAccusation, DomainError> {
        let blocking = self.expected_actor()?;
        self.ensure_player(accuser)?;
        if self.accusation_pending() {
            return Err(DomainError::AccusationAlreadyActive);
        }
        if *accused != blocking || self.counterpart_of(accuser)? != blocking {
            return Err(DomainError::WrongRole);
        }

        self.bump_seq();
        let accusation = AfkAccusation {
            accuser: accuser.clone(),
            accused: accused.clone(),
            deadline: now.saturating_add(self.rules.afk_timeout_secs),
            seq: self.seq,
        };
        self.afk_accusation = Some(accusation.clone());
        Ok(accusation)
    }

    /// Enforces the outstanding accusation once its deadline has passed
    pub fn end_accuse_afk(&mut self, caller: &Address, now: u64) -> Result<AfkResolution, DomainError> {
        self.ensure_not_ended()?;
        self.ensure_player(caller)?;
        let accusation = self
            .afk_accusation
            .clone()
            .ok_or(DomainError::NoActiveAccusation)?;
        if now < accusation.deadline {
            return Err(DomainError::TooEarly);
        }

        if self.accusation_pending() {
            let outcome = self.outcome_for(&accusation.accuser);
            self.finish(outcome, EndReason::Abandoned)?;
            Ok(AfkResolution::Forfeited {
                winner: accusation.accuser,
            })
        } else {
            self.afk_accusation = None;
            self.bump_seq();
            Ok(AfkResolution::Cleared)
        }
    }
}
