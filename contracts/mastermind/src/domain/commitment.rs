use soroban_sdk::{Address, Bytes, Env};

use super::code::{commitment_of, Code, CodeCommitment};
use super::errors::DomainError;
use super::game::{Game, TurnPhase};

/// What the reveal proved about the code-maker
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealCheck {
    /// keccak256(code || salt) equals the stored commitment
    pub matches_commitment: bool,
    /// Commitment matched and the revealed code is well formed
    pub honest: bool,
}

impl Game {
    /// Code-maker binds themselves to this turn's secret
    pub fn commit_code(&mut self, caller: &Address, hash: CodeCommitment) -> Result<(), DomainError> {
        self.ensure_phase(TurnPhase::AwaitingCommit)?;
        self.ensure_is_code_maker(caller)?;

        self.advance_phase(TurnPhase::Guess)?;
        self.secret_hash = Some(hash);
        self.bump_seq();
        Ok(())
    }

    /// Code-maker opens the commitment once the turn's guessing is over.
    ///
    /// A mismatch is not an error: the plaintext is recorded as evidence and
    /// any later dispute on this turn goes to the code-breaker.
    pub fn reveal_code(
        &mut self,
        env: &Env,
        caller: &Address,
        code: Bytes,
        salt: &Bytes,
    ) -> Result<RevealCheck, DomainError> {
        self.ensure_phase(TurnPhase::Reveal)?;
        self.ensure_is_code_maker(caller)?;
        let committed = self.secret_hash.clone().ok_or(DomainError::WrongPhase)?;

        let matches_commitment = commitment_of(env, &code, salt) == committed;
        let well_formed = Code::parse(&self.rules, &code).is_ok();
        let check = RevealCheck {
            matches_commitment,
            honest: matches_commitment && well_formed,
        };

        self.advance_phase(TurnPhase::AwaitingDispute)?;
        self.secret_hash = None;
        self.secret_code = Some(code);
        self.reveal_honest = check.honest;
        self.bump_seq();
        Ok(check)
    }
}
