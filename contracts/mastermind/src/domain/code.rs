use soroban_sdk::{Bytes, BytesN, Env};

use super::errors::DomainError;
use super::rules::GameRules;

/// Longest code the rules may configure
pub const MAX_CODE_LENGTH: u32 = 8;

/// Largest palette the rules may configure
pub const MAX_COLORS: u32 = 16;

/// Commitment to a secret code: keccak256(code || salt)
pub type CodeCommitment = BytesN<32>;

/// A validated sequence of color symbols (a secret or a guess)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Code {
    pegs: [u8; MAX_CODE_LENGTH as usize],
    len: usize,
}

impl Code {
    /// Parses `raw`, rejecting wrong lengths and symbols outside the palette
    pub fn parse(rules: &GameRules, raw: &Bytes) -> Result<Self, DomainError> {
        if raw.len() != rules.code_length || raw.len() > MAX_CODE_LENGTH {
            return Err(DomainError::InvalidCode);
        }

        let len = raw.len() as usize;
        let mut pegs = [0u8; MAX_CODE_LENGTH as usize];
        raw.copy_into_slice(&mut pegs[..len]);

        let palette_len = rules.colors.len().min(MAX_COLORS) as usize;
        let mut palette = [0u8; MAX_COLORS as usize];
        rules
            .colors
            .slice(0..palette_len as u32)
            .copy_into_slice(&mut palette[..palette_len]);

        Self::from_slice(&pegs[..len], &palette[..palette_len])
    }

    /// Slice-level constructor shared by `parse` and the unit tests
    pub fn from_slice(pegs: &[u8], palette: &[u8]) -> Result<Self, DomainError> {
        if pegs.is_empty() || pegs.len() > MAX_CODE_LENGTH as usize {
            return Err(DomainError::InvalidCode);
        }
        if pegs.iter().any(|peg| !palette.contains(peg)) {
            return Err(DomainError::InvalidCode);
        }

        let mut buf = [0u8; MAX_CODE_LENGTH as usize];
        buf[..pegs.len()].copy_from_slice(pegs);
        Ok(Self {
            pegs: buf,
            len: pegs.len(),
        })
    }

    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..self.len]
    }
}

/// Builds the commitment a code-maker publishes before the turn starts.
///
/// An empty salt yields plain keccak256(code).
pub fn commitment_of(env: &Env, code: &Bytes, salt: &Bytes) -> CodeCommitment {
    let mut preimage = code.clone();
    preimage.append(salt);
    env.crypto().keccak256(&preimage).into()
}
