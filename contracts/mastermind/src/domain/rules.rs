use soroban_sdk::{contracttype, Bytes, Env};

use super::code::{MAX_CODE_LENGTH, MAX_COLORS};
use super::errors::DomainError;

/// Pegs per code
pub const DEFAULT_CODE_LENGTH: u32 = 4;

/// Red, Green, Blue, Yellow, blacK, White
pub const DEFAULT_COLORS: &[u8; 6] = b"RGBYKW";

/// Guesses the code-breaker gets per turn
pub const DEFAULT_MAX_GUESSES: u32 = 6;

/// Turns per game; each player makes the code once
pub const DEFAULT_MAX_TURNS: u32 = 2;

/// Window an accused player has to act before forfeiting (~5 minutes)
pub const DEFAULT_AFK_TIMEOUT_SECS: u64 = 300;

/// Extra points for cracking a code on the first guess
pub const DEFAULT_FIRST_GUESS_BONUS: u32 = 3;

const MAX_GUESSES_LIMIT: u32 = 32;
const MAX_TURNS_LIMIT: u32 = 32;

/// Game rules (configuration snapshot, copied into every game at creation)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRules {
    pub code_length: u32,
    pub colors: Bytes,
    pub max_guesses: u32,
    pub max_turns: u32,
    pub afk_timeout_secs: u64,
    pub first_guess_bonus: u32,
}

impl GameRules {
    /// The rules installed at deployment
    pub fn standard(env: &Env) -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            colors: Bytes::from_array(env, DEFAULT_COLORS),
            max_guesses: DEFAULT_MAX_GUESSES,
            max_turns: DEFAULT_MAX_TURNS,
            afk_timeout_secs: DEFAULT_AFK_TIMEOUT_SECS,
            first_guess_bonus: DEFAULT_FIRST_GUESS_BONUS,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(DomainError::InvalidRules);
        }
        if self.max_guesses == 0 || self.max_guesses > MAX_GUESSES_LIMIT {
            return Err(DomainError::InvalidRules);
        }
        if self.max_turns == 0 || self.max_turns > MAX_TURNS_LIMIT {
            return Err(DomainError::InvalidRules);
        }
        if self.afk_timeout_secs == 0 {
            return Err(DomainError::InvalidRules);
        }

        let count = self.colors.len();
        if count < 2 || count > MAX_COLORS {
            return Err(DomainError::InvalidRules);
        }
        for i in 0..count {
            let symbol = self.colors.get(i).ok_or(DomainError::InvalidRules)?;
            if !symbol.is_ascii_graphic() {
                return Err(DomainError::InvalidRules);
            }
            for j in (i + 1)..count {
                if self.colors.get(j) == Some(symbol) {
                    return Err(DomainError::InvalidRules);
                }
            }
        }
        Ok(())
    }

    /// Points the code-breaker earns for a finished turn.
    ///
    /// Solving earns one point per unused guess plus one, so a first-guess
    /// solve is worth `max_guesses` plus the bonus. Failing earns nothing.
    pub fn turn_score(&self, guesses_used: u32, solved: bool) -> u32 {
        if !solved || guesses_used == 0 {
            return 0;
        }
        let base = self.max_guesses.saturating_sub(guesses_used) + 1;
        if guesses_used == 1 {
            base + self.first_guess_bonus
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules_are_valid() {
        let env = Env::default();
        assert_eq!(GameRules::standard(&env).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_duplicate_colors() {
        let env = Env::default();
        let mut rules = GameRules::standard(&env);
        rules.colors = Bytes::from_array(&env, b"RGBR");
        assert_eq!(rules.validate(), Err(DomainError::InvalidRules));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let env = Env::default();

        let mut rules = GameRules::standard(&env);
        rules.code_length = MAX_CODE_LENGTH + 1;
        assert_eq!(rules.validate(), Err(DomainError::InvalidRules));

        let mut rules = GameRules::standard(&env);
        rules.max_guesses = 0;
        assert_eq!(rules.validate(), Err(DomainError::InvalidRules));

        let mut rules = GameRules::standard(&env);
        rules.afk_timeout_secs = 0;
        assert_eq!(rules.validate(), Err(DomainError::InvalidRules));

        let mut rules = GameRules::standard(&env);
        rules.colors = Bytes::from_array(&env, b"R");
        assert_eq!(rules.validate(), Err(DomainError::InvalidRules));
    }

    #[test]
    fn test_turn_score_rewards_fewer_guesses() {
        let env = Env::default();
        let rules = GameRules::standard(&env);

        assert_eq!(rules.turn_score(1, true), 6 + DEFAULT_FIRST_GUESS_BONUS);
        assert_eq!(rules.turn_score(2, true), 5);
        assert_eq!(rules.turn_score(6, true), 1);
        assert_eq!(rules.turn_score(6, false), 0);

        let mut previous = u32::MAX;
        for used in 1..=rules.max_guesses {
            let score = rules.turn_score(used, true);
            assert!(score < previous);
            previous = score;
        }
    }
}
