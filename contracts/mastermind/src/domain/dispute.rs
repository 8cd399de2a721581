use soroban_sdk::{Address, Bytes, Env};

use super::code::Code;
use super::errors::DomainError;
use super::feedback::Feedback;
use super::game::{DisputeRecord, EndReason, Game, TurnPhase};
use super::turn::TurnSummary;

/// Arbiter decision on a disputed feedback
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeRuling {
    pub guess_index: u32,
    pub upheld: bool,
    pub recorded: Feedback,
    /// `None` when the reveal was dishonest and nothing could be recomputed
    pub recomputed: Option<Feedback>,
    pub winner: Address,
}

impl Game {
    /// Code-breaker challenges the feedback given for `guess_index`.
    ///
    /// Upheld when the reveal was dishonest or the recomputed pegs differ
    /// from the recorded ones; the breaker wins. Otherwise the breaker
    /// forfeits to the maker. Either way the game ends.
    pub fn dispute(&mut self, caller: &Address, guess_index: u32) -> Result<DisputeRuling, DomainError> {
        self.ensure_phase(TurnPhase::AwaitingDispute)?;
        self.ensure_is_code_breaker(caller)?;
        let maker = self.code_maker()?;
        let breaker = self.code_breaker()?;

        let recorded = self
            .current_turn_feedbacks
            .get(guess_index)
            .ok_or(DomainError::InvalidIndex)?;
        let guess = self
            .current_turn_guesses
            .get(guess_index)
            .ok_or(DomainError::InvalidIndex)?;

        let recomputed = if self.reveal_honest {
            self.recompute(&guess)
        } else {
            None
        };
        let upheld = match recomputed {
            Some(actual) => actual != recorded,
            None => true,
        };
        let (winner, reason) = if upheld {
            (breaker, EndReason::DisputeUpheld)
        } else {
            (maker, EndReason::DisputeRejected)
        };

        let outcome = self.outcome_for(&winner);
        self.turns_left = self.turns_left.saturating_sub(1);
        self.dispute_record = Some(DisputeRecord { guess_index, upheld });
        self.finish(outcome, reason)?;

        Ok(DisputeRuling {
            guess_index,
            upheld,
            recorded,
            recomputed,
            winner,
        })
    }

    /// Code-breaker accepts the revealed code and closes the turn
    pub fn accept_reveal(&mut self, env: &Env, caller: &Address) -> Result<TurnSummary, DomainError> {
        self.ensure_phase(TurnPhase::AwaitingDispute)?;
        self.ensure_is_code_breaker(caller)?;
        self.complete_turn(env)
    }

    fn recompute(&self, guess: &Bytes) -> Option<Feedback> {
        let secret = self.secret_code.as_ref()?;
        let secret = Code::parse(&self.rules, secret).ok()?;
        let guess = Code::parse(&self.rules, guess).ok()?;
        Some(Feedback::compute(&secret, &guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::code::commitment_of;
    use crate::domain::game::{GameOutcome, GameState};
    use crate::domain::rules::GameRules;
    use soroban_sdk::testutils::Address as _;

    /// Plays one guess with the given claimed feedback, then reveals `revealed`
    fn revealed_turn(
        env: &Env,
        secret: &[u8; 4],
        guess: &[u8; 4],
        claimed: (u32, u32),
        revealed: &[u8; 4],
    ) -> (Game, Address, Address) {
        let maker = Address::generate(env);
        let breaker = Address::generate(env);
        let mut game = Game::new(env, 1, maker.clone(), None, 10, GameRules::standard(env)).unwrap();
        game.join(&breaker, 10).unwrap();
        game.start(&maker).unwrap();

        let empty = Bytes::new(env);
        let hash = commitment_of(env, &Bytes::from_array(env, secret), &empty);
        game.commit_code(&maker, hash).unwrap();
        game.make_guess(&breaker, Bytes::from_array(env, guess)).unwrap();
        let progress = game.give_feedback(&maker, claimed.0, claimed.1).unwrap();
        if !progress.awaits_reveal() {
            // Burn the remaining guesses so the turn reaches the reveal.
            while game.phase == TurnPhase::Guess {
                game.make_guess(&breaker, Bytes::from_array(env, guess)).unwrap();
                game.give_feedback(&maker, claimed.0, claimed.1).unwrap();
            }
        }
        game.reveal_code(env, &maker, Bytes::from_array(env, revealed), &empty)
            .unwrap();
        (game, maker, breaker)
    }

    #[test]
    fn test_honest_feedback_dispute_goes_to_maker() {
        let env = Env::default();
        let (mut game, maker, breaker) = revealed_turn(&env, b"RGBY", b"GRBY", (2, 2), b"RGBY");

        let ruling = game.dispute(&breaker, 0).unwrap();
        assert!(!ruling.upheld);
        assert_eq!(ruling.winner, maker);
        assert_eq!(game.state, GameState::Ended);
        assert_eq!(game.outcome, GameOutcome::CreatorWins);
        assert_eq!(game.end_reason, Some(EndReason::DisputeRejected));
        assert_eq!(game.turns_left, game.rules.max_turns - 1);
    }

    #[test]
    fn test_lying_feedback_dispute_goes_to_breaker() {
        let env = Env::default();
        let (mut game, _maker, breaker) = revealed_turn(&env, b"RGBY", b"GRBY", (1, 2), b"RGBY");

        let ruling = game.dispute(&breaker, 0).unwrap();
        assert!(ruling.upheld);
        assert_eq!(ruling.recomputed, Some(Feedback { exact: 2, color_only: 2 }));
        assert_eq!(ruling.winner, breaker);
        assert_eq!(game.outcome, GameOutcome::OpponentWins);
        assert_eq!(game.dispute_record, Some(DisputeRecord { guess_index: 0, upheld: true }));
    }

    #[test]
    fn test_swapped_reveal_upholds_any_dispute() {
        let env = Env::default();
        // Feedback is consistent with the revealed code, but not with the commitment.
        let (mut game, _maker, breaker) = revealed_turn(&env, b"RGBY", b"KKKK", (4, 0), b"KKKK");
        assert!(!game.reveal_honest);

        let ruling = game.dispute(&breaker, 0).unwrap();
        assert!(ruling.upheld);
        assert_eq!(ruling.recomputed, None);
        assert_eq!(ruling.winner, breaker);
    }

    #[test]
    fn test_dispute_index_must_exist() {
        let env = Env::default();
        let (mut game, maker, breaker) = revealed_turn(&env, b"RGBY", b"RGBY", (4, 0), b"RGBY");
        let before = game.clone();

        assert_eq!(game.dispute(&breaker, 1), Err(DomainError::InvalidIndex));
        assert_eq!(game.dispute(&maker, 0), Err(DomainError::WrongRole));
        assert_eq!(game, before);
    }

    #[test]
    fn test_accepting_reveal_rotates_roles_and_scores() {
        let env = Env::default();
        let (mut game, maker, breaker) = revealed_turn(&env, b"RGBY", b"RGBY", (4, 0), b"RGBY");

        let summary = game.accept_reveal(&env, &breaker).unwrap();
        assert_eq!(summary.points, game.rules.turn_score(1, true));
        assert!(!summary.game_over);
        assert_eq!(game.opponent_score, summary.points);
        assert_eq!(game.creator_score, 0);
        assert_eq!(game.turns_left, game.rules.max_turns - 1);
        assert_eq!(game.phase, TurnPhase::AwaitingCommit);
        assert_eq!(game.code_maker, Some(breaker));
        assert_eq!(game.code_breaker, Some(maker));
        assert_eq!(game.guesses_left, game.rules.max_guesses);
        assert!(game.secret_code.is_none());
        assert!(game.current_turn_guesses.is_empty());
        assert!(game.current_turn_feedbacks.is_empty());
    }
}
