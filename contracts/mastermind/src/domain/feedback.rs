use soroban_sdk::contracttype;

use super::code::{Code, MAX_CODE_LENGTH};
use super::errors::DomainError;

/// Peg feedback for one guess
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Feedback {
    /// Black pegs: right color, right position
    pub exact: u32,
    /// White pegs: right color, wrong position
    pub color_only: u32,
}

impl Feedback {
    /// Wraps code-maker supplied feedback, rejecting peg counts that cannot
    /// occur for a code of `code_length` pegs
    pub fn claimed(exact: u32, color_only: u32, code_length: u32) -> Result<Self, DomainError> {
        match exact.checked_add(color_only) {
            Some(total) if total <= code_length => Ok(Self { exact, color_only }),
            _ => Err(DomainError::InvalidFeedback),
        }
    }

    /// Feedback meaning the breaker cracked the code
    pub fn is_solved(&self, code_length: u32) -> bool {
        self.exact == code_length
    }

    /// Scores `guess` against `secret`.
    ///
    /// First pass counts exact matches. Second pass walks each unused secret
    /// peg and pairs it with the first unused guess peg of the same color.
    pub fn compute(secret: &Code, guess: &Code) -> Self {
        Self::compute_pegs(secret.pegs(), guess.pegs())
    }

    pub fn compute_pegs(secret: &[u8], guess: &[u8]) -> Self {
        let n = secret.len().min(guess.len()).min(MAX_CODE_LENGTH as usize);
        let mut secret_used = [false; MAX_CODE_LENGTH as usize];
        let mut guess_used = [false; MAX_CODE_LENGTH as usize];
        let mut exact = 0u32;
        let mut color_only = 0u32;

        for i in 0..n {
            if secret[i] == guess[i] {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        for i in 0..n {
            if secret_used[i] {
                continue;
            }
            for j in 0..n {
                if !guess_used[j] && secret[i] == guess[j] {
                    color_only += 1;
                    secret_used[i] = true;
                    guess_used[j] = true;
                    break;
                }
            }
        }

        Self { exact, color_only }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(secret: &[u8], guess: &[u8]) -> (u32, u32) {
        let f = Feedback::compute_pegs(secret, guess);
        (f.exact, f.color_only)
    }

    #[test]
    fn test_identical_codes_are_all_exact() {
        assert_eq!(fb(b"RGBY", b"RGBY"), (4, 0));
        assert_eq!(fb(b"KKKK", b"KKKK"), (4, 0));
    }

    #[test]
    fn test_swapped_pair_scores_two_and_two() {
        assert_eq!(fb(b"RGBY", b"GRBY"), (2, 2));
    }

    #[test]
    fn test_disjoint_colors_score_nothing() {
        assert_eq!(fb(b"RGBY", b"KWKW"), (0, 0));
    }

    #[test]
    fn test_duplicates_are_not_double_counted() {
        // One R in the secret can only be matched once.
        assert_eq!(fb(b"RGBY", b"RRRR"), (1, 0));
        assert_eq!(fb(b"RRGG", b"GGRR"), (0, 4));
        assert_eq!(fb(b"RRGB", b"RBRR"), (1, 2));
        assert_eq!(fb(b"YYYB", b"BYYY"), (2, 2));
    }

    #[test]
    fn test_total_never_exceeds_length() {
        let palette = b"RGBY";
        let mut secret = [0u8; 4];
        let mut guess = [0u8; 4];
        for s in 0..256u32 {
            for g in (0..256u32).step_by(7) {
                for k in 0..4 {
                    secret[k] = palette[((s >> (2 * k)) & 3) as usize];
                    guess[k] = palette[((g >> (2 * k)) & 3) as usize];
                }
                let f = Feedback::compute_pegs(&secret, &guess);
                assert!(f.exact + f.color_only <= 4);
                if secret == guess {
                    assert_eq!((f.exact, f.color_only), (4, 0));
                }
            }
        }
    }

    #[test]
    fn test_invariant_under_color_relabeling() {
        let relabel = |c: u8| match c {
            b'R' => b'W',
            b'G' => b'R',
            b'B' => b'K',
            b'Y' => b'G',
            other => other,
        };
        let cases: [(&[u8; 4], &[u8; 4]); 4] = [
            (b"RGBY", b"GRBY"),
            (b"RRGB", b"RBRR"),
            (b"YYYB", b"BYYY"),
            (b"RGRG", b"GRGR"),
        ];
        for (secret, guess) in cases.iter() {
            let mut s2 = **secret;
            let mut g2 = **guess;
            s2.iter_mut().for_each(|c| *c = relabel(*c));
            g2.iter_mut().for_each(|c| *c = relabel(*c));
            assert_eq!(fb(*secret, *guess), fb(&s2, &g2));
        }
    }

    #[test]
    fn test_claimed_feedback_bounds() {
        assert!(Feedback::claimed(4, 0, 4).is_ok());
        assert!(Feedback::claimed(2, 2, 4).is_ok());
        assert_eq!(
            Feedback::claimed(3, 2, 4),
            Err(DomainError::InvalidFeedback)
        );
        assert_eq!(
            Feedback::claimed(u32::MAX, 1, 4),
            Err(DomainError::InvalidFeedback)
        );
        assert!(Feedback::claimed(4, 0, 4).unwrap().is_solved(4));
    }
}
