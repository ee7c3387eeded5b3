//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as one of three values:
//! - `Correct` = the answer has the same letter at this position
//! - `Misplaced` = the answer's letter at this position appears elsewhere in the guess
//! - `Wrong` = neither
//!
//! Note the direction of the `Misplaced` test: it looks for the **answer's** letter
//! inside the **guess**, and does not limit matches by letter counts. This differs
//! from the usual game rule for repeated letters and is relied on by strategies
//! that filter candidates with [`check`].

use std::fmt;

use super::WORD_LENGTH;

/// Classification of a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correctness {
    /// Same letter at the same position (green)
    Correct,
    /// Letter present elsewhere in the guess (yellow)
    Misplaced,
    /// Letter absent (gray)
    Wrong,
}

/// Feedback for a whole guess, one value per letter position
pub type Feedback = [Correctness; WORD_LENGTH];

impl Correctness {
    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Compute the feedback for `guess` against `answer`
///
/// # Panics
/// Panics if either input is not exactly 5 ASCII characters. Callers are expected
/// to validate user input (e.g. with [`Word::new`](super::Word::new)) beforehand.
///
/// # Examples
/// ```
/// use wordle_sim::core::{check, Correctness::*};
///
/// assert_eq!(check("slate", "crane"), [Wrong, Wrong, Correct, Wrong, Correct]);
///
/// // The answer's 'a' is looked up in the guess, not the other way round.
/// assert_eq!(check("abcde", "xaxxx"), [Misplaced, Wrong, Wrong, Wrong, Wrong]);
/// ```
#[must_use]
pub fn check(answer: &str, guess: &str) -> Feedback {
    assert!(
        answer.len() == WORD_LENGTH && answer.is_ascii(),
        "answer must be {WORD_LENGTH} ASCII characters, got {answer:?}"
    );
    assert!(
        guess.len() == WORD_LENGTH && guess.is_ascii(),
        "guess must be {WORD_LENGTH} ASCII characters, got {guess:?}"
    );

    let answer = answer.as_bytes();
    let guess = guess.as_bytes();
    let mut feedback = [Correctness::Wrong; WORD_LENGTH];

    for (i, slot) in feedback.iter_mut().enumerate() {
        let a = answer[i];
        *slot = if a == guess[i] {
            Correctness::Correct
        } else if guess.contains(&a) {
            Correctness::Misplaced
        } else {
            Correctness::Wrong
        };
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::Correctness::{Correct, Misplaced, Wrong};
    use super::*;

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(check("apple", "apple"), [Correct; 5]);
    }

    #[test]
    fn disjoint_letters_are_all_wrong() {
        assert_eq!(check("apple", "nuts_"), [Wrong; 5]);
        assert_eq!(check("abcde", "fghij"), [Wrong; 5]);
    }

    #[test]
    fn mixed_feedback() {
        assert_eq!(check("slate", "crane"), [Wrong, Wrong, Correct, Wrong, Correct]);
    }

    #[test]
    fn misplaced_searches_guess_for_answer_letter() {
        // Answer 'a' at 0 is found at guess position 1.
        assert_eq!(check("abcde", "xaxxx"), [Misplaced, Wrong, Wrong, Wrong, Wrong]);
        // Swapping roles moves the yellow to the other position.
        assert_eq!(check("xaxxx", "abcde"), [Wrong, Misplaced, Wrong, Wrong, Wrong]);
    }

    #[test]
    fn repeated_letters_are_not_count_limited() {
        // Both answer e's find an 'e' in the guess.
        assert_eq!(check("speed", "eerie"), [Wrong, Wrong, Misplaced, Misplaced, Wrong]);
        assert_eq!(
            check("eerie", "speed"),
            [Misplaced, Misplaced, Wrong, Wrong, Misplaced]
        );
        // A single 'o' in the guess satisfies every 'o' in the answer.
        assert_eq!(check("ooxxx", "xxoxy"), [Misplaced, Misplaced, Misplaced, Correct, Misplaced]);
    }

    #[test]
    fn correct_iff_same_letter_at_position() {
        let pairs = [
            ("crane", "slate"),
            ("robot", "floor"),
            ("speed", "erase"),
            ("aaaaa", "abaca"),
            ("zebra", "bravo"),
        ];
        for (answer, guess) in pairs {
            let feedback = check(answer, guess);
            assert_eq!(feedback.len(), 5);
            for (i, c) in feedback.iter().enumerate() {
                let same = answer.as_bytes()[i] == guess.as_bytes()[i];
                assert_eq!(*c == Correct, same, "{answer}/{guess} position {i}");
            }
        }
    }

    #[test]
    fn check_is_idempotent() {
        assert_eq!(check("robot", "floor"), check("robot", "floor"));
    }

    #[test]
    #[should_panic(expected = "answer must be 5 ASCII characters")]
    fn short_answer_panics() {
        let _ = check("abc", "apple");
    }

    #[test]
    #[should_panic(expected = "guess must be 5 ASCII characters")]
    fn long_guess_panics() {
        let _ = check("apple", "apples");
    }

    #[test]
    fn emoji_display() {
        assert_eq!(Correct.to_string(), "🟩");
        assert_eq!(Misplaced.to_string(), "🟨");
        assert_eq!(Wrong.to_string(), "⬜");
    }
}
