//! Feedback for a single guess

use crate::core::{Feedback, Word, check};

/// Validate both words and compute the feedback for `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_words(answer: &str, guess: &str) -> Result<Feedback, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(check(answer.text(), guess.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Correctness::{Correct, Misplaced, Wrong};

    #[test]
    fn check_words_scores_valid_input() {
        assert_eq!(
            check_words("SLATE", "crane").unwrap(),
            [Wrong, Wrong, Correct, Wrong, Correct]
        );
        assert_eq!(
            check_words("abcde", "xaxxx").unwrap(),
            [Misplaced, Wrong, Wrong, Wrong, Wrong]
        );
    }

    #[test]
    fn check_words_rejects_instead_of_panicking() {
        assert!(check_words("abc", "crane").unwrap_err().starts_with("Invalid answer"));
        assert!(check_words("crane", "nuts_").unwrap_err().starts_with("Invalid guess"));
    }
}
