//! A scored guess

use super::correctness::{Feedback, check};

/// A submitted word together with the feedback it received
///
/// Guesses are created by the simulation harness after scoring and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: String,
    feedback: Feedback,
}

impl Guess {
    /// Create a guess from a word and its feedback
    #[must_use]
    pub fn new(word: impl Into<String>, feedback: Feedback) -> Self {
        Self {
            word: word.into(),
            feedback,
        }
    }

    /// Score `word` against `answer` and wrap the result
    ///
    /// # Panics
    /// Panics under the same conditions as [`check`].
    #[must_use]
    pub fn scored(answer: &str, word: impl Into<String>) -> Self {
        let word = word.into();
        let feedback = check(answer, &word);
        Self { word, feedback }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Feedback for each letter position
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Whether `candidate` could be the answer that produced this guess's feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Guess;
    ///
    /// let guess = Guess::scored("crate", "crane");
    /// assert!(guess.matches("crate"));
    /// assert!(!guess.matches("crane"));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        check(candidate, &self.word) == self.feedback
    }
}
