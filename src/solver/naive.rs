//! Candidate-filtering strategies
//!
//! Both strategies keep the words that are still consistent with every piece of
//! feedback seen so far and pick one of them. They differ only in how they pick.

use rand::prelude::IndexedRandom;

use super::strategy::Strategy;
use crate::core::{Guess, Word};

/// Words consistent with the whole history that have not been guessed yet
fn consistent<'a>(words: &'a [Word], history: &[Guess]) -> impl Iterator<Item = &'a Word> {
    words.iter().filter(move |word| {
        history
            .iter()
            .all(|guess| guess.word() != word.text() && guess.matches(word.text()))
    })
}

/// Words not guessed yet, ignoring feedback
fn unguessed<'a>(words: &'a [Word], history: &[Guess]) -> impl Iterator<Item = &'a Word> {
    words
        .iter()
        .filter(move |word| history.iter().all(|guess| guess.word() != word.text()))
}

/// Naive strategy
///
/// Guesses the highest-ranked word that agrees with all feedback so far. Word
/// order is the ranking, so pass words most-preferred first (see
/// [`ranked_words`](crate::dictionary::ranked_words)).
///
/// When the answer is not in the word list, no candidate may survive; the
/// strategy then walks the remaining unguessed words in rank order.
#[derive(Debug, Clone, Copy)]
pub struct NaiveStrategy<'a> {
    words: &'a [Word],
}

impl<'a> NaiveStrategy<'a> {
    /// # Panics
    /// Panics if `words` is empty.
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        assert!(!words.is_empty(), "strategy needs at least one word");
        Self { words }
    }
}

impl Strategy for NaiveStrategy<'_> {
    fn guess(&mut self, history: &[Guess]) -> String {
        consistent(self.words, history)
            .next()
            .or_else(|| unguessed(self.words, history).next())
            .unwrap_or(&self.words[0])
            .text()
            .to_string()
    }
}

/// Random strategy
///
/// Picks uniformly among the words that agree with all feedback so far. A
/// baseline to compare the naive ranking against.
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy<'a> {
    words: &'a [Word],
}

impl<'a> RandomStrategy<'a> {
    /// # Panics
    /// Panics if `words` is empty.
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        assert!(!words.is_empty(), "strategy needs at least one word");
        Self { words }
    }
}

impl Strategy for RandomStrategy<'_> {
    fn guess(&mut self, history: &[Guess]) -> String {
        let mut rng = rand::rng();

        let candidates: Vec<&Word> = consistent(self.words, history).collect();
        let pick = if let Some(word) = candidates.choose(&mut rng) {
            *word
        } else {
            let remaining: Vec<&Word> = unguessed(self.words, history).collect();
            remaining.choose(&mut rng).copied().unwrap_or(&self.words[0])
        };

        pick.text().to_string()
    }
}
