//! Game simulation harness
//!
//! Drives a [`Strategy`] against a fixed answer until it guesses the answer or
//! the round ceiling is reached.

use super::strategy::Strategy;
use crate::core::{Guess, WORD_LENGTH};

/// Default round ceiling
///
/// Well above the six guesses a real game allows, so that statistics can be
/// gathered for strategies that need longer.
pub const MAX_ROUNDS: usize = 31;

/// How a simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The answer was guessed in this (1-based) round
    Solved(usize),
    /// The round ceiling was reached without guessing the answer
    NotFound,
}

impl Outcome {
    /// Round count if the game was solved
    #[must_use]
    pub const fn rounds(self) -> Option<usize> {
        match self {
            Self::Solved(rounds) => Some(rounds),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Everything that happened in one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: String,
    pub outcome: Outcome,
    /// Scored guesses, in round order. The winning guess is not scored and so is
    /// not part of the history.
    pub history: Vec<Guess>,
    /// Every word the strategy submitted, including a winning one
    pub guesses: Vec<String>,
}

/// A single game against a fixed answer
pub struct Simulation {
    answer: String,
    max_rounds: usize,
}

impl Simulation {
    /// Create a simulation for `answer` with the default ceiling of [`MAX_ROUNDS`]
    ///
    /// # Panics
    /// Panics if `answer` is not exactly 5 ASCII characters.
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        let answer = answer.into();
        assert!(
            answer.len() == WORD_LENGTH && answer.is_ascii(),
            "answer must be {WORD_LENGTH} ASCII characters, got {answer:?}"
        );
        Self {
            answer,
            max_rounds: MAX_ROUNDS,
        }
    }

    /// Override the round ceiling
    ///
    /// # Panics
    /// Panics if `max_rounds` is zero.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        assert!(max_rounds > 0, "round ceiling must be at least 1");
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Play the game to completion
    ///
    /// The strategy is asked for one guess per round and sees the history of all
    /// earlier, unsuccessful rounds.
    ///
    /// # Panics
    /// Panics if the strategy returns a guess that is not 5 ASCII characters.
    pub fn run<S: Strategy + ?Sized>(&self, strategy: &mut S) -> GameRecord {
        let mut history: Vec<Guess> = Vec::new();
        let mut guesses: Vec<String> = Vec::new();

        for round in 1..=self.max_rounds {
            let guess = strategy.guess(&history);
            log::debug!("{}: round {round} guess {guess}", self.answer);
            guesses.push(guess.clone());

            if guess == self.answer {
                log::debug!("{}: solved in {round}", self.answer);
                return GameRecord {
                    answer: self.answer.clone(),
                    outcome: Outcome::Solved(round),
                    history,
                    guesses,
                };
            }

            history.push(Guess::scored(&self.answer, guess));
        }

        log::debug!(
            "{}: not found within {} rounds",
            self.answer,
            self.max_rounds
        );
        GameRecord {
            answer: self.answer.clone(),
            outcome: Outcome::NotFound,
            history,
            guesses,
        }
    }
}

/// Play one game with the default round ceiling
///
/// # Panics
/// Panics if `answer` or any guess is not exactly 5 ASCII characters.
///
/// # Examples
/// ```
/// use wordle_sim::core::Guess;
/// use wordle_sim::solver::{Outcome, play};
///
/// let mut words = ["crane", "slate", "grate"].into_iter();
/// let mut strategy = |_: &[Guess]| words.next().unwrap_or("crane").to_string();
///
/// assert_eq!(play("grate", &mut strategy), Outcome::Solved(3));
/// ```
pub fn play<S: Strategy + ?Sized>(answer: &str, strategy: &mut S) -> Outcome {
    Simulation::new(answer).run(strategy).outcome
}
