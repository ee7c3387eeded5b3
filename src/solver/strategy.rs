//! Guess selection strategies
//!
//! Defines the Strategy trait and the runtime-selectable wrapper.

use super::naive::{NaiveStrategy, RandomStrategy};
use crate::core::{Guess, Word};

/// A strategy for producing the next guess of a game
pub trait Strategy {
    /// Produce the next guess given every scored guess so far, oldest first
    ///
    /// `history` is empty on the first round. The returned guess must be exactly
    /// 5 ASCII characters.
    fn guess(&mut self, history: &[Guess]) -> String;
}

impl<F> Strategy for F
where
    F: FnMut(&[Guess]) -> String,
{
    fn guess(&mut self, history: &[Guess]) -> String {
        self(history)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Most frequent consistent word (default)
    Naive(NaiveStrategy<'a>),
    /// Random consistent word
    Random(RandomStrategy<'a>),
}

impl Strategy for StrategyType<'_> {
    fn guess(&mut self, history: &[Guess]) -> String {
        match self {
            Self::Naive(s) => s.guess(history),
            Self::Random(s) => s.guess(history),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "naive", "random".
    /// Defaults to naive if name is unrecognized.
    ///
    /// # Panics
    /// Panics if `words` is empty.
    #[must_use]
    pub fn from_name(name: &str, words: &'a [Word]) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new(words)),
            _ => Self::Naive(NaiveStrategy::new(words)),
        }
    }

    /// Canonical name of the selected strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Naive(_) => "naive",
            Self::Random(_) => "random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Outcome, play};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn closures_are_strategies() {
        let mut calls = 0;
        let mut strategy = |_: &[Guess]| {
            calls += 1;
            "crane".to_string()
        };
        assert_eq!(strategy.guess(&[]), "crane");
        assert_eq!(calls, 1);
    }

    #[test]
    fn from_name_selects_strategy() {
        let list = words(&["crane", "slate"]);

        assert_eq!(StrategyType::from_name("naive", &list).name(), "naive");
        assert_eq!(StrategyType::from_name("random", &list).name(), "random");
        assert_eq!(StrategyType::from_name("bogus", &list).name(), "naive");
    }

    #[test]
    fn wrapper_delegates() {
        let list = words(&["crane", "slate", "grate"]);

        for name in ["naive", "random"] {
            let mut strategy = StrategyType::from_name(name, &list);
            assert!(play("grate", &mut strategy).is_solved(), "{name}");
        }
    }

    #[test]
    fn boxed_strategies_play() {
        let list = words(&["crane", "slate"]);
        let mut strategy: Box<dyn Strategy> = Box::new(NaiveStrategy::new(&list));

        assert_eq!(play("crane", strategy.as_mut()), Outcome::Solved(1));
    }
}
