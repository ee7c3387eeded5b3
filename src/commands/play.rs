//! Single game command
//!
//! Plays one answer with a strategy and returns the full record.

use crate::core::Word;
use crate::solver::{GameRecord, Simulation, Strategy};

/// Configuration for playing a single game
pub struct PlayConfig {
    pub answer: String,
    pub max_rounds: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(answer: String) -> Self {
        Self {
            answer,
            max_rounds: crate::solver::MAX_ROUNDS,
        }
    }
}

/// Play `config.answer` with `strategy`
///
/// # Errors
///
/// Returns an error if:
/// - The answer is not a valid 5-letter word
/// - The round ceiling is zero
pub fn play_word<S: Strategy + ?Sized>(
    config: PlayConfig,
    strategy: &mut S,
) -> Result<GameRecord, String> {
    let answer = Word::new(config.answer).map_err(|e| format!("Invalid answer: {e}"))?;

    if config.max_rounds == 0 {
        return Err("Round ceiling must be at least 1".to_string());
    }

    let record = Simulation::new(answer.text())
        .with_max_rounds(config.max_rounds)
        .run(strategy);

    Ok(record)
}
