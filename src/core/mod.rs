//! Core domain types for the word game
//!
//! This module contains the feedback engine and the value types it produces.
//! Everything here is pure: no I/O, no shared state.

mod correctness;
mod guess;
mod word;

pub use correctness::{Correctness, Feedback, check};
pub use guess::Guess;
pub use word::{Word, WordError};

/// Number of letters in every word and guess
pub const WORD_LENGTH: usize = 5;
