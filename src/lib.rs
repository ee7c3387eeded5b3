//! Word Game Simulator
//!
//! Scores five-letter word guesses and plays guessing strategies against answers,
//! counting the rounds each one needs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::check;
//! use wordle_sim::dictionary::{embedded, ranked_words};
//! use wordle_sim::solver::{NaiveStrategy, play};
//!
//! // Feedback for one guess
//! let feedback = check("slate", "crane");
//! println!("{feedback:?}");
//!
//! // A whole game
//! let words = ranked_words(&embedded());
//! let mut strategy = NaiveStrategy::new(&words);
//! let outcome = play("crane", &mut strategy);
//! assert!(outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Simulation harness and strategies
pub mod solver;

// Word frequency dictionaries
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
