//! Game simulation and guessing strategies
//!
//! The harness in [`engine`] plays a [`Strategy`] against an answer; the
//! strategies here are the ones shipped with the crate.

mod engine;
pub mod naive;
pub mod strategy;

pub use engine::{GameRecord, MAX_ROUNDS, Outcome, Simulation, play};
pub use naive::{NaiveStrategy, RandomStrategy};
pub use strategy::{Strategy, StrategyType};
