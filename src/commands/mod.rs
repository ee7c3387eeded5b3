//! Command implementations

pub mod benchmark;
pub mod check;
pub mod play;
pub mod sort;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::check_words;
pub use play::{PlayConfig, play_word};
pub use sort::sorted_entries;
