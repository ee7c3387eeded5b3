//! Benchmark command
//!
//! Plays a strategy against many answers and gathers round statistics. Games
//! are independent, so they run in parallel with a fresh strategy each.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::core::Word;
use crate::solver::{MAX_ROUNDS, Outcome, Simulation, Strategy};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub max_rounds: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers not found within the round ceiling, in input order
    pub not_found: Vec<String>,
    pub total_rounds: usize,
    /// Average over solved answers only
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds to solve → number of answers
    pub distribution: BTreeMap<usize, usize>,
    /// Solved answers needing the most rounds, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run benchmark on a set of answers
///
/// `make_strategy` is called once per answer, possibly from several threads.
///
/// # Panics
///
/// Panics if `config.max_rounds` is zero or a strategy returns a malformed guess.
pub fn run_benchmark<S, F>(
    answers: &[Word],
    config: &BenchmarkConfig,
    make_strategy: F,
) -> BenchmarkResult
where
    S: Strategy,
    F: Fn() -> S + Sync,
{
    let start = Instant::now();
    let pb = progress_bar(answers.len(), config.show_progress);
    log::info!(
        "benchmarking {} answers, ceiling {} rounds",
        answers.len(),
        config.max_rounds
    );

    let outcomes: Vec<(&str, Outcome)> = answers
        .par_iter()
        .map(|answer| {
            let mut strategy = make_strategy();
            let record = Simulation::new(answer.text())
                .with_max_rounds(config.max_rounds)
                .run(&mut strategy);
            pb.inc(1);
            (answer.text(), record.outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut not_found = Vec::new();
    let mut solved_rounds: Vec<(&str, usize)> = Vec::new();

    for &(answer, outcome) in &outcomes {
        match outcome {
            Outcome::Solved(rounds) => {
                *distribution.entry(rounds).or_insert(0) += 1;
                solved_rounds.push((answer, rounds));
            }
            Outcome::NotFound => not_found.push(answer.to_string()),
        }
    }

    let solved = solved_rounds.len();
    let total_rounds: usize = solved_rounds.iter().map(|&(_, r)| r).sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = solved_rounds
        .iter()
        .map(|&(answer, rounds)| (answer.to_string(), rounds))
        .collect();
    hardest.sort_by_key(|(_, rounds)| Reverse(*rounds));
    hardest.truncate(10);

    let total_words = answers.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        not_found,
        total_rounds,
        average_rounds,
        min_rounds: distribution.keys().next().copied().unwrap_or(0),
        max_rounds: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;
    use crate::dictionary::{embedded, ranked_words};
    use crate::solver::NaiveStrategy;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn benchmark_runs() {
        let all_words = ranked_words(&embedded());
        let answers = &all_words[..20];

        let result = run_benchmark(answers, &BenchmarkConfig::default(), || {
            NaiveStrategy::new(&all_words)
        });

        assert_eq!(result.total_words, 20);
        assert_eq!(result.solved, 20);
        assert!(result.not_found.is_empty());
        assert_eq!(result.min_rounds, 1);
        assert!(result.average_rounds >= 1.0);
        assert!(result.max_rounds <= MAX_ROUNDS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let all_words = ranked_words(&embedded());

        let result = run_benchmark(&all_words[..30], &BenchmarkConfig::default(), || {
            NaiveStrategy::new(&all_words)
        });

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        let weighted: usize = result.distribution.iter().map(|(r, n)| r * n).sum();
        assert_eq!(weighted, result.total_rounds);
    }

    #[test]
    fn benchmark_counts_not_found() {
        let pool = words(&["crane", "slate"]);
        let answers = words(&["crane", "zzzzz", "slate"]);
        let config = BenchmarkConfig {
            max_rounds: 5,
            show_progress: false,
        };

        let result = run_benchmark(&answers, &config, || NaiveStrategy::new(&pool));

        assert_eq!(result.solved, 2);
        assert_eq!(result.not_found, vec!["zzzzz".to_string()]);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_with_closure_strategy() {
        let answers = words(&["crane", "slate"]);

        let result = run_benchmark(&answers, &BenchmarkConfig::default(), || {
            |history: &[Guess]| {
                let word = if history.is_empty() { "crane" } else { "slate" };
                word.to_string()
            }
        });

        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.get(&2), Some(&1));
        assert_eq!(result.hardest[0], ("slate".to_string(), 2));
    }

    #[test]
    fn benchmark_empty_word_list() {
        let pool = words(&["crane"]);
        let result = run_benchmark(&[], &BenchmarkConfig::default(), || {
            NaiveStrategy::new(&pool)
        });

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.total_rounds, 0);
        assert!(result.average_rounds.abs() < f64::EPSILON);
        assert_eq!(result.min_rounds, 0);
        assert_eq!(result.max_rounds, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let all_words = ranked_words(&embedded());

        let result = run_benchmark(&all_words[..40], &BenchmarkConfig::default(), || {
            NaiveStrategy::new(&all_words)
        });

        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
        assert!(result.hardest.windows(2).all(|p| p[0].1 >= p[1].1));
    }
}
