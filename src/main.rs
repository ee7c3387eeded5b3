//! Word Game Simulator - CLI
//!
//! Plays guessing strategies against answers, scores single guesses, benchmarks
//! a strategy over a dictionary, and lists dictionaries by frequency.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use wordle_sim::{
    commands::{BenchmarkConfig, PlayConfig, check_words, play_word, run_benchmark, sorted_entries},
    core::Word,
    dictionary::{Dictionary, embedded, load, ranked_words},
    output::{print_benchmark_result, print_feedback, print_game_record, print_sorted_dictionary},
    solver::{MAX_ROUNDS, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Simulate and score five-letter word guessing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: naive (default), random
    #[arg(short, long, global = true, default_value = "naive")]
    strategy: String,

    /// Dictionary file of `<word> <frequency>` pairs (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a game against a specific answer
    Play {
        /// The answer to play against
        answer: String,

        /// Round ceiling
        #[arg(short, long, default_value_t = MAX_ROUNDS)]
        max_rounds: usize,
    },

    /// Show the feedback for one guess
    Check {
        /// The answer
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Play every dictionary word as an answer and report statistics
    Benchmark {
        /// Limit number of answers to test (most frequent first)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Round ceiling
        #[arg(short, long, default_value_t = MAX_ROUNDS)]
        max_rounds: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// List dictionary entries by ascending frequency
    Sort {
        /// Only show the N most frequent entries
        #[arg(short, long)]
        top: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary from the -d flag, or the embedded one
fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    match path {
        Some(path) => load(path).with_context(|| format!("loading dictionary '{path}'")),
        None => Ok(embedded()),
    }
}

/// Ranked strategy words, which must not be empty
fn strategy_words(dictionary: &Dictionary) -> Result<Vec<Word>> {
    let words = ranked_words(dictionary);
    if words.is_empty() {
        bail!("dictionary contains no valid 5-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play { answer, max_rounds } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            run_play_command(&cli.strategy, answer, max_rounds, &dictionary)
        }
        Commands::Check { answer, guess } => {
            let feedback = check_words(&answer, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_feedback(&answer, &guess, &feedback);
            Ok(())
        }
        Commands::Benchmark {
            limit,
            max_rounds,
            no_progress,
        } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            run_benchmark_command(&cli.strategy, limit, max_rounds, !no_progress, &dictionary)
        }
        Commands::Sort { top } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            print_sorted_dictionary(&sorted_entries(&dictionary, top));
            Ok(())
        }
    }
}

fn run_play_command(
    strategy_name: &str,
    answer: String,
    max_rounds: usize,
    dictionary: &Dictionary,
) -> Result<()> {
    let words = strategy_words(dictionary)?;
    let mut strategy = StrategyType::from_name(strategy_name, &words);

    let mut config = PlayConfig::new(answer);
    config.max_rounds = max_rounds;

    let record = play_word(config, &mut strategy).map_err(|e| anyhow::anyhow!(e))?;
    print_game_record(&record, strategy.name());
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    limit: Option<usize>,
    max_rounds: usize,
    show_progress: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    if max_rounds == 0 {
        bail!("round ceiling must be at least 1");
    }

    let words = strategy_words(dictionary)?;
    let answers = &words[..limit.unwrap_or(words.len()).min(words.len())];
    let name = StrategyType::from_name(strategy_name, &words).name();

    println!(
        "Running benchmark on {} answers with the {name} strategy...",
        answers.len()
    );

    let config = BenchmarkConfig {
        max_rounds,
        show_progress,
    };
    let result = run_benchmark(answers, &config, || {
        StrategyType::from_name(strategy_name, &words)
    });

    print_benchmark_result(&result, name);
    Ok(())
}
