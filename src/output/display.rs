//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, plural};
use crate::commands::BenchmarkResult;
use crate::core::Feedback;
use crate::solver::{GameRecord, Outcome};
use colored::Colorize;

/// Print every round of a simulated game
pub fn print_game_record(record: &GameRecord, strategy_name: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playing: {}  (strategy: {strategy_name})",
        record.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, guess) in record.history.iter().enumerate() {
        println!(
            "Round {:>2}: {} {}",
            i + 1,
            guess.word().to_uppercase(),
            feedback_to_emoji(guess.feedback())
        );
    }

    println!();
    match record.outcome {
        Outcome::Solved(rounds) => {
            println!(
                "Round {:>2}: {} {}",
                rounds,
                record.answer.to_uppercase().bright_green().bold(),
                "🟩".repeat(5)
            );
            println!(
                "{}",
                format!("✅ Solved in {rounds} round{}!", plural(rounds))
                    .green()
                    .bold()
            );
        }
        Outcome::NotFound => {
            println!(
                "{}",
                format!("❌ Not found within {} rounds", record.guesses.len())
                    .red()
                    .bold()
            );
        }
    }
}

/// Print feedback for a single guess
pub fn print_feedback(answer: &str, guess: &str, feedback: &Feedback) {
    println!(
        "{} vs {}: {}",
        guess.to_uppercase().bright_white().bold(),
        answer.to_uppercase().bright_yellow(),
        feedback_to_emoji(feedback)
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy_name}");
    println!("   Words tested:     {}", result.total_words);
    if result.total_words > 0 {
        println!(
            "   Solved:           {} {}",
            result.solved,
            format!(
                "({:.1}%)",
                result.solved as f64 / result.total_words as f64 * 100.0
            )
            .green()
        );
    }
    if !result.not_found.is_empty() {
        println!(
            "   Not found:        {}",
            result.not_found.len().to_string().red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let max_count = result.distribution.values().copied().max().unwrap_or(1);
        for (&rounds, &count) in &result.distribution {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {rounds:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, rounds) in result.hardest.iter().take(5) {
            println!("   {} ({rounds} rounds)", word.to_uppercase().yellow());
        }
    }

    if !result.not_found.is_empty() {
        println!("\n❌ {}", "Not Found".red().bold());
        for word in result.not_found.iter().take(10) {
            println!("   {}", word.to_uppercase().red());
        }
        if result.not_found.len() > 10 {
            println!("   ...and {} more", result.not_found.len() - 10);
        }
    }
}

/// Print dictionary entries, one per line
pub fn print_sorted_dictionary(entries: &[(String, i64)]) {
    let width = entries.iter().map(|(w, _)| w.len()).max().unwrap_or(0);
    for (word, frequency) in entries {
        println!("{word:<width$} {}", frequency.to_string().bright_black());
    }
    println!(
        "\n{} entr{}",
        entries.len().to_string().bright_cyan(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
}
