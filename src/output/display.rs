//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::{Outcome, STALLED_SCORE};
use crate::wordlists::WordList;
use colored::Colorize;
use std::path::Path;

/// Warn about lines of a word list that were skipped
pub fn print_rejected(path: &Path, list: &WordList) {
    for rejected in &list.rejected {
        eprintln!(
            "{} {}:{}: {}",
            "warning:".yellow().bold(),
            path.display(),
            rejected.line,
            rejected.error
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    let record = &result.record;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.solution.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.known_target {
        println!("{}", "Target is not in the solution list".yellow());
    }

    for (i, round) in record.rounds.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&round.guess, round.feedback),
            feedback_to_emoji(round.feedback)
        );
        if !round.feedback.is_solved() {
            println!("  Candidates left: {}", round.remaining);
        }
    }

    println!();
    match &record.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("Solved in {} guesses!", record.rounds.len())
                .green()
                .bold()
        ),
        Outcome::Failed(e) => println!(
            "{}",
            format!("Failed after {} guesses: {e}", record.rounds.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, per_word: bool) {
    if per_word {
        for score in &result.scores {
            println!("{} took {} guesses", score.word, score.guesses);
        }
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words());
    println!(
        "   Average Guesses:  {}",
        format!("{:.4}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    if let Some(worst) = result.worst {
        println!(
            "   Worst Word:       {} ({} guesses)",
            worst.word.to_string().yellow(),
            worst.guesses
        );
    }
    if result.failures > 0 {
        println!(
            "   Failed:           {} (counted as {STALLED_SCORE})",
            result.failures.to_string().red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let Some(&max_count) = result.distribution.values().max() else {
        return;
    };
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for (guesses, count) in counts {
        let pct = count as f64 / result.total_words() as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
