//! Wordlebot - CLI
//!
//! Interactive Wordle assistant, single-word solver and benchmark harness.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use wordlebot::{
    commands::{
        BenchmarkConfig, SessionEnd, run_benchmark, run_play, select_targets, solve_word,
        write_transcript,
    },
    config::{Config, Opener},
    core::Word,
    output::{print_benchmark_result, print_rejected, print_solve_result},
    solver::{DEFAULT_THREADS, Solver, StrategyType},
    wordlists::{DEFAULT_GUESSES, DEFAULT_SOLUTIONS},
};

#[derive(Parser)]
#[command(
    name = "wordlebot",
    about = "Wordle assistant that picks the guess splitting the candidates best",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File with every allowed guess, one per line
    #[arg(long, global = true, default_value = DEFAULT_GUESSES)]
    guesses: PathBuf,

    /// File with every possible solution, one per line
    #[arg(long, global = true, default_value = DEFAULT_SOLUTIONS)]
    solutions: PathBuf,

    /// Guess scoring strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyType::Complex)]
    strategy: StrategyType,

    /// Worker threads used to score guesses (0 = one per core)
    #[arg(short = 'j', long, global = true, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// First guess of every game (default: ROATE)
    #[arg(long, global = true, conflicts_with = "recompute_opener")]
    opener: Option<String>,

    /// Compute the first guess from the full word lists instead
    #[arg(long, global = true)]
    recompute_opener: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): type the hint shown for each guess
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Print the plain transcript instead of the colored summary
        #[arg(short, long)]
        transcript: bool,
    },

    /// Play every solution and report guess counts
    Benchmark {
        /// Play only the first N targets
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Play a random sample of N solutions
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 0, requires = "sample")]
        seed: u64,

        /// Print the guess count of every word
        #[arg(short, long)]
        words: bool,
    },

    /// Compute the best opening guess for the word lists
    Opener,
}

fn build_config(cli: &Cli, command: &Commands) -> Result<Config> {
    let mut config = Config {
        guesses_path: cli.guesses.clone(),
        solutions_path: cli.solutions.clone(),
        strategy: cli.strategy,
        threads: cli.threads,
        // Benchmark draws its own bar per game, not per selection
        progress: !cli.quiet && !matches!(command, Commands::Benchmark { .. }),
        ..Config::default()
    };

    if let Some(text) = &cli.opener {
        config = config
            .with_opener_word(text)
            .with_context(|| format!("invalid opener {text:?}"))?;
    }
    if cli.recompute_opener {
        config.opener = Opener::Computed;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let config = build_config(&cli, &command)?;

    let (guesses, solutions) = config
        .load_word_lists()
        .context("cannot read word list")?;
    print_rejected(&config.guesses_path, &guesses);
    print_rejected(&config.solutions_path, &solutions);
    ensure!(!guesses.words.is_empty(), "guess list is empty");
    ensure!(!solutions.words.is_empty(), "solution list is empty");

    let (guesses, solutions) = (&guesses.words, &solutions.words);
    match command {
        Commands::Play => run_play_command(&make_solver(&config, guesses, solutions, cli.quiet)?),
        Commands::Solve { word, transcript } => run_solve_command(
            &make_solver(&config, guesses, solutions, cli.quiet)?,
            &word,
            transcript,
        ),
        Commands::Benchmark {
            limit,
            sample,
            seed,
            words,
        } => {
            let solver = make_solver(&config, guesses, solutions, cli.quiet)?;
            let targets = select_targets(
                solutions,
                &BenchmarkConfig {
                    limit,
                    sample,
                    seed,
                },
            );
            let result = run_benchmark(&solver, &targets, !cli.quiet);
            print_benchmark_result(&result, words);
            Ok(())
        }
        Commands::Opener => run_opener_command(&config, guesses, solutions),
    }
}

fn make_solver<'a>(
    config: &Config,
    guesses: &'a [Word],
    solutions: &'a [Word],
    quiet: bool,
) -> Result<Solver<'a>> {
    let solver = config
        .solver(guesses, solutions)
        .context("cannot set up the solver")?;

    if !quiet {
        eprintln!(
            "{} {} with {} ({} workers)",
            "Opening with".bright_black(),
            solver.opener().to_string().bright_yellow().bold(),
            config.strategy,
            solver.selector().workers()
        );
    }
    Ok(solver)
}

fn run_play_command(solver: &Solver<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = run_play(solver, stdin.lock(), &mut stdout)?;

    if let SessionEnd::Aborted(e) = end {
        eprintln!("{} {e}", "error:".red().bold());
    }
    Ok(())
}

fn run_solve_command(solver: &Solver<'_>, word: &str, transcript: bool) -> Result<()> {
    let target = Word::new(word).with_context(|| format!("invalid target word {word:?}"))?;
    let result = solve_word(solver, target);

    if transcript {
        write_transcript(&result, &mut io::stdout())?;
    } else {
        print_solve_result(&result);
    }
    Ok(())
}

fn run_opener_command(config: &Config, guesses: &[Word], solutions: &[Word]) -> Result<()> {
    let opener = config
        .selector()?
        .select_guess(guesses, solutions)
        .context("cannot compute the opener")?;
    println!("{opener}");
    Ok(())
}
