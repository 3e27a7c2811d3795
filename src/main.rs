//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, or score and analyze single guesses.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{PlayConfig, analyze_guess, run_play, score_guess},
    core::{Difficulty, ScoringRule},
    output::{print_analysis_result, print_score_result},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with configurable pegs and colors",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring of repeated digits: distinct (default, each value once) or standard (per peg)
    #[arg(short, long, global = true, default_value = "distinct")]
    scoring: ScoringRule,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Number of pegs (clamped to 2-8); skips the difficulty prompt
        #[arg(short, long, allow_negative_numbers = true)]
        pegs: Option<i64>,

        /// Number of colors (clamped to 6-20); skips the difficulty prompt
        #[arg(short, long, allow_negative_numbers = true)]
        colors: Option<i64>,

        /// Seed for the random secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score one guess against a secret, e.g. `score 1,2,3,4 1,3,2,5`
    Score {
        /// The secret combination
        secret: String,

        /// The guessed combination
        guess: String,

        /// Number of colors (default: largest digit, at least 6)
        #[arg(short, long)]
        colors: Option<u8>,
    },

    /// Show how a guess splits every possible secret by feedback
    Analyze {
        /// The guessed combination
        guess: String,

        /// Number of colors (default: largest digit, at least 6)
        #[arg(short, long)]
        colors: Option<u8>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "mastermind=warn",
        1 => "mastermind=info",
        _ => "mastermind=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let rule = cli.scoring;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        pegs: None,
        colors: None,
        seed: None,
    });

    match command {
        Commands::Play {
            pegs,
            colors,
            seed,
        } => run_play_command(pegs, colors, seed, rule),
        Commands::Score {
            secret,
            guess,
            colors,
        } => {
            let result = score_guess(&secret, &guess, colors, rule)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze {
            guess,
            colors,
            no_progress,
        } => {
            let result = analyze_guess(&guess, colors, rule, !no_progress)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    pegs: Option<i64>,
    colors: Option<i64>,
    seed: Option<u64>,
    rule: ScoringRule,
) -> Result<()> {
    let difficulty = match (pegs, colors) {
        (None, None) => None,
        (pegs, colors) => Some(Difficulty::default().with_counts(pegs, colors)),
    };

    let config = PlayConfig {
        difficulty,
        rule,
        seed,
    };
    run_play(&config)?;
    Ok(())
}
