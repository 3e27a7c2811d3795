//! Display functions for the game transcript and command results

use super::formatters::{count_noun, create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, ScoreResult};
use crate::core::{Combination, Difficulty, Feedback};
use crate::game::SecretSource;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Write the opening banner of an interactive game
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "╔════════════════════════════════════╗".cyan())?;
    writeln!(out, "{}", "║             MASTERMIND             ║".cyan().bold())?;
    writeln!(out, "{}", "╚════════════════════════════════════╝".cyan())?;
    writeln!(out)
}

/// Write a prompt without a newline and flush so it shows before input
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}: ")?;
    out.flush()
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_difficulty<W: Write>(out: &mut W, difficulty: Difficulty) -> io::Result<()> {
    writeln!(
        out,
        "Playing Mastermind with {} pegs and {} possible colors.",
        difficulty.pegs(),
        difficulty.colors()
    )
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_secret_source<W: Write>(out: &mut W, source: SecretSource) -> io::Result<()> {
    match source {
        SecretSource::Random => writeln!(out, "Using random secret.")?,
        SecretSource::Given => writeln!(out, "Using given secret.")?,
    }
    writeln!(out)
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_guess<W: Write>(out: &mut W, number: usize, guess: &Combination) -> io::Result<()> {
    writeln!(out, "Guess {number}: {guess}")
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_feedback<W: Write>(out: &mut W, feedback: Feedback) -> io::Result<()> {
    writeln!(out, "{} Right place", feedback.right())?;
    writeln!(out, "{} Wrong place", feedback.wrong())?;
    writeln!(out)
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_won<W: Write>(out: &mut W, guesses: usize) -> io::Result<()> {
    writeln!(out, "{}", "You won!".bright_green().bold())?;
    writeln!(
        out,
        "It took you {}.",
        count_noun(guesses, "guess", "guesses")
    )
}

/// # Errors
/// Returns any error from the underlying writer.
pub fn write_lost<W: Write>(out: &mut W, secret: &Combination) -> io::Result<()> {
    writeln!(out, "{}", "You lost.".red().bold())?;
    writeln!(out, "The secret was {secret}.")
}

/// Report rejected input; the caller asks again
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_input_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().yellow())?;
    writeln!(out)
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    let pegs = result.difficulty.pegs();

    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret:  {}", result.secret.to_string().bright_yellow().bold());
    println!("Guess:   {}", result.guess.to_string().bright_white().bold());
    println!(
        "Rules:   {} pegs, {} colors, {} scoring",
        pegs,
        result.difficulty.colors(),
        result.rule
    );
    println!("{}", "─".repeat(40).cyan());

    match result.feedback {
        Some(feedback) => {
            println!("Pegs:    {}", feedback_pegs(feedback, pegs).bright_white());
            println!("{} Right place", feedback.right());
            println!("{} Wrong place", feedback.wrong());
            if feedback.is_solved(pegs) {
                println!("{}", "The guess matches the secret.".green().bold());
            }
        }
        None => println!("{}", "All zeros: the guesser gives up.".yellow()),
    }
}

/// Print the feedback distribution of a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible secrets ({} pegs, {} colors, {} scoring):",
        result.total_secrets,
        result.difficulty.pegs(),
        result.difficulty.colors(),
        result.rule
    );
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} secrets remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} secrets remain", result.worst_case);
    println!("   Outcomes:    {}", result.classes.len());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let pegs = result.difficulty.pegs();
    let largest = result.worst_case as f64;
    for &(feedback, count) in &result.classes {
        let pct = count as f64 / result.total_secrets as f64 * 100.0;
        let bar = create_progress_bar(count as f64, largest, 30);
        println!(
            "   {:<10} {} {:>10} ({:5.1}%)",
            feedback_pegs(feedback, pegs),
            bar.green(),
            count,
            pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn transcript_difficulty_line() {
        let text = render(|out| write_difficulty(out, Difficulty::new(5, 8)));
        assert_eq!(text, "Playing Mastermind with 5 pegs and 8 possible colors.\n");
    }

    #[test]
    fn transcript_secret_source() {
        let text = render(|out| write_secret_source(out, SecretSource::Random));
        assert_eq!(text, "Using random secret.\n\n");
        let text = render(|out| write_secret_source(out, SecretSource::Given));
        assert_eq!(text, "Using given secret.\n\n");
    }

    #[test]
    fn transcript_guess_and_feedback() {
        let guess = Combination::new(vec![1, 3, 2, 5]);
        let text = render(|out| write_guess(out, 3, &guess));
        assert_eq!(text, "Guess 3: 1 3 2 5\n");

        let text = render(|out| write_feedback(out, Feedback::new(1, 2)));
        assert_eq!(text, "1 Right place\n2 Wrong place\n\n");
    }

    #[test]
    fn transcript_endings() {
        let text = render(|out| write_won(out, 1));
        assert!(text.contains("You won!"));
        assert!(text.ends_with("It took you 1 guess.\n"));

        let text = render(|out| write_won(out, 4));
        assert!(text.ends_with("It took you 4 guesses.\n"));

        let secret = Combination::new(vec![6, 5, 4, 3]);
        let text = render(|out| write_lost(out, &secret));
        assert!(text.contains("You lost."));
        assert!(text.ends_with("The secret was 6 5 4 3.\n"));
    }
}
