//! Interactive console game
//!
//! Reads the difficulty, the secret and then guesses line by line. The
//! session is generic over its input and output so whole games can be
//! replayed from a string.
//!
//! Prompts and the banner go to their own writer, never to the transcript.
//! On a terminal they are shown on stderr; with piped input they are
//! dropped, so stdout holds only transcript lines.

use crate::core::{Combination, Difficulty, ScoringRule};
use crate::game::{Game, GuessOutcome};
use crate::output::display::{
    write_banner, write_difficulty, write_feedback, write_guess, write_input_error, write_lost,
    write_prompt, write_secret_source, write_won,
};
use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

/// Configuration for an interactive game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Skip the difficulty prompt and use this one
    pub difficulty: Option<Difficulty>,
    pub rule: ScoringRule,
    /// Seed for the random secret; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if input ends before the game does.
pub fn run_play(config: &PlayConfig) -> Result<Game> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let mut prompts: Box<dyn Write> = if io::stdin().is_terminal() {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    };

    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            play_session(&mut input, &mut output, &mut prompts, config, &mut rng)
        }
        None => play_session(
            &mut input,
            &mut output,
            &mut prompts,
            config,
            &mut rand::rng(),
        ),
    }
}

/// Play one game from `input` to `output`
///
/// The banner and input prompts are written to `prompts`; `output` only
/// receives the transcript and input errors. Returns the finished game, in
/// the `Won` or `Lost` phase.
///
/// # Errors
///
/// Returns an error on I/O failure or if input ends before the game does.
pub fn play_session<R, W, P, G>(
    input: &mut R,
    output: &mut W,
    prompts: &mut P,
    config: &PlayConfig,
    rng: &mut G,
) -> Result<Game>
where
    R: BufRead,
    W: Write,
    P: Write,
    G: Rng,
{
    write_banner(prompts)?;

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => read_difficulty(input, output, prompts)?,
    };
    write_difficulty(output, difficulty)?;
    debug!(
        pegs = difficulty.pegs(),
        colors = difficulty.colors(),
        rule = %config.rule,
        "difficulty set"
    );

    let mut game = Game::new(difficulty, config.rule);

    let secret_prompt = format!(
        "Enter the secret ({} numbers from 1 to {}, all zeros for random)",
        difficulty.pegs(),
        difficulty.colors()
    );
    let secret = read_combination(input, output, prompts, difficulty, &secret_prompt)?;
    let source = game
        .set_secret(secret, rng)
        .context("secret rejected after validation")?;
    write_secret_source(output, source)?;

    let guess_prompt = format!(
        "Enter a guess ({} numbers, all zeros to give up)",
        difficulty.pegs()
    );
    loop {
        let guess = read_combination(input, output, prompts, difficulty, &guess_prompt)?;
        let outcome = game
            .submit_guess(guess.clone())
            .context("guess rejected after validation")?;
        write_guess(output, game.guesses(), &guess)?;

        match outcome {
            GuessOutcome::Scored(feedback) => write_feedback(output, feedback)?,
            GuessOutcome::Won { guesses } => {
                write_won(output, guesses)?;
                break;
            }
            GuessOutcome::Lost { secret } => {
                write_lost(output, &secret)?;
                break;
            }
        }
    }

    output.flush()?;
    Ok(game)
}

/// Ask for `pegs colors` until a readable line arrives
fn read_difficulty<R: BufRead, W: Write, P: Write>(
    input: &mut R,
    output: &mut W,
    prompts: &mut P,
) -> Result<Difficulty> {
    loop {
        write_prompt(prompts, "Enter the number of pegs and colors")?;
        let line = read_line(input)?;
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => write_input_error(output, &err)?,
        }
    }
}

/// Ask for a combination until a valid one arrives
///
/// Any invalid line, out-of-range digit included, is reported and the
/// whole combination is entered again.
fn read_combination<R: BufRead, W: Write, P: Write>(
    input: &mut R,
    output: &mut W,
    prompts: &mut P,
    difficulty: Difficulty,
    prompt: &str,
) -> Result<Combination> {
    loop {
        write_prompt(prompts, prompt)?;
        let line = read_line(input)?;
        match Combination::parse(&line, difficulty) {
            Ok(combination) => return Ok(combination),
            Err(err) => {
                debug!(%err, "combination rejected");
                write_input_error(output, &err)?;
            }
        }
    }
}

/// Read the next non-blank line
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("unexpected end of input before the game finished");
        }
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use std::io::Cursor;

    fn play(script: &str, config: &PlayConfig) -> (Result<Game>, String) {
        let (result, out, _) = play_with_prompts(script, config);
        (result, out)
    }

    fn play_with_prompts(script: &str, config: &PlayConfig) -> (Result<Game>, String, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut prompts = Vec::new();
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
        let result = play_session(&mut input, &mut output, &mut prompts, config, &mut rng);
        (
            result,
            String::from_utf8(output).unwrap(),
            String::from_utf8(prompts).unwrap(),
        )
    }

    /// Transcript lines of a game played without color
    fn transcript(script: &str) -> Vec<String> {
        colored::control::set_override(false);
        let (result, out) = play(script, &PlayConfig::default());
        result.unwrap();
        out.lines().map(str::to_string).collect()
    }

    #[test]
    fn session_transcript_given_secret() {
        let lines = transcript("4 6\n1 2 3 4\n1 3 2 5\n1 2 3 4\n");
        assert_eq!(
            lines,
            [
                "Playing Mastermind with 4 pegs and 6 possible colors.",
                "Using given secret.",
                "",
                "Guess 1: 1 3 2 5",
                "1 Right place",
                "2 Wrong place",
                "",
                "Guess 2: 1 2 3 4",
                "You won!",
                "It took you 2 guesses.",
            ]
        );
    }

    #[test]
    fn session_transcript_give_up() {
        let lines = transcript("4 6\n6 5 4 3\n1 1 1 1\n0 0 0 0\n");
        assert_eq!(
            lines,
            [
                "Playing Mastermind with 4 pegs and 6 possible colors.",
                "Using given secret.",
                "",
                "Guess 1: 1 1 1 1",
                "0 Right place",
                "0 Wrong place",
                "",
                "Guess 2: 0 0 0 0",
                "You lost.",
                "The secret was 6 5 4 3.",
            ]
        );
    }

    #[test]
    fn session_transcript_reports_rejected_input_on_its_own_line() {
        let lines = transcript("4 6\n1 2 3 4\n1 2 3 9\n1 2 3 4\n");
        assert_eq!(
            lines,
            [
                "Playing Mastermind with 4 pegs and 6 possible colors.",
                "Using given secret.",
                "",
                "Numbers must be between 1 and 6.",
                "",
                "Guess 1: 1 2 3 4",
                "You won!",
                "It took you 1 guess.",
            ]
        );
    }

    #[test]
    fn session_prompts_stay_out_of_transcript() {
        let (game, out, prompts) =
            play_with_prompts("4 6\n1 2 3 4\n1 2 3 4\n", &PlayConfig::default());

        assert_eq!(game.unwrap().phase(), Phase::Won);
        assert!(out.lines().any(|line| line.starts_with("Playing Mastermind")));
        assert!(!out.contains("Enter"));
        assert!(!out.contains("MASTERMIND"));
        assert!(prompts.contains("MASTERMIND"));
        assert!(prompts.contains("Enter the number of pegs and colors: "));
        assert!(prompts.contains("Enter the secret (4 numbers from 1 to 6, all zeros for random): "));
        assert!(prompts.contains("Enter a guess (4 numbers, all zeros to give up): "));
    }

    #[test]
    fn session_given_secret_won() {
        let (game, out) = play(
            "4 6\n1 2 3 4\n1 3 2 5\n1 2 3 4\n",
            &PlayConfig::default(),
        );
        let game = game.unwrap();

        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.guesses(), 2);
        assert!(out.contains("Playing Mastermind with 4 pegs and 6 possible colors.\n"));
        assert!(out.contains("Using given secret.\n\n"));
        assert!(out.contains("Guess 1: 1 3 2 5\n1 Right place\n2 Wrong place\n\n"));
        assert!(out.contains("Guess 2: 1 2 3 4\n"));
        assert!(out.contains("You won!"));
        assert!(out.contains("It took you 2 guesses."));
    }

    #[test]
    fn session_won_first_try() {
        let (game, out) = play("4 6\n6 6 6 6\n6 6 6 6\n", &PlayConfig::default());
        assert_eq!(game.unwrap().guesses(), 1);
        assert!(out.contains("It took you 1 guess."));
        // No feedback for a winning guess
        assert!(!out.contains("Right place"));
    }

    #[test]
    fn session_give_up_reveals_secret() {
        let (game, out) = play("4 6\n6 5 4 3\n1 1 1 1\n0 0 0 0\n", &PlayConfig::default());
        let game = game.unwrap();

        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.guesses(), 2);
        assert!(out.contains("Guess 2: 0 0 0 0\n"));
        assert!(out.contains("You lost."));
        assert!(out.contains("The secret was 6 5 4 3."));
    }

    #[test]
    fn session_clamps_difficulty() {
        let (game, out) = play("1 50\n1 20\n0 0\n", &PlayConfig::default());
        let game = game.unwrap();

        assert_eq!(game.difficulty(), Difficulty::new(2, 20));
        assert!(out.contains("Playing Mastermind with 2 pegs and 20 possible colors."));
    }

    #[test]
    fn session_reenters_out_of_range_combination() {
        let (game, out) = play(
            "4 6\n1 2 3 9\n1 2 3 4\n7 1 1 1\n1 2 3 4\n",
            &PlayConfig::default(),
        );
        let game = game.unwrap();

        assert_eq!(game.phase(), Phase::Won);
        // Rejected guesses do not count
        assert_eq!(game.guesses(), 1);
        assert_eq!(out.matches("Numbers must be between 1 and 6.").count(), 2);
        assert!(out.contains("It took you 1 guess."));
    }

    #[test]
    fn session_reenters_malformed_lines() {
        let (game, out) = play(
            "four six\n4 6\n1 2 3\n1 two 3 4\n\n1 2 3 4\n1 2 3 4\n",
            &PlayConfig::default(),
        );

        assert_eq!(game.unwrap().phase(), Phase::Won);
        assert!(out.contains("'four' is not a number."));
        assert!(out.contains("Enter exactly 4 numbers, got 3."));
        assert!(out.contains("'two' is not a number."));
    }

    #[test]
    fn session_random_secret() {
        let config = PlayConfig {
            seed: Some(7),
            ..PlayConfig::default()
        };
        let (game, out) = play("5 8\n0 0 0 0 0\n0 0 0 0 0\n", &config);
        let game = game.unwrap();

        assert!(out.contains("Using random secret.\n\n"));
        assert_eq!(game.phase(), Phase::Lost);
        assert!(!game.secret().is_all_zeros());
        assert!(game.secret().validate(game.difficulty()).is_ok());
        assert!(out.contains(&format!("The secret was {}.", game.secret())));
    }

    #[test]
    fn session_preset_difficulty_skips_prompt() {
        let config = PlayConfig {
            difficulty: Some(Difficulty::new(3, 6)),
            ..PlayConfig::default()
        };
        let (game, out, prompts) = play_with_prompts("1 2 3\n1 2 3\n", &config);

        assert_eq!(game.unwrap().guesses(), 1);
        assert!(!prompts.contains("number of pegs and colors"));
        assert!(prompts.contains("Enter the secret (3 numbers from 1 to 6"));
        assert!(out.contains("Playing Mastermind with 3 pegs and 6 possible colors."));
    }

    #[test]
    fn session_standard_scoring() {
        let config = PlayConfig {
            rule: ScoringRule::Standard,
            ..PlayConfig::default()
        };
        let (game, out) = play("4 6\n1 1 2 2\n2 2 1 1\n0 0 0 0\n", &config);

        assert_eq!(game.unwrap().phase(), Phase::Lost);
        assert!(out.contains("0 Right place\n4 Wrong place\n"));
    }

    #[test]
    fn session_end_of_input_is_an_error() {
        let (result, _) = play("4 6\n1 2 3 4\n1 1 1 1\n", &PlayConfig::default());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
