//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render feedback as key pegs: `●` right, `○` wrong, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pegs: usize) -> String {
    let empty = pegs.saturating_sub(feedback.right() + feedback.wrong());
    format!(
        "{}{}{}",
        "●".repeat(feedback.right()),
        "○".repeat(feedback.wrong()),
        "·".repeat(empty)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural-aware count, e.g. `1 guess` / `3 guesses`
#[must_use]
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
