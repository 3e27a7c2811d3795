//! Command implementations

pub mod analyze;
pub mod play;
pub mod score;

pub use analyze::{AnalysisResult, MAX_ANALYZE_SPACE, analyze_guess};
pub use play::{PlayConfig, play_session, run_play};
pub use score::{ScoreResult, score_guess};
