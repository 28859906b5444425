//! Core domain types for the game
//!
//! Pure, deterministic pieces with no session or I/O dependencies: validated
//! words and the guess-evaluation algorithm.

mod feedback;
mod word;

pub use feedback::{EvaluateError, LetterScore, evaluate, is_winning, to_emoji};
pub use word::{Word, WordError};
