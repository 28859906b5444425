//! Terminal rendering for sessions and guesses

use crate::core::{LetterScore, to_emoji};
use crate::session::{Guess, Session, Status};
use colored::Colorize;
use std::fmt::Write as _;

/// Render one guess as colored letters
///
/// Green for correct, yellow for present, dim for absent.
#[must_use]
pub fn render_guess(guess: &Guess) -> String {
    let mut line = String::new();

    for (i, &letter) in guess.word().letters().iter().enumerate() {
        let ch = (letter as char).to_string();
        let cell = match guess.scores()[i] {
            LetterScore::Correct => ch.bright_green().bold(),
            LetterScore::Present => ch.bright_yellow().bold(),
            LetterScore::Absent => ch.bright_black(),
        };
        let _ = write!(line, "{cell} ");
    }

    line.trim_end().to_string()
}

/// Render the full board: every recorded guess plus blank rows for the
/// remaining tries
#[must_use]
pub fn render_board(session: &Session) -> String {
    let mut board = String::new();

    for guess in session.guesses() {
        let _ = writeln!(board, "  {}", render_guess(guess));
    }

    let blank_row = "_ ".repeat(session.word_length());
    for _ in 0..session.remaining_tries() {
        let _ = writeln!(board, "  {}", blank_row.trim_end());
    }

    board
}

/// Emoji share summary, like the classic share card
///
/// Header shows tries used out of the budget, `X` for a loss or timeout.
#[must_use]
pub fn share_summary(session: &Session) -> String {
    let tries = if session.status() == Status::Won {
        session.guesses().len().to_string()
    } else {
        "X".to_string()
    };

    let mut summary = format!("Wordle {tries}/{}\n", session.max_tries());
    for guess in session.guesses() {
        let _ = writeln!(summary, "{}", to_emoji(guess.scores()));
    }

    summary
}

/// One-line banner for a terminal status
#[must_use]
pub fn status_banner(session: &Session) -> String {
    let target = session
        .revealed_target()
        .map_or_else(|| "unknown".to_string(), ToString::to_string);

    match session.status() {
        Status::Playing => format!(
            "{} tries left",
            session.remaining_tries()
        ),
        Status::Won => format!(
            "{} Solved in {} {}!",
            "🎉".bold(),
            session.guesses().len(),
            if session.guesses().len() == 1 {
                "guess"
            } else {
                "guesses"
            }
        ),
        Status::Lost => format!("❌ Out of tries! The word was {}", target.bright_yellow().bold()),
        Status::TimedOut => format!("⏰ Time's up! The word was {}", target.bright_yellow().bold()),
    }
}
