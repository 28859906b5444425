//! Session state: the aggregate root for one play-through

use crate::core::{LetterScore, Word, is_winning};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Lifecycle status of a session
///
/// `Playing` is the only non-terminal state. Serde names follow the remote
/// authority's wire protocol (`timeout` for `TimedOut`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won,
    Lost,
    #[serde(rename = "timeout")]
    TimedOut,
}

impl Status {
    /// Terminal states admit no further transitions
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::TimedOut => "timeout",
        };
        write!(f, "{name}")
    }
}

/// One submitted attempt: the word, its per-letter scores, and whether it won
///
/// Immutable once created; retained for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    scores: Vec<LetterScore>,
    correct: bool,
}

impl Guess {
    /// Build a guess from a word and its evaluation
    #[must_use]
    pub fn new(word: Word, scores: Vec<LetterScore>) -> Self {
        let correct = is_winning(&scores);
        Self {
            word,
            scores,
            correct,
        }
    }

    /// The guessed word (uppercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Per-letter scores, in guess order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.scores
    }

    /// Whether every letter scored `Correct`
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }
}

/// One game session from creation to terminal status
///
/// Owns the hidden target (when evaluated locally), the append-only guess
/// history, the in-progress input buffer, and the status derived from them.
/// Mutation happens only through the state machine's submit/timeout paths.
#[derive(Debug, Clone)]
pub struct Session {
    /// Hidden target. `None` for sessions whose target lives with a remote
    /// authority until revealed.
    target: Option<Word>,
    word_length: usize,
    max_tries: usize,
    guesses: Vec<Guess>,
    buffer: String,
    status: Status,
    time_limit: Option<Duration>,
}

impl Session {
    /// Create a locally-evaluated session around a known target
    #[must_use]
    pub fn local(target: Word, max_tries: usize, time_limit: Option<Duration>) -> Self {
        let word_length = target.len();
        Self {
            target: Some(target),
            word_length,
            max_tries,
            guesses: Vec::new(),
            buffer: String::new(),
            status: Status::Playing,
            time_limit,
        }
    }

    /// Create a session whose target is held by a remote authority
    #[must_use]
    pub fn remote(word_length: usize, max_tries: usize, time_limit: Option<Duration>) -> Self {
        Self {
            target: None,
            word_length,
            max_tries,
            guesses: Vec::new(),
            buffer: String::new(),
            status: Status::Playing,
            time_limit,
        }
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Fixed word length chosen at creation
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Maximum number of guesses
    #[inline]
    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Guesses submitted so far, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Most recent guess, if any
    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Guesses still available
    #[inline]
    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        self.max_tries.saturating_sub(self.guesses.len())
    }

    /// Time limit for timed sessions
    #[inline]
    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// The target word, revealed only once the session is terminal
    ///
    /// `None` while playing (the target stays hidden), and for remote sessions
    /// whose authority never disclosed it.
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            self.target.as_ref()
        } else {
            None
        }
    }

    /// Target access for the evaluation backend
    pub(crate) fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// The in-progress guess buffer
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a letter to the in-progress buffer
    ///
    /// Non-letters and input past the word length are ignored; no-op once the
    /// session is terminal.
    pub fn push_letter(&mut self, letter: char) {
        if self.status.is_terminal() || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.buffer.len() < self.word_length {
            self.buffer.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last letter from the in-progress buffer
    pub fn pop_letter(&mut self) {
        self.buffer.pop();
    }

    /// Drain the in-progress buffer
    pub fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Append a locally-evaluated guess and recompute status
    ///
    /// Caller guarantees the session is `Playing`; the derived status follows
    /// the invariants: `Won` iff the new guess is fully correct, `Lost` iff
    /// the try budget is exhausted without a win.
    pub(crate) fn apply_guess(&mut self, guess: Guess) {
        debug_assert!(!self.status.is_terminal());
        debug_assert!(self.guesses.len() < self.max_tries);

        let won = guess.is_correct();
        self.guesses.push(guess);
        self.buffer.clear();

        self.status = if won {
            Status::Won
        } else if self.guesses.len() >= self.max_tries {
            Status::Lost
        } else {
            Status::Playing
        };
    }

    /// Overwrite derived state with an authoritative remote view
    ///
    /// The remote authority's history and status are canonical; local copies
    /// are replaced wholesale. A revealed target is recorded when present.
    pub(crate) fn apply_authoritative(
        &mut self,
        guesses: Vec<Guess>,
        status: Status,
        target: Option<Word>,
    ) {
        self.guesses = guesses;
        self.status = status;
        self.buffer.clear();
        if target.is_some() {
            self.target = target;
        }
    }

    /// Move the session to `TimedOut`
    ///
    /// Returns false (and changes nothing) if the session is already
    /// terminal. A target revealed by the authority is recorded.
    pub(crate) fn timeout(&mut self, revealed: Option<Word>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::TimedOut;
        self.buffer.clear();
        if revealed.is_some() {
            self.target = revealed;
        }
        true
    }
}
