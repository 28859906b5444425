//! Wordle Game Engine
//!
//! A Wordle-style word-guessing game: fixed-length guesses against a hidden
//! target, per-letter feedback with exact duplicate-letter handling, a session
//! state machine with a try budget, and optional timed play. Evaluation is
//! pluggable: in-process by default, or deferred to a remote authority whose
//! responses are canonical.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::session::{SessionConfig, StateMachine, Status};
//! use wordle_game::wordlists::WordSource;
//! use std::sync::Arc;
//!
//! let words = Arc::new(WordSource::builtin());
//! let mut game = StateMachine::local(&words, &SessionConfig::default()).unwrap();
//!
//! let outcome = game.submit_guess("crane").unwrap();
//! for score in outcome.guess.scores() {
//!     println!("{score:?}");
//! }
//! assert!(matches!(outcome.status, Status::Playing | Status::Won));
//! ```

// Core domain types
pub mod core;

// Game sessions and evaluation backends
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
