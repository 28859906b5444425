//! Game sessions: state, state machine, evaluation backends, and the timer

mod backend;
mod machine;
mod state;
mod timer;

pub use backend::{
    ErrorReply, EvalBackend, GuessReply, LetterReply, LocalBackend, PlayReply, RemoteAuthority,
    RemoteBackend, RemoteError, SessionId, TimeoutReply, Verdict,
};
pub use machine::{SessionConfig, StateMachine, SubmitOutcome};
pub use state::{Guess, Session, Status};
pub use timer::{Countdown, DEFAULT_TICK};

use std::fmt;

/// Error type for session operations
///
/// `WrongLength` and `InvalidWord` are expected, recoverable conditions the
/// player corrects and retries; the rest indicate caller misuse,
/// configuration problems, or authority failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Guess letter count differs from the session's word length
    WrongLength { expected: usize, actual: usize },
    /// Guess is not an accepted dictionary word; carries the word for display
    InvalidWord(String),
    /// Operation attempted on a terminal session
    NotPlaying(Status),
    /// No word list registered for the requested length
    NoListForLength(usize),
    /// Malformed arguments from a caller that should have validated
    InvalidInput(String),
    /// Remote authority transport failure or malformed reply
    Remote(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::InvalidWord(word) => write!(f, "{word} is not a valid word"),
            Self::NotPlaying(status) => {
                write!(f, "Session is no longer playing (status: {status})")
            }
            Self::NoListForLength(length) => {
                write!(f, "No word list registered for length {length}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::Remote(msg) => write!(f, "Remote authority failure: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<crate::wordlists::NoListForLength> for SessionError {
    fn from(err: crate::wordlists::NoListForLength) -> Self {
        Self::NoListForLength(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        let err = SessionError::WrongLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Guess must be 5 letters, got 4");

        let err = SessionError::InvalidWord("ZZZZZ".to_string());
        assert_eq!(err.to_string(), "ZZZZZ is not a valid word");

        let err = SessionError::NotPlaying(Status::Won);
        assert!(err.to_string().contains("won"));
    }

    #[test]
    fn no_list_error_converts() {
        let err: SessionError = crate::wordlists::NoListForLength(9).into();
        assert_eq!(err, SessionError::NoListForLength(9));
    }
}
