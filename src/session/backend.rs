//! Evaluation backends: where guesses are scored
//!
//! A session is bound to one backend at creation. `LocalBackend` validates and
//! evaluates in-process; `RemoteBackend` defers to an external authority whose
//! responses are canonical. Both surface a rejected dictionary word through the
//! same `InvalidWord` channel so callers handle it uniformly.

use super::state::{Guess, Session, Status};
use super::SessionError;
use crate::core::{LetterScore, Word, evaluate};
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Outcome of a backend evaluation
#[derive(Debug, Clone)]
pub enum Verdict {
    /// Evaluated in-process; the state machine appends it and recomputes
    /// status from the invariants.
    Local(Guess),
    /// Canonical state from a remote authority; overwrites locally derived
    /// history and status wholesale.
    Authoritative {
        tries: Vec<Guess>,
        status: Status,
        target: Option<Word>,
    },
}

/// A pluggable evaluation backend
///
/// Implementations must not mutate the session; the state machine applies the
/// returned verdict so failed calls leave the session untouched.
pub trait EvalBackend {
    /// Score a normalized, length-checked guess
    fn evaluate(&mut self, session: &Session, guess: &Word) -> Result<Verdict, SessionError>;

    /// Confirm a timeout, returning the revealed target when known
    ///
    /// Remote implementations round-trip to the authority; the state machine
    /// falls back to a local `TimedOut` if this fails.
    fn evaluate_timeout(&mut self, session: &Session) -> Result<Option<Word>, SessionError>;

    /// Notify the backend that the player abandoned the session
    fn leave(&mut self, session: &Session) -> Result<(), SessionError>;
}

/// In-process evaluation against the session's own target
#[derive(Debug, Clone)]
pub struct LocalBackend {
    words: Arc<WordSource>,
}

impl LocalBackend {
    #[must_use]
    pub fn new(words: Arc<WordSource>) -> Self {
        Self { words }
    }
}

impl EvalBackend for LocalBackend {
    fn evaluate(&mut self, session: &Session, guess: &Word) -> Result<Verdict, SessionError> {
        if !self.words.is_accepted(guess.text()) {
            return Err(SessionError::InvalidWord(guess.text().to_string()));
        }

        let target = session
            .target()
            .ok_or_else(|| SessionError::InvalidInput("local session has no target".to_string()))?;

        let scores =
            evaluate(guess, target).map_err(|e| SessionError::InvalidInput(e.to_string()))?;

        Ok(Verdict::Local(Guess::new(guess.clone(), scores)))
    }

    fn evaluate_timeout(&mut self, session: &Session) -> Result<Option<Word>, SessionError> {
        Ok(session.target().cloned())
    }

    fn leave(&mut self, _session: &Session) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Identifier the remote authority assigned to a session
pub type SessionId = i64;

/// Failure modes of a remote authority call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The authority rejected the guess as not a dictionary word
    InvalidWord(String),
    /// Transport or server failure
    Failed(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "Invalid word: {word}"),
            Self::Failed(msg) => write!(f, "Remote authority failure: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<RemoteError> for SessionError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::InvalidWord(word) => Self::InvalidWord(word),
            RemoteError::Failed(msg) => Self::Remote(msg),
        }
    }
}

/// Request/response contract with the remote authority
///
/// Transport is a caller concern; implementations typically wrap an HTTP
/// client speaking the JSON wire format below.
pub trait RemoteAuthority {
    /// Submit a raw guess for a session; the reply carries the authoritative
    /// history and status
    fn play(&mut self, id: SessionId, guess: &str) -> Result<PlayReply, RemoteError>;

    /// Report a timeout; the reply reveals the target
    fn timeout(&mut self, id: SessionId) -> Result<TimeoutReply, RemoteError>;

    /// Abandon the session server-side
    fn leave(&mut self, id: SessionId) -> Result<(), RemoteError>;
}

/// Per-letter verdict as carried on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterReply {
    pub letter: String,
    pub status: LetterScore,
}

/// One evaluated guess as carried on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReply {
    pub guess_word: String,
    pub letter_result_array: Vec<LetterReply>,
    pub is_correct: bool,
}

/// Successful reply to a guess submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayReply {
    pub id: SessionId,
    pub tries: Vec<GuessReply>,
    pub game_status: Status,
    /// Present only once the game has ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Reply to a timeout report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutReply {
    pub id: SessionId,
    pub game_status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Error payload distinguishing a rejected word from generic failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_guess_word: Option<String>,
}

impl ErrorReply {
    /// Classify this payload the way the state machine expects
    #[must_use]
    pub fn into_remote_error(self) -> RemoteError {
        match self.invalid_guess_word {
            Some(word) => RemoteError::InvalidWord(word),
            None => RemoteError::Failed(self.error),
        }
    }
}

/// Backend that defers evaluation to a remote authority
#[derive(Debug)]
pub struct RemoteBackend<A: RemoteAuthority> {
    authority: A,
    id: SessionId,
}

impl<A: RemoteAuthority> RemoteBackend<A> {
    #[must_use]
    pub fn new(authority: A, id: SessionId) -> Self {
        Self { authority, id }
    }

    /// The authority-assigned session identifier
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    fn convert_target(target: Option<String>) -> Result<Option<Word>, SessionError> {
        target
            .map(|t| {
                Word::new(&t)
                    .map_err(|e| SessionError::Remote(format!("malformed target '{t}': {e}")))
            })
            .transpose()
    }

    fn convert_tries(tries: Vec<GuessReply>) -> Result<Vec<Guess>, SessionError> {
        tries
            .into_iter()
            .map(|reply| {
                let word = Word::new(&reply.guess_word).map_err(|e| {
                    SessionError::Remote(format!("malformed guess '{}': {e}", reply.guess_word))
                })?;
                let scores = reply
                    .letter_result_array
                    .iter()
                    .map(|l| l.status)
                    .collect::<Vec<_>>();
                if scores.len() != word.len() {
                    return Err(SessionError::Remote(format!(
                        "guess '{}' carries {} letter results",
                        word,
                        scores.len()
                    )));
                }
                Ok(Guess::new(word, scores))
            })
            .collect()
    }
}

impl<A: RemoteAuthority> EvalBackend for RemoteBackend<A> {
    fn evaluate(&mut self, _session: &Session, guess: &Word) -> Result<Verdict, SessionError> {
        let reply = self.authority.play(self.id, guess.text())?;

        Ok(Verdict::Authoritative {
            tries: Self::convert_tries(reply.tries)?,
            status: reply.game_status,
            target: Self::convert_target(reply.target_word)?,
        })
    }

    fn evaluate_timeout(&mut self, _session: &Session) -> Result<Option<Word>, SessionError> {
        let reply = self.authority.timeout(self.id)?;
        Self::convert_target(reply.target_word)
    }

    fn leave(&mut self, _session: &Session) -> Result<(), SessionError> {
        self.authority.leave(self.id).map_err(SessionError::from)
    }
}
