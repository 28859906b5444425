//! The session state machine: validates, evaluates, and applies guesses
//!
//! `Playing` transitions to `Won`, `Lost`, or `TimedOut`; all three are
//! terminal. Every operation either fully applies or leaves the session
//! byte-for-byte unchanged.

use super::SessionError;
use super::backend::{EvalBackend, LocalBackend, Verdict};
use super::state::{Guess, Session, Status};
use crate::core::Word;
use crate::wordlists::WordSource;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Parameters for a new session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub word_length: usize,
    pub max_tries: usize,
    pub time_limit: Option<Duration>,
}

impl Default for SessionConfig {
    /// Standard Wordle configuration: five letters, six tries, untimed
    fn default() -> Self {
        Self {
            word_length: 5,
            max_tries: 6,
            time_limit: None,
        }
    }
}

/// The updated view returned to the caller after a successful submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The newly recorded guess
    pub guess: Guess,
    /// Status after the guess was applied
    pub status: Status,
}

/// One session's state machine, bound to an evaluation backend at creation
#[derive(Debug)]
pub struct StateMachine<B: EvalBackend> {
    session: Session,
    backend: B,
}

impl StateMachine<LocalBackend> {
    /// Create a locally-evaluated session
    ///
    /// Picks a random target of the configured length from `words`.
    ///
    /// # Errors
    /// `NoListForLength` if no list covers the configured length;
    /// `InvalidInput` if `max_tries` is zero.
    pub fn local(words: &Arc<WordSource>, config: &SessionConfig) -> Result<Self, SessionError> {
        if config.max_tries == 0 {
            return Err(SessionError::InvalidInput(
                "max_tries must be at least 1".to_string(),
            ));
        }

        let target = words.random_target(config.word_length)?;
        info!(
            "session created: length={} max_tries={} timed={}",
            config.word_length,
            config.max_tries,
            config.time_limit.is_some()
        );

        Ok(Self {
            session: Session::local(target, config.max_tries, config.time_limit),
            backend: LocalBackend::new(Arc::clone(words)),
        })
    }
}

impl<B: EvalBackend> StateMachine<B> {
    /// Wrap an existing session and backend
    ///
    /// Used for sessions created by a remote authority, where the target is
    /// server-side and the session id lives in the backend.
    pub fn with_backend(session: Session, backend: B) -> Self {
        Self { session, backend }
    }

    /// Read access to the session for rendering
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for in-progress buffer editing
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Submit a guess
    ///
    /// Normalizes the raw input (trim, uppercase), validates length and
    /// dictionary membership (the latter via the backend, local or remote),
    /// evaluates, appends, and recomputes status.
    ///
    /// # Errors
    /// - `NotPlaying` if the session is already terminal
    /// - `WrongLength` if the normalized guess has the wrong letter count
    /// - `InvalidWord` if the guess is not an accepted word
    /// - `Remote` on authority failure or malformed reply
    ///
    /// All error paths leave the session unchanged.
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        let status = self.session.status();
        if status.is_terminal() {
            return Err(SessionError::NotPlaying(status));
        }

        let cleaned = raw.trim();
        let actual = cleaned.chars().count();
        let expected = self.session.word_length();
        if actual != expected {
            return Err(SessionError::WrongLength { expected, actual });
        }

        // Non-letter input can never be a dictionary word; surface it the
        // same way so the player just retypes.
        let word = Word::new(cleaned)
            .map_err(|_| SessionError::InvalidWord(cleaned.to_uppercase()))?;

        debug!("evaluating guess {word}");
        let outcome = match self.backend.evaluate(&self.session, &word)? {
            Verdict::Local(guess) => {
                self.session.apply_guess(guess.clone());
                SubmitOutcome {
                    guess,
                    status: self.session.status(),
                }
            }
            Verdict::Authoritative {
                tries,
                status,
                target,
            } => {
                let Some(last) = tries.last().cloned() else {
                    return Err(SessionError::Remote(
                        "authority returned an empty guess history".to_string(),
                    ));
                };
                self.session.apply_authoritative(tries, status, target);
                SubmitOutcome {
                    guess: last,
                    status: self.session.status(),
                }
            }
        };

        info!(
            "guess {} recorded ({}/{}), status={}",
            outcome.guess.word(),
            self.session.guesses().len(),
            self.session.max_tries(),
            outcome.status
        );
        Ok(outcome)
    }

    /// Force the session into `TimedOut`
    ///
    /// No-op on an already-terminal session, so the timer racing a winning
    /// guess is harmless. Asks the backend to confirm (a remote round-trip
    /// when an authority is involved) and falls back to a local transition if
    /// that fails; a later authoritative reply does not reopen the session.
    pub fn force_timeout(&mut self) -> Status {
        if self.session.status().is_terminal() {
            return self.session.status();
        }

        match self.backend.evaluate_timeout(&self.session) {
            Ok(revealed) => {
                self.session.timeout(revealed);
            }
            Err(err) => {
                warn!("timeout confirmation failed, keeping local verdict: {err}");
                self.session.timeout(None);
            }
        }

        info!("session timed out");
        self.session.status()
    }

    /// Abandon the session
    ///
    /// Consumes the machine, so no further operations are possible. The
    /// backend is notified best-effort.
    pub fn abandon(mut self) {
        if let Err(err) = self.backend.leave(&self.session) {
            warn!("leave notification failed: {err}");
        }
        info!("session abandoned");
    }
}
