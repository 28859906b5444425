//! Countdown timer for timed sessions
//!
//! Runs on its own thread, counting down from the limit at a fixed tick. On
//! expiry it invokes a caller-supplied action exactly once (typically
//! `force_timeout` on a shared session). Resettable while running, cancelable
//! at any time, and joined on drop so it cannot fire after teardown.

use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default tick resolution
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

enum Ctl {
    Reset,
    Cancel,
}

/// A cancelable countdown
pub struct Countdown {
    ctl: Sender<Ctl>,
    remaining_ms: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Start counting down from `limit`, firing `on_expire` at zero
    ///
    /// The action runs on the timer thread. The countdown stops after firing;
    /// a timer is single-shot.
    pub fn start<F>(limit: Duration, tick: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let remaining_ms = Arc::new(AtomicU64::new(millis(limit)));
        let remaining = Arc::clone(&remaining_ms);
        let (ctl, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut on_expire = Some(on_expire);
            let mut left = limit;

            loop {
                match rx.recv_timeout(tick) {
                    Ok(Ctl::Reset) => {
                        left = limit;
                        remaining.store(millis(left), Ordering::Relaxed);
                    }
                    Ok(Ctl::Cancel) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {
                        left = left.saturating_sub(tick);
                        remaining.store(millis(left), Ordering::Relaxed);

                        if left.is_zero() {
                            debug!("countdown expired");
                            if let Some(fire) = on_expire.take() {
                                fire();
                            }
                            return;
                        }
                    }
                }
            }
        });

        Self {
            ctl,
            remaining_ms,
            handle: Some(handle),
        }
    }

    /// Start with the default tick resolution
    pub fn start_default<F>(limit: Duration, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::start(limit, DEFAULT_TICK, on_expire)
    }

    /// Time left on the clock
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::from_millis(self.remaining_ms.load(Ordering::Relaxed))
    }

    /// Rewind the clock to the full limit
    ///
    /// No effect once the countdown has expired or been canceled.
    pub fn reset(&self) {
        let _ = self.ctl.send(Ctl::Reset);
    }

    /// Stop the countdown without firing; idempotent
    pub fn cancel(&self) {
        let _ = self.ctl.send(Ctl::Cancel);
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        let _ = self.ctl.send(Ctl::Cancel);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
