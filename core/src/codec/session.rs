//! codec/session.rs
//! Live-session accounting.
//!
//! Each session holds a `SessionToken`; the token's `Drop` runs on every exit
//! path, so `live_sessions()` returns to zero once all calls have returned.
//! The counter is diagnostic only and never influences a call's result.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::SessionKind;

static LIVE_SESSIONS: AtomicUsize = AtomicUsize::new(0);

/// Number of encoder and decoder sessions currently open in this process.
pub fn live_sessions() -> usize {
    LIVE_SESSIONS.load(Ordering::Acquire)
}

#[derive(Debug)]
pub(crate) struct SessionToken {
    kind: SessionKind,
}

impl SessionToken {
    pub(crate) fn acquire(kind: SessionKind) -> Self {
        LIVE_SESSIONS.fetch_add(1, Ordering::AcqRel);
        log::trace!(target: crate::constants::LOG_TARGET, "{} session opened", kind);
        Self { kind }
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        LIVE_SESSIONS.fetch_sub(1, Ordering::AcqRel);
        log::trace!(target: crate::constants::LOG_TARGET, "{} session released", self.kind);
    }
}
