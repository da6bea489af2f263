// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cooperative cancellation for generation passes.
//!
//! The host driver hands a [`CancelToken`] to
//! [`GeneratorSession::run`](crate::GeneratorSession::run) and may raise
//! it from any thread when the source changes mid-pass. The pipeline
//! checks the token between units of work (files, contexts) — never in
//! the middle of one — so a cancelled pass leaves no partial artifact
//! behind.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering}
};

use thiserror::Error;

/// Raised cancellation observed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generation pass cancelled by the host")]
pub struct Cancelled;

/// Cloneable cancellation flag shared between the host and a running
/// pass.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the token. Idempotent; there is no way to un-cancel.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the token has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Fail with [`Cancelled`] if the token has been raised.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() { Err(Cancelled) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancelToken::new();

        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn raised_token_is_seen_by_clones() {
        let token = CancelToken::new();
        let observer = token.clone();

        token.cancel();

        assert!(observer.is_cancelled());
        assert!(observer.check().is_err());
    }
}
