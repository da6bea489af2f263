// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the generation pipeline.
//!
//! Discovery mismatches are *not* errors — the resolver simply yields no
//! binding and the candidate is skipped. The types here cover the failure
//! modes that must surface to the host: cancellation, unparseable input,
//! colliding file keys and emitter misuse.

use thiserror::Error;

use crate::cancel::Cancelled;

/// Error raised by the casing transform on empty or whitespace-only
/// input.
///
/// Type names reaching the emitter come from parsed identifiers and are
/// never empty, so in practice this marks misuse of the transform itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("type name must not be empty or whitespace-only")]
pub struct CasingError;

/// Failure of a single artifact emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// The context carried an unusable type name.
    #[error(transparent)]
    InvalidTypeName(#[from] CasingError),

    /// The projected backing type display does not parse back into a
    /// type path.
    #[error("backing type `{0}` is not a valid type path")]
    InvalidBackingType(String)
}

/// Failure of a whole generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The host raised the cancellation token; the pass was abandoned
    /// between units of work.
    #[error("generation pass cancelled by the host")]
    Cancelled,

    /// A source file in the forest is not parseable Rust.
    #[error("failed to parse `{file}`: {message}")]
    Parse {
        /// Forest-relative name of the offending file.
        file: String,
        /// Parser diagnostic text.
        message: String
    },

    /// Two distinct declarations project to the same generated file
    /// keys. Surfaced instead of letting processing order decide which
    /// artifact survives.
    #[error(
        "colliding declarations for `{qualified}`: backed by `{first}` and `{second}` — \
         at most one strong-id declaration per type name and namespace is allowed"
    )]
    FileKeyCollision {
        /// The shared qualified name (file-key stem).
        qualified: String,
        /// Backing type of the first declaration seen.
        first: String,
        /// Backing type of the conflicting declaration.
        second: String
    },

    /// An artifact template failed.
    #[error(transparent)]
    Emit(#[from] EmitError)
}

impl From<Cancelled> for GenerateError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}
