// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Source generation pipeline for strongly-typed identifiers.
//!
//! Scans a forest of Rust source files for type declarations marked with
//! `#[strong_id(BackingType)]` and deterministically emits, per marked
//! type, four coupled artifacts — the `{TypeName}Id` wrapper, its serde
//! adapter, a persistence value converter and a convention-registration
//! helper — plus two fixed artifacts wiring the marker attribute and the
//! codec support into the generated tree.
//!
//! # Pipeline
//!
//! ```text
//! forest ──► scan (structural)  ──► resolve (marker + argument)
//!        ──► project (EntityStrongIdContext, the value-equality key)
//!        ──► dedup / collision check
//!        ──► emit (four pure templates, memoized by ArtifactCache)
//! ```
//!
//! Every stage is pure and keyed by value: unchanged declarations
//! project to equal contexts, equal contexts hit the cache, and the
//! output set is independent of file order and parallelism.
//!
//! # Quick Start
//!
//! ```rust
//! use strongid_gen::{CancelToken, GeneratorSession, SourceFile};
//!
//! let forest = [SourceFile::new(
//!     "src/domain.rs",
//!     r"
//!     #[strong_id(Ulid)]
//!     pub struct User {
//!         pub username: String,
//!     }
//!     "
//! )];
//!
//! let mut session = GeneratorSession::new();
//! let output = session.run(&forest, &CancelToken::new()).unwrap();
//!
//! // Two fixed artifacts + four per marked type.
//! assert_eq!(output.artifacts.len(), 6);
//! ```
//!
//! # Driving incrementally
//!
//! The session is the unit a host driver keeps alive across passes.
//! Re-running over an unchanged forest re-uses every cached emission;
//! editing one declaration re-emits only that declaration's four
//! artifacts. The host remains responsible for publishing artifacts by
//! their [`file_key`](GeneratedArtifact::file_key) and for parsing, I/O
//! and scheduling policy.

pub mod cache;
pub mod cancel;
pub mod context;
pub mod emit;
pub mod error;
pub mod registrar;
pub mod resolve;
pub mod scan;
pub mod session;
pub mod utils;

pub use cache::ArtifactCache;
pub use cancel::{CancelToken, Cancelled};
pub use context::EntityStrongIdContext;
pub use emit::GeneratedArtifact;
pub use error::{CasingError, EmitError, GenerateError};
pub use resolve::{Marker, ResolvedBinding};
pub use scan::{Candidate, SourceFile, TypeDecl};
pub use session::{GenerationOutput, GeneratorSession};
