// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

//! # strongid
//!
//! One crate, the whole runtime surface. Re-exports:
//! - the [`strong_id`] marker attribute from `strongid-marker`
//! - all types from `strongid-core` ([`IdValue`], [`StrongId`],
//!   [`codec`], [`ParseIdError`], [`ValueConverter`], [`ModelConfig`])
//!
//! Generated code references everything through `::strongid::…`, so a
//! host project depends on this crate (plus `strongid-gen` at build
//! time) and nothing else.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use strongid::strong_id;
//! use ulid::Ulid;
//!
//! #[strong_id(Ulid)]
//! pub struct User {
//!     pub username: String,
//! }
//!
//! // After generation:
//! let id = UserId::new();
//! assert!(id.to_string().starts_with("user_"));
//! assert_eq!(UserId::parse(&id.to_string())?, id);
//! ```

// Re-export the marker attribute
// Re-export all core types
pub use strongid_core::*;
pub use strongid_marker::strong_id;
