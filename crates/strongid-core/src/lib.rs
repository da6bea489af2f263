// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Core traits and types for `strongid` generated identifier code.
//!
//! This crate provides the runtime contract that generated wrapper types
//! compile against. It can also be used standalone for hand-written
//! identifier types.
//!
//! # Overview
//!
//! - [`IdValue`] — capability contract a backing value type must satisfy
//! - [`StrongId`] — trait implemented by every generated wrapper type
//! - [`codec`] — the `{prefix}_{value}` wire format shared by text, JSON
//!   and storage representations
//! - [`ParseIdError`] — parse failure surfaced by [`codec::parse`]
//! - [`ValueConverter`] / [`ModelConfig`] — persistence conversion surface
//!
//! # Wire format
//!
//! Every identifier renders as `{prefix}_{lowercased value text}`, where
//! the prefix is the snake-cased entity name baked into the wrapper at
//! generation time:
//!
//! ```rust,ignore
//! let id = UserId::new();
//! assert!(id.to_string().starts_with("user_"));
//! assert_eq!(UserId::parse(&id.to_string())?, id);
//! ```
//!
//! # Backing types
//!
//! [`IdValue`] is implemented for [`ulid::Ulid`](https://docs.rs/ulid)
//! (feature `ulid`, on by default) and `uuid::Uuid` (feature `uuid`).
//! Any other single-value type can opt in by implementing the trait.

mod convert;
mod error;
mod value;

pub mod codec;
pub mod prelude;

#[cfg(feature = "ulid")]
mod ulid;

#[cfg(feature = "uuid")]
mod uuid;

pub use convert::{ModelConfig, ValueConverter};
pub use error::ParseIdError;
pub use value::{IdValue, StrongId};
