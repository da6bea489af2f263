// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parse failure type for the wire codec.

use thiserror::Error;

/// Error returned when text does not match the identifier wire format.
///
/// Produced by [`codec::parse`](crate::codec::parse) and by the generated
/// `parse`/`FromStr` members. Carries only the expected prefix — the
/// non-failing path ([`codec::deserialize`](crate::codec::deserialize))
/// deliberately reports nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input string was not in the `{prefix}_<value>` identifier format")]
pub struct ParseIdError {
    prefix: &'static str
}

impl ParseIdError {
    pub(crate) const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The wire prefix the input was expected to start with.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }
}
