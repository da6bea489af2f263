// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `{prefix}_{value}` wire codec.
//!
//! Single source of truth for the text layout shared by `Display`, the
//! serde adapter and the persistence converter of every generated wrapper.
//! The layout is a persisted contract: prefix, one underscore, then the
//! lowercased canonical text of the backing value.
//!
//! [`deserialize`] is the one-bit validate-then-branch entry point;
//! [`parse`] is the failing variant used by `Parse`/`FromStr`.

use crate::{
    error::ParseIdError,
    value::{IdValue, StrongId}
};

/// Render an identifier in the wire format.
///
/// # Example
///
/// ```rust,ignore
/// // For a UserId wrapping ULID 01AN4Z07BY79KA1307SR9X4MV3:
/// assert_eq!(codec::serialize(&id), "user_01an4z07by79ka1307sr9x4mv3");
/// ```
pub fn serialize<T: StrongId>(id: &T) -> String {
    format!("{}_{}", T::PREFIX, id.value().to_text().to_ascii_lowercase())
}

/// Parse the wire format back into an identifier.
///
/// Returns `None` for empty or whitespace-only input, input that does not
/// start with `{PREFIX}_`, and a remainder the backing type cannot
/// convert. No failure cause is reported; callers that need one use
/// [`parse`].
pub fn deserialize<T: StrongId>(text: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }

    let value_text = text.strip_prefix(T::PREFIX)?.strip_prefix('_')?;

    T::Value::from_text(value_text).map(T::from_value)
}

/// Parse the wire format, failing with [`ParseIdError`] on mismatch.
pub fn parse<T: StrongId>(text: &str) -> Result<T, ParseIdError> {
    deserialize(text).ok_or_else(|| ParseIdError::new(T::PREFIX))
}
