// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capability traits for backing value types and identifier wrappers.
//!
//! [`IdValue`] is the explicit contract a backing type must satisfy for a
//! wrapper to be generated over it; [`StrongId`] is the trait every
//! generated wrapper implements. Both are object-safe-free plain traits so
//! the codec can stay fully monomorphized.

/// Capability contract for a backing identifier value type.
///
/// A type backing a generated identifier must provide a zero sentinel, a
/// fresh-unique-value factory and a lossless text representation. The
/// contract is checked by the compiler when the generated wrapper is
/// built — there is no runtime discovery.
///
/// # Text conversion
///
/// `to_text` and `from_text` must round-trip:
/// `from_text(&v.to_text()) == Some(v)` for every value `v`. The codec
/// lowercases the text on the wire, so `from_text` must accept the
/// lowercased form of anything `to_text` produces.
pub trait IdValue: Sized {
    /// The zero/empty sentinel value (e.g. the nil ULID).
    fn zero() -> Self;

    /// A freshly generated unique value, time-ordered where the backing
    /// type supports it (ULID, UUID v7).
    fn new_unique() -> Self;

    /// Canonical text form of the value.
    fn to_text(&self) -> String;

    /// Parse the canonical text form back into a value.
    ///
    /// Returns `None` on any conversion failure; parsing never panics.
    fn from_text(text: &str) -> Option<Self>;
}

/// Trait implemented by every generated identifier wrapper type.
///
/// Carries the wire prefix computed at generation time from the entity
/// type name, and the conversions between the wrapper and its backing
/// value. The [`codec`](crate::codec) functions are generic over this
/// trait.
pub trait StrongId: Sized {
    /// The backing value type.
    type Value: IdValue;

    /// Wire prefix, e.g. `"user"` for a `UserId` wrapper. Always
    /// lowercase snake case, never empty.
    const PREFIX: &'static str;

    /// Wrap a backing value.
    fn from_value(value: Self::Value) -> Self;

    /// Borrow the backing value.
    fn value(&self) -> &Self::Value;
}
