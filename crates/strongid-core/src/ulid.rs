// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`IdValue`] implementation for [`ulid::Ulid`].

use crate::value::IdValue;

impl IdValue for ::ulid::Ulid {
    fn zero() -> Self {
        Self::nil()
    }

    fn new_unique() -> Self {
        Self::new()
    }

    fn to_text(&self) -> String {
        self.to_string()
    }

    // Crockford base32 decoding is case-insensitive, so the lowercased
    // wire form converts back without special handling.
    fn from_text(text: &str) -> Option<Self> {
        Self::from_string(text).ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::value::IdValue;

    #[test]
    fn zero_is_nil() {
        assert!(<::ulid::Ulid as IdValue>::zero().is_nil());
    }

    #[test]
    fn new_unique_values_differ() {
        let a = <::ulid::Ulid as IdValue>::new_unique();
        let b = <::ulid::Ulid as IdValue>::new_unique();

        assert_ne!(a, b);
    }

    #[test]
    fn lowercased_text_converts_back() {
        let value = <::ulid::Ulid as IdValue>::new_unique();
        let lower = value.to_text().to_ascii_lowercase();

        assert_eq!(<::ulid::Ulid as IdValue>::from_text(&lower), Some(value));
    }

    #[test]
    fn garbage_text_is_rejected() {
        assert!(<::ulid::Ulid as IdValue>::from_text("not-a-ulid").is_none());
        assert!(<::ulid::Ulid as IdValue>::from_text("").is_none());
    }
}
