// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`IdValue`] implementation for `uuid::Uuid`.

use crate::value::IdValue;

impl IdValue for ::uuid::Uuid {
    fn zero() -> Self {
        Self::nil()
    }

    // v7 keeps identifiers time-ordered, matching the ULID default.
    fn new_unique() -> Self {
        Self::now_v7()
    }

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn from_text(text: &str) -> Option<Self> {
        Self::parse_str(text).ok()
    }
}
