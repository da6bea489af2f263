// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Wire-prefix casing transform.
//!
//! [`snake_prefix`] produces the identifier prefix that ends up in
//! persisted and transmitted strings, so its behavior is a format
//! contract: ASCII case mapping only, no locale-sensitive folding, and
//! the exact underscore-insertion rule below. Generated *Rust*
//! identifiers (function names and the like) are cased with
//! `convert_case` instead — only the wire prefix needs this transform.

use crate::error::CasingError;

/// Strip one trailing `"Id"` suffix from a type name.
///
/// Applied to the entity type name before [`snake_prefix`], so that an
/// entity already named with the suffix (`PaymentId`) still yields the
/// prefix `payment` rather than `payment_id`. Interior occurrences are
/// part of the name and kept. A name that *is* `"Id"` is returned
/// unchanged.
#[must_use]
pub fn strip_id_suffix(type_name: &str) -> &str {
    match type_name.strip_suffix("Id") {
        Some(stem) if !stem.is_empty() => stem,
        _ => type_name
    }
}

/// Convert a type name to its lower snake-case wire prefix.
///
/// Lowercases the first character; every subsequent uppercase character
/// is emitted as an underscore followed by its lowercase form. Names
/// shorter than two characters are lowercased as-is — there is no
/// position an underscore could go.
///
/// # Errors
///
/// Empty or whitespace-only input is a usage error and fails with
/// [`CasingError`].
///
/// # Examples
///
/// ```rust
/// use strongid_gen::utils::casing::snake_prefix;
///
/// assert_eq!(snake_prefix("User").unwrap(), "user");
/// assert_eq!(snake_prefix("OrderLineItem").unwrap(), "order_line_item");
/// ```
pub fn snake_prefix(type_name: &str) -> Result<String, CasingError> {
    if type_name.trim().is_empty() {
        return Err(CasingError);
    }

    let mut chars = type_name.chars();
    let first = chars.next().ok_or(CasingError)?;

    let mut prefix = String::with_capacity(type_name.len() + 4);
    prefix.push(first.to_ascii_lowercase());

    for c in chars {
        if c.is_ascii_uppercase() {
            prefix.push('_');
            prefix.push(c.to_ascii_lowercase());
        } else {
            prefix.push(c);
        }
    }

    Ok(prefix)
}
