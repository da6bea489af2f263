// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Inert `#[strong_id]` marker attribute for the `strongid` generator.
//!
//! The attribute carries no expansion of its own — the annotated item is
//! returned unchanged. Code generation happens out of band: the
//! `strongid-gen` pipeline scans source files for this marker and emits
//! the wrapper family as separate artifacts. The attribute exists so that
//! marked source keeps compiling, and so that obviously malformed marker
//! usage is rejected by the compiler instead of being silently skipped by
//! the scanner.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strongid::strong_id;
//! use ulid::Ulid;
//!
//! #[strong_id(Ulid)]
//! pub struct User {
//!     pub username: String,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Item, PathArguments, Type, spanned::Spanned};

/// Marks a type as having a strongly-typed identifier backed by the given
/// value type.
///
/// Takes exactly one argument: the backing value type, as a plain type
/// path (`Ulid`, `uuid::Uuid`). Applicable to structs and enums only, and
/// not meant to be repeated.
///
/// The marked item is emitted unchanged; the `strongid-gen` pipeline picks
/// the marker up from source and generates the `{Name}Id` wrapper, its
/// serde adapter, the store converter and the convention helper.
#[proc_macro_attribute]
pub fn strong_id(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = TokenStream2::from(input.clone());

    match validate(args.into(), &item) {
        Ok(()) => input,
        Err(err) => {
            // Keep the item in the output so follow-on errors stay sane.
            let mut tokens = err.to_compile_error();
            tokens.extend(item);
            tokens.into()
        }
    }
}

/// Check the argument shape and target kind without touching the item.
fn validate(args: TokenStream2, item: &TokenStream2) -> syn::Result<()> {
    let parsed: Item = syn::parse2(item.clone())?;

    if !matches!(parsed, Item::Struct(_) | Item::Enum(_)) {
        return Err(syn::Error::new(
            item.span(),
            "#[strong_id] may only be applied to structs and enums"
        ));
    }

    let span = args.span();
    let backing: Type = syn::parse2(args).map_err(|_| {
        syn::Error::new(
            span,
            "#[strong_id] takes exactly one argument: the backing value type, e.g. #[strong_id(Ulid)]"
        )
    })?;

    let Type::Path(type_path) = &backing else {
        return Err(syn::Error::new(
            span,
            "#[strong_id] argument must be a plain type path"
        ));
    };

    if type_path.qself.is_some()
        || type_path
            .path
            .segments
            .iter()
            .any(|segment| !matches!(segment.arguments, PathArguments::None))
    {
        return Err(syn::Error::new(
            span,
            "#[strong_id] argument must be a plain type path without generic arguments"
        ));
    }

    Ok(())
}
