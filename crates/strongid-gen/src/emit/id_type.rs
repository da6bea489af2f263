// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier wrapper template.
//!
//! Emits the `{TypeName}Id` value type: a single public `value` field,
//! the `empty`/`new` factories, `try_parse`/`parse`, and the `StrongId`,
//! `Default`, `Display` and `FromStr` impls. The wire prefix is computed
//! here, at generation time, and baked in as `StrongId::PREFIX`.

use quote::quote;

use super::GeneratedArtifact;
use crate::{context::EntityStrongIdContext, error::EmitError};

pub fn generate(ctx: &EntityStrongIdContext) -> Result<GeneratedArtifact, EmitError> {
    let id_ident = ctx.id_ident();
    let value_ty = super::backing_type(ctx)?;
    let prefix = ctx.wire_prefix()?;

    let type_doc = format!(
        " Strongly-typed identifier for `{}`, backed by `{}`.",
        ctx.type_name(),
        ctx.id_type_name()
    );
    let display_doc = format!(" Renders as `{prefix}_{{lowercased value}}`.");

    let tokens = quote! {
        #[doc = #type_doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct #id_ident {
            /// The wrapped backing value.
            pub value: #value_ty
        }

        impl #id_ident {
            /// Identifier wrapping the backing type's zero value.
            #[must_use]
            pub fn empty() -> Self {
                Self {
                    value: <#value_ty as ::strongid::IdValue>::zero()
                }
            }

            /// Identifier wrapping a freshly generated unique value.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    value: <#value_ty as ::strongid::IdValue>::new_unique()
                }
            }

            /// Parse the wire format, reporting only success or failure.
            #[must_use]
            pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
                ::strongid::codec::deserialize(text)
            }

            /// Parse the wire format.
            pub fn parse(
                text: &str
            ) -> ::core::result::Result<Self, ::strongid::ParseIdError> {
                ::strongid::codec::parse(text)
            }
        }

        impl ::strongid::StrongId for #id_ident {
            type Value = #value_ty;

            const PREFIX: &'static str = #prefix;

            fn from_value(value: Self::Value) -> Self {
                Self { value }
            }

            fn value(&self) -> &Self::Value {
                &self.value
            }
        }

        impl ::core::default::Default for #id_ident {
            fn default() -> Self {
                Self::empty()
            }
        }

        #[doc = #display_doc]
        impl ::core::fmt::Display for #id_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&::strongid::codec::serialize(self))
            }
        }

        impl ::core::str::FromStr for #id_ident {
            type Err = ::strongid::ParseIdError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(text)
            }
        }
    };

    Ok(super::render(
        format!("strongid.{}Id.g.rs", ctx.qualified_name()),
        tokens
    ))
}
