// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text/JSON adapter template.
//!
//! Emits the serde impls for the wrapper: serialization writes the wire
//! format, deserialization delegates to `parse` and surfaces its failure
//! through the deserializer's own error type.

use quote::quote;

use super::GeneratedArtifact;
use crate::{context::EntityStrongIdContext, error::EmitError};

pub fn generate(ctx: &EntityStrongIdContext) -> Result<GeneratedArtifact, EmitError> {
    let id_ident = ctx.id_ident();

    let tokens = quote! {
        impl ::serde::Serialize for #id_ident {
            fn serialize<S>(
                &self,
                serializer: S
            ) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer
            {
                serializer.serialize_str(&::strongid::codec::serialize(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #id_ident {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(
                    deserializer
                )?;

                Self::parse(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };

    Ok(super::render(
        format!("strongid.{}IdSerde.g.rs", ctx.qualified_name()),
        tokens
    ))
}
