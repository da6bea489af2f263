// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence value-converter template.
//!
//! Emits `{TypeName}IdToStringConverter`, a unit struct implementing
//! `ValueConverter<{TypeName}Id>` over the same two codec directions as
//! `Display` and `parse` — the storage form *is* the wire form.

use proc_macro2::Span;
use quote::quote;
use syn::Ident;

use super::GeneratedArtifact;
use crate::{context::EntityStrongIdContext, error::EmitError};

/// Identifier of the generated converter type for a context.
pub(crate) fn converter_ident(ctx: &EntityStrongIdContext) -> Ident {
    Ident::new(
        &format!("{}IdToStringConverter", ctx.type_name()),
        Span::call_site()
    )
}

pub fn generate(ctx: &EntityStrongIdContext) -> Result<GeneratedArtifact, EmitError> {
    let id_ident = ctx.id_ident();
    let converter = converter_ident(ctx);

    let doc = format!(" Bidirectional `{id_ident}` ⇄ `String` conversion for the persistence layer.");

    let tokens = quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct #converter;

        impl ::strongid::ValueConverter<#id_ident> for #converter {
            fn to_store(&self, id: &#id_ident) -> ::std::string::String {
                ::strongid::codec::serialize(id)
            }

            fn from_store(
                &self,
                raw: &str
            ) -> ::core::result::Result<#id_ident, ::strongid::ParseIdError> {
                #id_ident::parse(raw)
            }
        }
    };

    Ok(super::render(
        format!("strongid.{}IdStoreConverter.g.rs", ctx.qualified_name()),
        tokens
    ))
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::context::EntityStrongIdContext;

    #[test]
    fn converter_maps_both_directions() {
        let ctx = EntityStrongIdContext::new("User", None, "Ulid");
        let artifact = generate(&ctx).unwrap();

        assert_eq!(artifact.file_key, "strongid.UserIdStoreConverter.g.rs");
        assert!(artifact.source.contains("pub struct UserIdToStringConverter"));
        assert!(artifact.source.contains("fn to_store"));
        assert!(artifact.source.contains("fn from_store"));
        assert!(syn::parse_file(&artifact.source).is_ok());
    }
}
