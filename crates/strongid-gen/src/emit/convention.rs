// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convention-registration template.
//!
//! Emits `configure_{type_name}_id_conventions`, the helper a host's
//! bootstrap calls once per wrapper to install the store converter as
//! the model-wide conversion for that identifier type.

use convert_case::{Case, Casing};
use proc_macro2::Span;
use quote::quote;
use syn::Ident;

use super::{GeneratedArtifact, store_converter::converter_ident};
use crate::{context::EntityStrongIdContext, error::EmitError};

pub fn generate(ctx: &EntityStrongIdContext) -> Result<GeneratedArtifact, EmitError> {
    let id_ident = ctx.id_ident();
    let converter = converter_ident(ctx);

    let fn_ident = Ident::new(
        &format!(
            "configure_{}_conventions",
            id_ident.to_string().to_case(Case::Snake)
        ),
        Span::call_site()
    );
    let doc = format!(
        " Register the `{id_ident}` ⇄ `String` conversion as a model-wide convention."
    );

    let tokens = quote! {
        #[doc = #doc]
        pub fn #fn_ident(config: &mut ::strongid::ModelConfig) {
            config.have_conversion::<#id_ident, #converter>();
        }
    };

    Ok(super::render(
        format!("strongid.{}IdConventions.g.rs", ctx.qualified_name()),
        tokens
    ))
}
