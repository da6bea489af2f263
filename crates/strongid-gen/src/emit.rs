// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact emission.
//!
//! Four independent template modules, one per artifact, each a pure
//! function of the [`EntityStrongIdContext`]. [`generate`] fans out to
//! all four. There are no hidden inputs — no clocks, no counters — so
//! emitting twice from equal contexts yields byte-identical text, which
//! the cache and the idempotence tests rely on.
//!
//! Generated code references the runtime exclusively through absolute
//! `::strongid::` paths so the artifacts compile in any module the host
//! drops them into.

mod convention;
mod id_type;
mod serde_adapter;
mod store_converter;

use proc_macro2::TokenStream;

use crate::{context::EntityStrongIdContext, error::EmitError};

/// Header line prepended to every generated source text.
const GENERATED_HEADER: &str = "// @generated by strongid-gen — do not edit by hand.";

/// One generated source text plus its deterministic file key.
///
/// The key is the host driver's unit of incremental publish/replace;
/// two distinct contexts never legally share one (the session enforces
/// this as a fatal diagnostic).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedArtifact {
    /// Deterministic file identifier, e.g. `"strongid.domain.UserId.g.rs"`.
    pub file_key: String,
    /// Complete generated source text.
    pub source: String
}

/// Emit the four coupled artifacts for one context: the identifier
/// wrapper, the serde adapter, the store converter and the convention
/// helper, in that fixed order.
pub fn generate(ctx: &EntityStrongIdContext) -> Result<Vec<GeneratedArtifact>, EmitError> {
    Ok(vec![
        id_type::generate(ctx)?,
        serde_adapter::generate(ctx)?,
        store_converter::generate(ctx)?,
        convention::generate(ctx)?,
    ])
}

/// Parse the context's backing-type display back into a quotable type.
pub(crate) fn backing_type(ctx: &EntityStrongIdContext) -> Result<syn::Type, EmitError> {
    syn::parse_str(ctx.id_type_name())
        .map_err(|_| EmitError::InvalidBackingType(ctx.id_type_name().to_string()))
}

/// Render a token stream into an artifact under the given file key.
pub(crate) fn render(file_key: String, tokens: TokenStream) -> GeneratedArtifact {
    GeneratedArtifact {
        file_key,
        source: format!("{GENERATED_HEADER}\n{tokens}\n")
    }
}
