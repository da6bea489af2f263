// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fixed, candidate-independent artifacts.
//!
//! Every generation pass emits the same two artifacts regardless of what
//! the scanner finds: the marker surface and the serialization-support
//! surface. In Rust an attribute cannot be *defined* in ordinary
//! generated source — the definition lives in the `strongid-marker`
//! proc-macro crate — so the marker artifact is the generated wiring
//! that puts the attribute in scope next to the generated modules; the
//! support artifact does the same for the codec and traits used by the
//! wrapper and adapter artifacts.

use quote::quote;

use crate::emit::{self, GeneratedArtifact};

/// The two fixed artifacts, in stable order: marker first, support
/// second.
#[must_use]
pub fn fixed_artifacts() -> Vec<GeneratedArtifact> {
    vec![marker_artifact(), support_artifact()]
}

fn marker_artifact() -> GeneratedArtifact {
    let tokens = quote! {
        #[doc = " Marker attribute: `#[strong_id(BackingType)]`."]
        #[doc = ""]
        #[doc = " Applicable to structs and enums; takes exactly one type"]
        #[doc = " argument, the backing identifier value type."]
        pub use ::strongid::strong_id;
    };

    emit::render("strongid.Marker.g.rs".to_string(), tokens)
}

fn support_artifact() -> GeneratedArtifact {
    let tokens = quote! {
        #[doc = " Serialization support used by the generated wrappers:"]
        #[doc = " the `{prefix}_{value}` codec and the capability traits."]
        pub use ::strongid::{IdValue, ModelConfig, ParseIdError, StrongId, ValueConverter, codec};
    };

    emit::render("strongid.Support.g.rs".to_string(), tokens)
}
