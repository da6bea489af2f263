// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The projected generation context.
//!
//! [`EntityStrongIdContext`] is the pipeline's unit of incremental
//! comparison: three plain strings, compared by value. Everything the
//! emitter needs is derived from these fields, so two structurally equal
//! contexts always emit byte-identical artifacts — which is exactly what
//! lets the cache skip re-emission across passes.

use proc_macro2::Span;
use syn::Ident;

use crate::{
    error::CasingError,
    resolve::ResolvedBinding,
    utils::casing::{snake_prefix, strip_id_suffix}
};

/// Minimal value-comparable record summarizing one generation job.
///
/// Equality is field-wise string equality; no syntax-tree references or
/// spans survive the projection. Redeclaring the same entity across
/// recompiles therefore projects to an equal context and does not
/// re-trigger emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityStrongIdContext {
    type_name: String,
    namespace: Option<String>,
    id_type_name: String
}

impl EntityStrongIdContext {
    /// Build a context directly from its three fields.
    ///
    /// [`project`](Self::project) is the usual constructor; this one
    /// exists for drivers and tests that already hold the strings.
    pub fn new(
        type_name: impl Into<String>,
        namespace: Option<String>,
        id_type_name: impl Into<String>
    ) -> Self {
        Self {
            type_name: type_name.into(),
            namespace,
            id_type_name: id_type_name.into()
        }
    }

    /// Project a resolved binding into its comparison context.
    #[must_use]
    pub fn project(binding: &ResolvedBinding) -> Self {
        Self {
            type_name: binding.entity.to_string(),
            namespace: if binding.namespace.is_empty() {
                None
            } else {
                Some(binding.namespace.join("::"))
            },
            id_type_name: display_path(&binding.id_type)
        }
    }

    /// The entity type name, e.g. `"User"`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Enclosing namespace (`"a::b"`), or `None` at file root.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Canonical display of the backing value type, as it appears in
    /// generated source.
    #[must_use]
    pub fn id_type_name(&self) -> &str {
        &self.id_type_name
    }

    /// Identifier of the generated wrapper type, e.g. `UserId`.
    #[must_use]
    pub fn id_ident(&self) -> Ident {
        Ident::new(&format!("{}Id", self.type_name), Span::call_site())
    }

    /// Wire prefix for the wrapper, e.g. `"user"` — the type name with
    /// one trailing `"Id"` stripped, snake-cased.
    pub fn wire_prefix(&self) -> Result<String, CasingError> {
        snake_prefix(strip_id_suffix(&self.type_name))
    }

    /// Dotted qualified name, the stem shared by the four generated
    /// file keys, e.g. `"domain.users.User"`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace.replace("::", "."), self.type_name),
            None => self.type_name.clone()
        }
    }
}

/// Render a type path exactly as generated source spells it: segments
/// joined by `::`, a leading `::` kept when written. No spaces, no
/// alias resolution — the display depends on nothing but the path
/// itself.
fn display_path(path: &syn::Path) -> String {
    let mut rendered = String::new();

    if path.leading_colon.is_some() {
        rendered.push_str("::");
    }

    for (index, segment) in path.segments.iter().enumerate() {
        if index > 0 {
            rendered.push_str("::");
        }
        rendered.push_str(&segment.ident.to_string());
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::EntityStrongIdContext;
    use crate::{resolve, scan};

    fn context_of(source: &str) -> EntityStrongIdContext {
        let file = syn::parse_file(source).unwrap();
        let candidates = scan::scan_file(&file);
        let binding = candidates
            .iter()
            .find_map(|candidate| resolve::resolve(candidate, &resolve::Marker::default()))
            .unwrap();

        EntityStrongIdContext::project(&binding)
    }

    #[test]
    fn projection_captures_all_three_fields() {
        let ctx = context_of(
            r"
            mod domain {
                #[strong_id(Ulid)]
                struct User;
            }
            "
        );

        assert_eq!(ctx.type_name(), "User");
        assert_eq!(ctx.namespace(), Some("domain"));
        assert_eq!(ctx.id_type_name(), "Ulid");
    }

    #[test]
    fn root_declaration_has_no_namespace() {
        let ctx = context_of("#[strong_id(Ulid)] struct User;");

        assert_eq!(ctx.namespace(), None);
        assert_eq!(ctx.qualified_name(), "User");
    }

    #[test]
    fn qualified_backing_type_displays_canonically() {
        let ctx = context_of("#[strong_id(uuid::Uuid)] struct Keyed;");

        assert_eq!(ctx.id_type_name(), "uuid::Uuid");
    }

    #[test]
    fn equality_is_structural_not_referential() {
        let source = r"
            mod api {
                #[strong_id(Ulid)]
                struct Session;
            }
        ";

        // Two independent parses, two independent projections.
        assert_eq!(context_of(source), context_of(source));
    }

    #[test]
    fn any_field_difference_breaks_equality() {
        let base = EntityStrongIdContext::new("User", None, "Ulid");

        assert_ne!(
            base,
            EntityStrongIdContext::new("Account", None, "Ulid")
        );
        assert_ne!(
            base,
            EntityStrongIdContext::new("User", Some("domain".into()), "Ulid")
        );
        assert_ne!(base, EntityStrongIdContext::new("User", None, "Uuid"));
    }

    #[test]
    fn wire_prefix_strips_trailing_id_and_snake_cases() {
        assert_eq!(
            EntityStrongIdContext::new("OrderLineItem", None, "Ulid")
                .wire_prefix()
                .unwrap(),
            "order_line_item"
        );
        assert_eq!(
            EntityStrongIdContext::new("PaymentId", None, "Ulid")
                .wire_prefix()
                .unwrap(),
            "payment"
        );
    }

    #[test]
    fn qualified_name_uses_dots() {
        let ctx = context_of(
            r"
            mod domain {
                mod users {
                    #[strong_id(Ulid)]
                    struct User;
                }
            }
            "
        );

        assert_eq!(ctx.qualified_name(), "domain.users.User");
    }
}
