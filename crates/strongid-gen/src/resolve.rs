// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic resolution of shortlisted candidates.
//!
//! A [`Candidate`](crate::scan::Candidate) becomes a [`ResolvedBinding`]
//! when one of its attributes is a recognized marker application with a
//! well-formed argument: exactly one plain type path naming the backing
//! value type. Everything else — foreign attributes, wrong arity,
//! non-type arguments — falls through to "no binding". Absence is the
//! common case and never an error.

use syn::{Attribute, Ident, Meta, Path, PathArguments, Type};

use crate::scan::Candidate;

/// The recognized marker attribute.
///
/// Matching is path-based: the bare attribute name is accepted, as is a
/// two-segment spelling qualified by one of the known exporting crates
/// (so `#[strong_id(...)]`, `#[strongid::strong_id(...)]` and
/// `#[strongid_marker::strong_id(...)]` all resolve to the same marker).
/// Both the name and the crate list are pluggable for hosts that re-wrap
/// the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    crates: Vec<String>
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            name: "strong_id".to_string(),
            crates: vec!["strongid".to_string(), "strongid_marker".to_string()]
        }
    }
}

impl Marker {
    /// A marker with a custom attribute name and the default crate list.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Extend the list of crates the attribute may be qualified with.
    #[must_use]
    pub fn with_crate(mut self, krate: impl Into<String>) -> Self {
        self.crates.push(krate.into());
        self
    }

    /// The attribute name this marker matches.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an attribute path denotes this marker.
    fn matches(&self, path: &Path) -> bool {
        let mut segments = path.segments.iter();

        match (segments.next(), segments.next(), segments.next()) {
            (Some(only), None, _) => only.ident == self.name,
            (Some(qualifier), Some(name), None) => {
                name.ident == self.name
                    && self.crates.iter().any(|krate| qualifier.ident == krate)
            }
            _ => false
        }
    }
}

/// A declaration bound to its backing identifier value type.
#[derive(Debug, Clone)]
pub struct ResolvedBinding {
    /// The entity type name.
    pub entity: Ident,
    /// Enclosing module path of the declaration, outermost first.
    pub namespace: Vec<String>,
    /// The backing value type named by the marker argument.
    pub id_type: Path
}

/// Resolve a candidate against the marker.
///
/// The first attribute that fully matches (marker path, list form,
/// single plain type path argument) wins; malformed marker applications
/// are skipped the same as foreign attributes, so a declaration carrying
/// both `#[strong_id]` and `#[strong_id(Ulid)]` still resolves.
#[must_use]
pub fn resolve(candidate: &Candidate<'_>, marker: &Marker) -> Option<ResolvedBinding> {
    for attr in candidate.decl.attrs() {
        if !marker.matches(attr.path()) {
            continue;
        }

        let Some(id_type) = marker_argument(attr) else {
            continue;
        };

        return Some(ResolvedBinding {
            entity: candidate.decl.ident().clone(),
            namespace: candidate.module_path.clone(),
            id_type
        });
    }

    None
}

/// Extract the single backing-type argument, or `None` if the attribute
/// does not have exactly that shape.
fn marker_argument(attr: &Attribute) -> Option<Path> {
    // `#[strong_id]` / `#[strong_id = ...]` carry no argument list.
    if !matches!(attr.meta, Meta::List(_)) {
        return None;
    }

    // A type parse consumes the whole argument list, so `(A, B)` and
    // arbitrary expressions fail here rather than needing arity checks.
    let ty: Type = attr.parse_args().ok()?;

    let Type::Path(type_path) = ty else {
        return None;
    };

    if type_path.qself.is_some() {
        return None;
    }

    let path = type_path.path;

    if path
        .segments
        .iter()
        .any(|segment| !matches!(segment.arguments, PathArguments::None))
    {
        return None;
    }

    Some(path)
}
