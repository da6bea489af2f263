// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Candidate discovery over the syntax forest.
//!
//! Scanning is purely structural: a candidate is any nominal type
//! declaration (struct or enum) carrying at least one attribute. The
//! predicate is O(1) per item and performs no resolution at all — it is
//! the cheap gate in front of the resolver, since the overwhelming
//! majority of declarations in a real tree are not marked.
//!
//! Candidates are produced in source order (forest registration order,
//! then textual order within a file). Nothing downstream depends on that
//! order semantically, but keeping it stable keeps diagnostics and
//! output ordering deterministic across runs.

use syn::{Attribute, Ident, Item, ItemEnum, ItemStruct};

/// One unit of the syntax forest: a named source file.
///
/// The name is forest-relative and only used for ordering and
/// diagnostics; the pipeline never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Forest-relative file name, e.g. `"src/domain/user.rs"`.
    pub name: String,
    /// Full source text of the file.
    pub source: String
}

impl SourceFile {
    /// Bundle a name and source text into a forest unit.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into()
        }
    }
}

/// A nominal type declaration the scanner shortlisted.
#[derive(Debug, Clone, Copy)]
pub enum TypeDecl<'ast> {
    /// A `struct` declaration.
    Struct(&'ast ItemStruct),
    /// An `enum` declaration.
    Enum(&'ast ItemEnum)
}

impl<'ast> TypeDecl<'ast> {
    /// The declared type name.
    #[must_use]
    pub fn ident(&self) -> &'ast Ident {
        match self {
            Self::Struct(decl) => &decl.ident,
            Self::Enum(decl) => &decl.ident
        }
    }

    /// Attributes attached to the declaration.
    #[must_use]
    pub fn attrs(&self) -> &'ast [Attribute] {
        match self {
            Self::Struct(decl) => &decl.attrs,
            Self::Enum(decl) => &decl.attrs
        }
    }
}

/// A shortlisted declaration plus the module path enclosing it.
#[derive(Debug, Clone)]
pub struct Candidate<'ast> {
    /// The declaration node.
    pub decl: TypeDecl<'ast>,
    /// Enclosing inline-module segments, outermost first; empty at file
    /// root.
    pub module_path: Vec<String>
}

/// Shortlist every attributed struct/enum declaration in a parsed file,
/// in textual order, descending into inline modules.
#[must_use]
pub fn scan_file(file: &syn::File) -> Vec<Candidate<'_>> {
    let mut found = Vec::new();
    let mut module_path = Vec::new();
    walk_items(&file.items, &mut module_path, &mut found);
    found
}

fn walk_items<'ast>(
    items: &'ast [Item],
    module_path: &mut Vec<String>,
    found: &mut Vec<Candidate<'ast>>
) {
    for item in items {
        match item {
            Item::Struct(decl) if !decl.attrs.is_empty() => found.push(Candidate {
                decl: TypeDecl::Struct(decl),
                module_path: module_path.clone()
            }),
            Item::Enum(decl) if !decl.attrs.is_empty() => found.push(Candidate {
                decl: TypeDecl::Enum(decl),
                module_path: module_path.clone()
            }),
            Item::Mod(module) => {
                // Out-of-line `mod foo;` has no body here; its file is a
                // separate forest unit.
                if let Some((_, nested)) = &module.content {
                    module_path.push(module.ident.to_string());
                    walk_items(nested, module_path, found);
                    module_path.pop();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scan_file;

    fn parse(source: &str) -> syn::File {
        syn::parse_file(source).unwrap()
    }

    #[test]
    fn attributed_struct_and_enum_are_shortlisted() {
        let file = parse(
            r"
            #[strong_id(Ulid)]
            pub struct User {
                pub name: String,
            }

            #[derive(Debug)]
            pub enum Role {
                Admin,
                Member,
            }
            "
        );

        let candidates = scan_file(&file);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].decl.ident(), "User");
        assert_eq!(candidates[1].decl.ident(), "Role");
    }

    #[test]
    fn unattributed_declarations_are_skipped() {
        let file = parse(
            r"
            pub struct Plain {
                pub value: u32,
            }

            pub enum Bare {
                One,
            }

            pub fn not_a_type() {}
            "
        );

        assert!(scan_file(&file).is_empty());
    }

    #[test]
    fn inline_modules_contribute_their_path() {
        let file = parse(
            r"
            mod domain {
                mod users {
                    #[strong_id(Ulid)]
                    pub struct User {
                        pub name: String,
                    }
                }
            }
            "
        );

        let candidates = scan_file(&file);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].module_path, ["domain", "users"]);
    }

    #[test]
    fn source_order_is_preserved() {
        let file = parse(
            r"
            #[a]
            struct First;

            mod inner {
                #[b]
                struct Second;
            }

            #[c]
            struct Third;
            "
        );

        let names: Vec<String> = scan_file(&file)
            .iter()
            .map(|c| c.decl.ident().to_string())
            .collect();

        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn scan_is_restartable() {
        let file = parse("#[a] struct Only;");

        assert_eq!(scan_file(&file).len(), scan_file(&file).len());
    }
}
