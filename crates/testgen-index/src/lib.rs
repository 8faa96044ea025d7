//! Class lookup for the scaffolding generator.
//!
//! The generator never walks the file system or a classpath itself. It asks a [`SymbolIndex`]
//! for declarations by qualified name and treats a miss as "skip this step". [`MemoryIndex`] is
//! the in-memory implementation, built from a serialized [`ProjectModel`] plus the stubs in
//! [`MemoryIndex::with_builtin_libraries`].

mod builtin;
mod error;
pub mod lombok;
mod memory;

use std::collections::HashSet;

use testgen_model::{ClassDecl, ClassKind, FieldDecl, TypeRef};

pub use error::ModelError;
pub use memory::{load_java_file, IndexOptions, MemoryIndex, ProjectModel};

pub const JAVA_LANG_ENUM: &str = "java.lang.Enum";

/// Where a lookup may find classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    /// Project sources and every library.
    All,
    /// Project sources only.
    Project,
}

/// Query interface used by the generator.
pub trait SymbolIndex {
    fn find_class(&self, qualified_name: &str, scope: SearchScope) -> Option<&ClassDecl>;

    fn resolve(&self, ty: &TypeRef, scope: SearchScope) -> Option<&ClassDecl> {
        self.find_class(ty.class_name()?, scope)
    }
}

impl<T: SymbolIndex + ?Sized> SymbolIndex for &T {
    fn find_class(&self, qualified_name: &str, scope: SearchScope) -> Option<&ClassDecl> {
        (**self).find_class(qualified_name, scope)
    }
}

/// Declared fields of `class` followed by the fields of every resolvable super type.
///
/// Super types are visited breadth first and at most once, so cyclic models terminate.
pub fn all_fields<'a, I>(index: &'a I, class: &'a ClassDecl) -> Vec<&'a FieldDecl>
where
    I: SymbolIndex + ?Sized,
{
    let mut fields: Vec<&FieldDecl> = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = vec![class];
    visited.insert(class.qualified_name.as_str());

    while !queue.is_empty() {
        let mut next = Vec::new();
        for current in queue {
            fields.extend(current.fields.iter());
            for super_type in &current.super_types {
                let Some(name) = super_type.class_name() else {
                    continue;
                };
                if !visited.insert(name) {
                    continue;
                }
                match index.find_class(name, SearchScope::All) {
                    Some(decl) => next.push(decl),
                    None => tracing::trace!(
                        target: "testgen.index",
                        class = %class.qualified_name,
                        super_type = name,
                        "unresolved super type"
                    ),
                }
            }
        }
        queue = next;
    }
    fields
}

/// Whether `ty` resolves to an enum declaration (by kind, or by extending `java.lang.Enum`).
pub fn is_enum<I: SymbolIndex + ?Sized>(index: &I, ty: &TypeRef) -> bool {
    index
        .resolve(ty, SearchScope::All)
        .is_some_and(class_is_enum)
}

pub fn class_is_enum(class: &ClassDecl) -> bool {
    class.kind == ClassKind::Enum
        || class
            .super_types
            .iter()
            .any(|t| t.class_name() == Some(JAVA_LANG_ENUM))
}

/// Canonical text of the direct super types of the class `ty` resolves to. Empty when `ty` does
/// not resolve.
pub fn super_type_names<I: SymbolIndex + ?Sized>(index: &I, ty: &TypeRef) -> Vec<String> {
    index
        .resolve(ty, SearchScope::All)
        .map(|class| class.super_types.iter().map(TypeRef::canonical_text).collect())
        .unwrap_or_default()
}
