//! Typed Java source model used by the scaffolding generator.
//!
//! The model is a plain, owned tree: a [`JavaFile`] holds its [`FileHeader`] (package + imports)
//! and top-level [`ClassDecl`]s, which in turn own their fields, methods and inner classes. The
//! generator mutates it in place through `&mut` borrows; nothing is shared or cached across
//! invocations.
//!
//! Every node is `serde` (de)serializable. Types are written as Java type text in JSON
//! (`"java.util.List<com.acme.Order>"`) and parsed into [`TypeRef`] on load.

mod decl;
mod file;
pub mod names;
mod types;

pub use decl::{
    Annotation, ClassDecl, ClassKind, FieldDecl, MemberOrigin, MethodDecl, Modifiers, Parameter,
    Visibility,
};
pub use file::{FileHeader, ImportDecl, JavaFile, ModelStats};
pub use types::{PrimitiveType, TypeParseError, TypeRef};
