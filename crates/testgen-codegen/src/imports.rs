use testgen_index::{SearchScope, SymbolIndex};
use testgen_model::{names, FileHeader, ImportDecl, TypeRef};

/// Adds imports to a file header, but only for classes the index can resolve.
pub struct ImportOrganizer<'a> {
    index: &'a dyn SymbolIndex,
}

impl<'a> ImportOrganizer<'a> {
    pub fn new(index: &'a dyn SymbolIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a dyn SymbolIndex {
        self.index
    }

    /// Import `qualified` unless it is already visible by its simple name.
    ///
    /// `java.lang` and same-package classes are never imported. Nor is a class whose simple
    /// name is already taken by a different import; it keeps its qualified spelling. Returns
    /// whether an import was appended.
    pub fn add_class_import(&self, header: &mut FileHeader, qualified: &str) -> bool {
        if self.index.find_class(qualified, SearchScope::All).is_none() {
            tracing::debug!(target: "testgen.codegen", class = qualified, "import target not found");
            return false;
        }

        let owner = names::qualifier(qualified);
        if owner == Some("java.lang") || (owner.is_some() && owner == header.package.as_deref()) {
            return false;
        }
        if header.imports_class(qualified) {
            return false;
        }

        let simple = names::simple_name(qualified);
        let clash = header
            .plain_imports()
            .any(|i| !i.is_on_demand() && names::simple_name(&i.path) == simple);
        if clash {
            tracing::debug!(
                target: "testgen.codegen",
                class = qualified,
                "simple name already imported for another class"
            );
            return false;
        }

        header.imports.push(ImportDecl::single(qualified));
        true
    }

    /// Import every class mentioned by `ty`, including type arguments and array elements.
    pub fn add_type_imports(&self, header: &mut FileHeader, ty: &TypeRef) {
        match ty {
            TypeRef::Class { name, args } => {
                self.add_class_import(header, name);
                for arg in args {
                    self.add_type_imports(header, arg);
                }
            }
            TypeRef::Array(element) => self.add_type_imports(header, element),
            TypeRef::Void | TypeRef::Primitive(_) => {}
        }
    }

    /// Append `import static <class>.<member>;` when `class` resolves.
    ///
    /// No duplicate check happens here; callers decide whether an equivalent import exists.
    pub fn add_static_import(&self, header: &mut FileHeader, class: &str, member: &str) -> bool {
        if self.index.find_class(class, SearchScope::All).is_none() {
            tracing::debug!(target: "testgen.codegen", class, "static import target not found");
            return false;
        }
        header.imports.push(ImportDecl::static_member(class, member));
        true
    }

    pub fn add_static_import_for_all_methods(&self, header: &mut FileHeader, class: &str) -> bool {
        self.add_static_import(header, class, "*")
    }
}
