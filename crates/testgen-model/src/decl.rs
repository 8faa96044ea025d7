use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::names;
use crate::types::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

impl Visibility {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Package => None,
            Visibility::Private => Some("private"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Modifiers {
    pub visibility: Visibility,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
}

impl Modifiers {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn private() -> Self {
        Self::new(Visibility::Private)
    }

    pub fn public() -> Self {
        Self::new(Visibility::Public)
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Keywords in canonical Java order (`public abstract static final`).
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(4);
        out.extend(self.visibility.keyword());
        if self.is_abstract {
            out.push("abstract");
        }
        if self.is_static {
            out.push("static");
        }
        if self.is_final {
            out.push("final");
        }
        out
    }
}

/// An annotation usage. `name` is the qualified annotation name when the source model was
/// resolved, otherwise whatever was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    /// Whether this annotation denotes `qualified`.
    ///
    /// Qualified usages must match exactly. An unqualified usage matches on its simple name,
    /// since an unresolved model cannot say more.
    pub fn is(&self, qualified: &str) -> bool {
        if self.name.contains('.') {
            self.name == qualified
        } else {
            self.name == names::simple_name(qualified)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl ClassKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Record => "record",
            ClassKind::Annotation => "@interface",
        }
    }
}

/// Where a member came from.
///
/// Members synthesized by an annotation processor (Lombok accessors, for example) are
/// `Generated`; the generator never writes tests for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum MemberOrigin {
    #[default]
    Source,
    Generated {
        processor: String,
    },
}

impl MemberOrigin {
    pub fn generated(processor: impl Into<String>) -> Self {
        MemberOrigin::Generated {
            processor: processor.into(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, MemberOrigin::Generated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            initializer: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.is(qualified))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    /// `None` for constructors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, rename = "constructor")]
    pub is_constructor: bool,
    #[serde(default)]
    pub origin: MemberOrigin,
    /// Statement lines, without indentation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::public(),
            annotations: Vec::new(),
            params: Vec::new(),
            return_type: Some(return_type),
            is_constructor: false,
            origin: MemberOrigin::Source,
            body: Vec::new(),
        }
    }

    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            return_type: None,
            is_constructor: true,
            ..Self::new(class_name, TypeRef::Void)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    pub fn with_origin(mut self, origin: MemberOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.is(qualified))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub super_types: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_constants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_classes: Vec<ClassDecl>,
}

impl ClassDecl {
    /// A package-private class named after the last segment of `qualified_name`.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            name: names::simple_name(&qualified_name).to_string(),
            qualified_name,
            kind: ClassKind::Class,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            super_types: Vec::new(),
            enum_constants: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            inner_classes: Vec::new(),
        }
    }

    /// A class nested directly in `self`, not yet attached.
    pub fn new_inner(&self, name: &str) -> Self {
        Self::new(format!("{}.{name}", self.qualified_name))
    }

    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_super_type(mut self, ty: TypeRef) -> Self {
        self.super_types.push(ty);
        self
    }

    pub fn with_enum_constant(mut self, constant: impl Into<String>) -> Self {
        self.enum_constants.push(constant.into());
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_inner_class(mut self, class: ClassDecl) -> Self {
        self.inner_classes.push(class);
        self
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.is_final
    }

    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.is(qualified))
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Names of the fields declared directly in this class.
    pub fn field_names(&self) -> HashSet<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDecl> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn inner_class(&self, name: &str) -> Option<&ClassDecl> {
        self.inner_classes.iter().find(|c| c.name == name)
    }

    pub fn inner_class_mut(&mut self, name: &str) -> Option<&mut ClassDecl> {
        self.inner_classes.iter_mut().find(|c| c.name == name)
    }

    /// Visit this class and every nested class, depth first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a ClassDecl)) {
        f(self);
        for inner in &self.inner_classes {
            inner.walk(f);
        }
    }
}
