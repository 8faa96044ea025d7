//! Java source printer for testgen file models.
//!
//! Printing is deterministic and never fails: whatever the model holds is written out. Class
//! names are shortened to their simple name whenever the file can already see them (an import,
//! `java.lang`, the file's own package, or a class declared in the file); anything else is
//! printed fully qualified.

use std::collections::HashSet;

use testgen_model::names;
use testgen_model::{
    Annotation, ClassDecl, ClassKind, FieldDecl, FileHeader, JavaFile, MethodDecl, Modifiers,
    TypeRef,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    pub indent_width: usize,
    pub newline: &'static str,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            newline: "\n",
        }
    }
}

/// Indents each non-empty line in `block` with `indent`.
#[must_use]
pub fn indent_block(block: &str, indent: &str) -> String {
    let mut out = String::with_capacity(block.len() + indent.len() * 4);
    for line in block.split_inclusive('\n') {
        let line_stripped = line.strip_suffix('\n').unwrap_or(line);
        if !line_stripped.trim().is_empty() {
            out.push_str(indent);
        }
        out.push_str(line_stripped);
        if line.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Render `file` as Java source text.
#[must_use]
pub fn render_java_file(file: &JavaFile, config: &PrintConfig) -> String {
    let mut printer = Printer::new(file, config);
    printer.file(file);
    printer.finish()
}

/// Decides how a class name is spelled at a use site.
struct TypeNamer<'a> {
    header: &'a FileHeader,
    declared: HashSet<&'a str>,
}

impl<'a> TypeNamer<'a> {
    fn new(file: &'a JavaFile) -> Self {
        let mut declared = HashSet::new();
        for class in &file.classes {
            class.walk(&mut |c| {
                declared.insert(c.qualified_name.as_str());
            });
        }
        Self {
            header: &file.header,
            declared,
        }
    }

    fn is_visible(&self, qualified: &str) -> bool {
        if self.declared.contains(qualified) {
            return true;
        }
        if self.is_shadowed_by_import(qualified) {
            return false;
        }
        let owner = names::qualifier(qualified);
        owner.is_none()
            || owner == Some("java.lang")
            || owner == self.header.package.as_deref()
            || self.header.imports_class(qualified)
    }

    /// A single-type import of another class with the same simple name hides same-package,
    /// `java.lang` and on-demand imported classes.
    fn is_shadowed_by_import(&self, qualified: &str) -> bool {
        let simple = names::simple_name(qualified);
        self.header.plain_imports().any(|import| {
            !import.is_on_demand()
                && import.path != qualified
                && names::simple_name(&import.path) == simple
        })
    }

    fn class_name<'n>(&self, qualified: &'n str) -> &'n str {
        if self.is_visible(qualified) {
            names::simple_name(qualified)
        } else {
            qualified
        }
    }

    fn type_text(&self, ty: &TypeRef) -> String {
        let mut out = String::new();
        self.write_type(ty, &mut out);
        out
    }

    fn write_type(&self, ty: &TypeRef, out: &mut String) {
        match ty {
            TypeRef::Void => out.push_str("void"),
            TypeRef::Primitive(p) => out.push_str(p.keyword()),
            TypeRef::Class { name, args } => {
                out.push_str(self.class_name(name));
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(arg, out);
                    }
                    out.push('>');
                }
            }
            TypeRef::Array(element) => {
                self.write_type(element, out);
                out.push_str("[]");
            }
        }
    }

    fn annotation(&self, annotation: &Annotation) -> String {
        let name = self.class_name(&annotation.name);
        match &annotation.argument {
            Some(argument) => format!("@{name}({argument})"),
            None => format!("@{name}"),
        }
    }
}

struct Printer<'a> {
    config: &'a PrintConfig,
    namer: TypeNamer<'a>,
    lines: Vec<String>,
}

impl<'a> Printer<'a> {
    fn new(file: &'a JavaFile, config: &'a PrintConfig) -> Self {
        Self {
            config,
            namer: TypeNamer::new(file),
            lines: Vec::new(),
        }
    }

    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            let indent = " ".repeat(depth * self.config.indent_width);
            self.lines.push(indent_block(text, &indent));
        }
    }

    /// At most one blank line in a row, and none right after an opening brace.
    fn blank(&mut self) {
        match self.lines.last() {
            None => {}
            Some(last) if last.is_empty() || last.ends_with('{') => {}
            Some(_) => self.lines.push(String::new()),
        }
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        let newline = self.config.newline;
        let mut out = self.lines.join(newline);
        out.push_str(newline);
        out
    }

    fn file(&mut self, file: &JavaFile) {
        if let Some(package) = file.package() {
            self.line(0, format!("package {package};"));
            self.blank();
        }

        let mut any = false;
        for import in file.header.plain_imports() {
            self.line(0, format!("import {};", import.path));
            any = true;
        }
        if any {
            self.blank();
        }

        any = false;
        for import in file.header.static_imports() {
            self.line(0, format!("import static {};", import.path));
            any = true;
        }
        if any {
            self.blank();
        }

        for (i, class) in file.classes.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.class(0, class);
        }
    }

    fn annotations(&mut self, depth: usize, annotations: &[Annotation]) {
        for annotation in annotations {
            let text = self.namer.annotation(annotation);
            self.line(depth, text);
        }
    }

    fn class(&mut self, depth: usize, class: &ClassDecl) {
        self.annotations(depth, &class.annotations);

        let mut head = modifier_prefix(&class.modifiers);
        head.push_str(class.kind.keyword());
        head.push(' ');
        head.push_str(&class.name);
        if class.kind == ClassKind::Record {
            let components: Vec<String> = class
                .fields
                .iter()
                .map(|f| format!("{} {}", self.namer.type_text(&f.ty), f.name))
                .collect();
            head.push('(');
            head.push_str(&components.join(", "));
            head.push(')');
        }
        head.push_str(&self.super_type_clause(class));
        head.push_str(" {");
        self.line(depth, head);

        let body = depth + 1;
        if !class.enum_constants.is_empty() {
            self.line(body, format!("{};", class.enum_constants.join(", ")));
            self.blank();
        }

        if class.kind != ClassKind::Record && !class.fields.is_empty() {
            self.blank();
            for field in &class.fields {
                self.field(body, field);
            }
            self.blank();
        }

        for method in &class.methods {
            self.blank();
            self.method(body, class, method);
            self.blank();
        }

        for inner in &class.inner_classes {
            self.blank();
            self.class(body, inner);
            self.blank();
        }

        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.line(depth, "}");
    }

    /// Interfaces extend every super type. Classes extend the first one and implement the rest;
    /// enums and records can only implement.
    fn super_type_clause(&self, class: &ClassDecl) -> String {
        let supers: Vec<String> = class
            .super_types
            .iter()
            .filter(|ty| !is_implicit_super_type(ty))
            .map(|ty| self.namer.type_text(ty))
            .collect();
        let Some((first, rest)) = supers.split_first() else {
            return String::new();
        };
        match class.kind {
            ClassKind::Interface => format!(" extends {}", supers.join(", ")),
            ClassKind::Class if rest.is_empty() => format!(" extends {first}"),
            ClassKind::Class => format!(" extends {first} implements {}", rest.join(", ")),
            ClassKind::Enum | ClassKind::Record => format!(" implements {}", supers.join(", ")),
            ClassKind::Annotation => String::new(),
        }
    }

    fn field(&mut self, depth: usize, field: &FieldDecl) {
        self.annotations(depth, &field.annotations);
        let mut text = modifier_prefix(&field.modifiers);
        text.push_str(&self.namer.type_text(&field.ty));
        text.push(' ');
        text.push_str(&field.name);
        if let Some(initializer) = &field.initializer {
            text.push_str(" = ");
            text.push_str(initializer);
        }
        text.push(';');
        self.line(depth, text);
    }

    fn method(&mut self, depth: usize, owner: &ClassDecl, method: &MethodDecl) {
        self.annotations(depth, &method.annotations);
        let mut head = modifier_prefix(&method.modifiers);
        if method.is_constructor {
            head.push_str(&owner.name);
        } else {
            let ret = method.return_type.as_ref().unwrap_or(&TypeRef::Void);
            head.push_str(&self.namer.type_text(ret));
            head.push(' ');
            head.push_str(&method.name);
        }
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{} {}", self.namer.type_text(&p.ty), p.name))
            .collect();
        head.push('(');
        head.push_str(&params.join(", "));
        head.push(')');

        let bodiless = method.body.is_empty()
            && (method.modifiers.is_abstract
                || (owner.kind == ClassKind::Interface && !method.modifiers.is_static));
        if bodiless {
            head.push(';');
            self.line(depth, head);
            return;
        }

        head.push_str(" {");
        self.line(depth, head);
        for statement in &method.body {
            self.line(depth + 1, statement);
        }
        self.line(depth, "}");
    }
}

fn modifier_prefix(modifiers: &Modifiers) -> String {
    let mut out = String::new();
    for keyword in modifiers.keywords() {
        out.push_str(keyword);
        out.push(' ');
    }
    out
}

fn is_implicit_super_type(ty: &TypeRef) -> bool {
    matches!(ty.class_name(), Some("java.lang.Object" | "java.lang.Enum" | "java.lang.Record"))
}
