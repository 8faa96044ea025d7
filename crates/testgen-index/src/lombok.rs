//! Lombok member synthesis.
//!
//! Lombok generates members at compile time through an annotation processor, so a source model
//! built from the written code lacks them. [`expand`] adds the common ones (accessors,
//! `toString`, `equals`, `hashCode`) as methods with a [`MemberOrigin::Generated`] origin, which
//! is what lets the generator tell them apart from hand-written methods.

use std::collections::HashSet;

use testgen_model::names::{capitalize, decapitalize};
use testgen_model::{
    ClassDecl, FieldDecl, MemberOrigin, MethodDecl, Modifiers, PrimitiveType, TypeRef, Visibility,
};

pub const PROCESSOR: &str = "lombok";

const GETTER: &str = "lombok.Getter";
const SETTER: &str = "lombok.Setter";
const DATA: &str = "lombok.Data";
const VALUE: &str = "lombok.Value";
const TO_STRING: &str = "lombok.ToString";
const EQUALS_AND_HASH_CODE: &str = "lombok.EqualsAndHashCode";

/// Add Lombok-generated members to `class` and its inner classes. Returns how many members were
/// added.
///
/// Methods are never generated over a declared method with the same name and arity.
pub fn expand(class: &mut ClassDecl) -> usize {
    let mut added = 0;
    for inner in &mut class.inner_classes {
        added += expand(inner);
    }

    let is_value = class.has_annotation(VALUE);
    if is_value {
        // @Value makes the class and its instance fields final.
        class.modifiers.is_final = true;
        for field in class.fields.iter_mut().filter(|f| !f.modifiers.is_static) {
            field.modifiers.visibility = Visibility::Private;
            field.modifiers.is_final = true;
        }
    }

    let class_getters = class.has_annotation(GETTER) || class.has_annotation(DATA) || is_value;
    let class_setters = class.has_annotation(SETTER) || class.has_annotation(DATA);

    let mut seen: HashSet<(String, usize)> = class
        .methods
        .iter()
        .map(|m| (m.name.clone(), m.params.len()))
        .collect();
    let mut generated = Vec::new();
    let mut push = |method: MethodDecl| {
        if seen.insert((method.name.clone(), method.params.len())) {
            generated.push(method);
        }
    };

    for field in &class.fields {
        let is_static = field.modifiers.is_static;
        if field.has_annotation(GETTER) || (class_getters && !is_static) {
            push(getter(field));
        }
        let want_setter = field.has_annotation(SETTER) || (class_setters && !is_static);
        if want_setter && !field.modifiers.is_final {
            push(setter(field));
        }
    }

    if class.has_annotation(TO_STRING) || class.has_annotation(DATA) || is_value {
        push(generated_method("toString", TypeRef::class("java.lang.String")));
    }

    if class.has_annotation(EQUALS_AND_HASH_CODE) || class.has_annotation(DATA) || is_value {
        push(
            generated_method("equals", TypeRef::Primitive(PrimitiveType::Boolean))
                .with_param("o", TypeRef::class("java.lang.Object")),
        );
        push(generated_method(
            "hashCode",
            TypeRef::Primitive(PrimitiveType::Int),
        ));
    }

    added += generated.len();
    class.methods.extend(generated);
    added
}

fn generated_method(name: impl Into<String>, return_type: TypeRef) -> MethodDecl {
    MethodDecl::new(name, return_type)
        .with_modifiers(Modifiers::public())
        .with_origin(MemberOrigin::generated(PROCESSOR))
}

fn getter(field: &FieldDecl) -> MethodDecl {
    let (getter_name, _) = accessor_names(&field.name, is_primitive_boolean(&field.ty));
    let mut method = generated_method(getter_name, field.ty.clone());
    method.modifiers.is_static = field.modifiers.is_static;
    method
}

fn setter(field: &FieldDecl) -> MethodDecl {
    let (_, property) = accessor_names(&field.name, is_primitive_boolean(&field.ty));
    let mut method = generated_method(format!("set{}", capitalize(&property)), TypeRef::Void)
        .with_param(field.name.clone(), field.ty.clone());
    method.modifiers.is_static = field.modifiers.is_static;
    method
}

fn is_primitive_boolean(ty: &TypeRef) -> bool {
    ty.as_primitive() == Some(PrimitiveType::Boolean)
}

/// `(getter name, property name)` following Lombok's bean conventions.
fn accessor_names(field_name: &str, is_boolean: bool) -> (String, String) {
    if is_boolean {
        if let Some(rest) = field_name.strip_prefix("is") {
            if rest.chars().next().is_some_and(|c| c.is_uppercase()) {
                // `boolean isActive` => getter `isActive()`, property `active`.
                return (field_name.to_string(), decapitalize(rest));
            }
        }
        (format!("is{}", capitalize(field_name)), field_name.to_string())
    } else {
        (format!("get{}", capitalize(field_name)), field_name.to_string())
    }
}
