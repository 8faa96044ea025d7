//! Type classification and mock/constant field synthesis.

use std::cell::RefCell;
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use testgen_index::{is_enum, super_type_names, SearchScope, SymbolIndex};
use testgen_model::{
    names, Annotation, ClassDecl, FieldDecl, FileHeader, Modifiers, PrimitiveType, TypeRef,
};

use crate::annotations::MOCK;
use crate::imports::ImportOrganizer;
use crate::style::{NameSuggester, VariableKind};

const UUID: &str = "java.util.UUID";
const STRING: &str = "java.lang.String";
const INSTANT: &str = "java.time.Instant";
const ZONED_DATE_TIME: &str = "java.time.ZonedDateTime";

const VALUE_TYPES: [&str; 4] = [UUID, STRING, INSTANT, ZONED_DATE_TIME];
const COLLECTION_PREFIXES: [&str; 2] = ["java.util.List", "java.util.Set"];

/// How a dependency of the class under test is represented in the test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCategory {
    /// Primitives, enums and a few immutable JDK value types: a constant with a literal value.
    Value,
    /// `List`/`Set`: a single field for the element type instead.
    Collection { element: Option<TypeRef> },
    /// Anything that can be subclassed (or that we know nothing about): a `@Mock` field.
    Mockable,
    /// A final class we cannot build a value for.
    Unsupported,
}

/// Where generated fields go. Top-level constants are `static`; constants inside a nested test
/// class are instance fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    TopLevel,
    Nested,
}

/// A subject field or method parameter to mirror in the test class.
#[derive(Debug, Clone, Copy)]
pub struct Variable<'v> {
    pub name: &'v str,
    pub ty: &'v TypeRef,
    pub is_static: bool,
}

impl<'v> From<&'v FieldDecl> for Variable<'v> {
    fn from(field: &'v FieldDecl) -> Self {
        Self {
            name: &field.name,
            ty: &field.ty,
            is_static: field.modifiers.is_static,
        }
    }
}

impl<'v> From<&'v testgen_model::Parameter> for Variable<'v> {
    fn from(param: &'v testgen_model::Parameter) -> Self {
        Self {
            name: &param.name,
            ty: &param.ty,
            is_static: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOutcome {
    pub mocks: usize,
    pub constants: usize,
}

/// Random literal values for generated constants.
///
/// Shared by the fields and nested injectors within one generation call, hence the `RefCell`.
pub struct ValueGenerator {
    rng: RefCell<StdRng>,
}

impl ValueGenerator {
    /// A seeded generator produces the same sequence on every run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: RefCell::new(rng),
        }
    }

    /// Integer in `[0, 100)`.
    pub fn small_int(&self) -> u32 {
        self.rng.borrow_mut().random_range(0..100)
    }

    /// Number in `[0, 100)` rendered with one decimal.
    pub fn small_decimal(&self) -> String {
        let value: f64 = self.rng.borrow_mut().random::<f64>() * 100.0;
        format!("{value:.1}")
    }
}

pub struct FieldSynthesizer<'a> {
    index: &'a dyn SymbolIndex,
    organizer: &'a ImportOrganizer<'a>,
    style: &'a dyn NameSuggester,
    values: ValueGenerator,
}

impl<'a> FieldSynthesizer<'a> {
    pub fn new(
        organizer: &'a ImportOrganizer<'a>,
        style: &'a dyn NameSuggester,
        values: ValueGenerator,
    ) -> Self {
        Self {
            index: organizer.index(),
            organizer,
            style,
            values,
        }
    }

    pub fn classify(&self, ty: &TypeRef) -> TypeCategory {
        if self.is_value_type(ty) {
            return TypeCategory::Value;
        }
        if self.is_collection(ty) {
            return TypeCategory::Collection {
                element: self.collection_element(ty),
            };
        }
        if self.is_not_final(ty) {
            return TypeCategory::Mockable;
        }
        TypeCategory::Unsupported
    }

    fn is_value_type(&self, ty: &TypeRef) -> bool {
        ty.is_primitive()
            || is_enum(self.index, ty)
            || VALUE_TYPES.contains(&ty.canonical_text().as_str())
    }

    fn is_collection(&self, ty: &TypeRef) -> bool {
        let is_collection_text =
            |text: &str| COLLECTION_PREFIXES.iter().any(|prefix| text.starts_with(prefix));
        is_collection_text(ty.canonical_text().as_str())
            || super_type_names(self.index, ty)
                .iter()
                .any(|s| is_collection_text(s.as_str()))
    }

    /// The first type argument of the collection, or of a `List`/`Set` super type for
    /// collection subclasses without type arguments of their own.
    fn collection_element(&self, ty: &TypeRef) -> Option<TypeRef> {
        if let Some(element) = ty.iterable_element() {
            return Some(element.clone());
        }
        let class = self.index.resolve(ty, SearchScope::All)?;
        class
            .super_types
            .iter()
            .filter(|s| {
                s.class_name()
                    .is_some_and(|name| COLLECTION_PREFIXES.contains(&name))
            })
            .find_map(|s| s.iterable_element().cloned())
    }

    /// Unresolvable types count as non-final.
    fn is_not_final(&self, ty: &TypeRef) -> bool {
        match self.index.resolve(ty, SearchScope::All) {
            Some(class) => !class.is_final(),
            None => true,
        }
    }

    /// Add a mock or constant to `target` for every non-static variable that needs one.
    ///
    /// `existing` holds the field names already declared in `target` and grows as fields are
    /// added. The `@Mock` import is added once if any mock was generated.
    pub fn insert_missing<'v>(
        &self,
        header: &mut FileHeader,
        target: &mut ClassDecl,
        placement: Placement,
        existing: &mut HashSet<String>,
        variables: impl IntoIterator<Item = Variable<'v>>,
    ) -> SynthesisOutcome {
        let mut outcome = SynthesisOutcome::default();

        for variable in variables {
            if variable.is_static {
                continue;
            }
            match self.classify(variable.ty) {
                TypeCategory::Value => {
                    let name = constant_name_for_variable(variable.name);
                    if self.insert_constant(header, target, placement, existing, variable.ty, name)
                    {
                        outcome.constants += 1;
                    }
                }
                TypeCategory::Collection { element: Some(element) } => {
                    if self.is_value_type(&element) {
                        let name = self.constant_name_for_type(&element);
                        if self.insert_constant(header, target, placement, existing, &element, name)
                        {
                            outcome.constants += 1;
                        }
                    } else if self.is_not_final(&element) {
                        let name = self
                            .style
                            .suggest_variable_name(VariableKind::Field, &element);
                        if self.insert_mock(header, target, existing, &element, name) {
                            outcome.mocks += 1;
                        }
                    } else {
                        tracing::trace!(
                            target: "testgen.codegen",
                            variable = variable.name,
                            element = %element,
                            "skipping collection of final elements"
                        );
                    }
                }
                TypeCategory::Collection { element: None } => {
                    tracing::debug!(
                        target: "testgen.codegen",
                        variable = variable.name,
                        ty = %variable.ty,
                        "collection element type unknown"
                    );
                }
                TypeCategory::Mockable => {
                    if self.insert_mock(header, target, existing, variable.ty, variable.name.to_string())
                    {
                        outcome.mocks += 1;
                    }
                }
                TypeCategory::Unsupported => {
                    tracing::trace!(
                        target: "testgen.codegen",
                        variable = variable.name,
                        ty = %variable.ty,
                        "skipping final type"
                    );
                }
            }
        }

        if outcome.mocks > 0 {
            self.organizer.add_class_import(header, MOCK);
        }
        outcome
    }

    fn constant_name_for_type(&self, ty: &TypeRef) -> String {
        if ty.class_name() == Some(UUID) {
            return "UUID_VALUE".to_string();
        }
        self.style
            .suggest_variable_name(VariableKind::StaticFinalField, ty)
    }

    fn insert_mock(
        &self,
        header: &mut FileHeader,
        target: &mut ClassDecl,
        existing: &mut HashSet<String>,
        ty: &TypeRef,
        name: String,
    ) -> bool {
        let name = names::decapitalize(&name);
        if !existing.insert(name.clone()) {
            return false;
        }
        target.fields.push(
            FieldDecl::new(name, ty.clone())
                .with_modifiers(Modifiers::private())
                .with_annotation(Annotation::new(MOCK)),
        );
        self.organizer.add_type_imports(header, ty);
        true
    }

    fn insert_constant(
        &self,
        header: &mut FileHeader,
        target: &mut ClassDecl,
        placement: Placement,
        existing: &mut HashSet<String>,
        ty: &TypeRef,
        name: String,
    ) -> bool {
        if existing.contains(&name) {
            return false;
        }
        let initializer = self.initializer(ty, &name);
        let modifiers = Modifiers::private()
            .with_static(placement == Placement::TopLevel)
            .with_final(true);
        existing.insert(name.clone());
        target.fields.push(
            FieldDecl::new(name, ty.clone())
                .with_modifiers(modifiers)
                .with_initializer(initializer),
        );
        self.organizer.add_type_imports(header, ty);
        true
    }

    fn initializer(&self, ty: &TypeRef, field_name: &str) -> String {
        if let TypeRef::Primitive(p) = ty {
            return match p {
                p if p.is_integral() => self.values.small_int().to_string(),
                PrimitiveType::Double => self.values.small_decimal(),
                PrimitiveType::Float => format!("{}f", self.values.small_decimal()),
                PrimitiveType::Boolean => "true".to_string(),
                PrimitiveType::Char => "'a'".to_string(),
                _ => self.values.small_int().to_string(),
            };
        }

        if is_enum(self.index, ty) {
            return match self.index.resolve(ty, SearchScope::All) {
                Some(class) => match class.enum_constants.first() {
                    Some(constant) => format!("{}.{constant}", class.name),
                    None => "null".to_string(),
                },
                None => "null".to_string(),
            };
        }

        match ty.class_name() {
            Some(UUID) => "UUID.randomUUID()".to_string(),
            Some(INSTANT) => "Instant.now()".to_string(),
            Some(ZONED_DATE_TIME) => "ZonedDateTime.now()".to_string(),
            Some(STRING) => format!("\"{field_name}\""),
            _ => "null".to_string(),
        }
    }
}

/// Upper snake case from a camel case variable name: `retryCount` => `RETRY_COUNT`.
///
/// Every uppercase character after the first starts a new word, so acronyms are split letter
/// by letter (`orderID` => `ORDER_I_D`).
pub fn constant_name_for_variable(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            out.push('_');
        }
        out.extend(ch.to_uppercase());
    }
    out
}
