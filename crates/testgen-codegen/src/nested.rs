use std::collections::HashSet;

use testgen_index::{SearchScope, SymbolIndex};
use testgen_model::{Annotation, ClassDecl, JavaFile, MethodDecl, Modifiers, TypeRef, Visibility};

use crate::annotations::{BEFORE_EACH, NESTED};
use crate::gerund::when_class_name;
use crate::imports::ImportOrganizer;
use crate::synth::{FieldSynthesizer, Placement, Variable};
use crate::CodeInjector;

/// Test class name suffixes, tried in this order. The first match wins.
pub const TEST_CLASS_NAME_SUFFIXES: [&str; 5] = ["Test", "IT", "Tests", "ITs", "E2E"];

const SETUP_METHOD_NAME: &str = "setup";

/// Methods whose names start with one of these are accessors or `Object` plumbing, not
/// behaviour worth a nested test class.
const NON_HANDLED_METHOD_PREFIXES: [&str; 5] = ["set", "toString", "equals", "canEqual", "hashCode"];

/// Adds one `@Nested` `When...` class per testable method of the class under test, each with a
/// `@BeforeEach setup()` hook and fields for the method's parameters.
pub struct NestedClassInjector<'a> {
    index: &'a dyn SymbolIndex,
    organizer: &'a ImportOrganizer<'a>,
    synthesizer: &'a FieldSynthesizer<'a>,
}

impl<'a> NestedClassInjector<'a> {
    pub fn new(organizer: &'a ImportOrganizer<'a>, synthesizer: &'a FieldSynthesizer<'a>) -> Self {
        Self {
            index: organizer.index(),
            organizer,
            synthesizer,
        }
    }

    fn new_nested_class(&self, outer: &ClassDecl, name: &str) -> ClassDecl {
        let setup = MethodDecl::new(SETUP_METHOD_NAME, TypeRef::Void)
            .with_modifiers(Modifiers::new(Visibility::Package))
            .with_annotation(Annotation::new(BEFORE_EACH));
        outer
            .new_inner(name)
            .with_modifiers(Modifiers::new(Visibility::Package))
            .with_annotation(Annotation::new(NESTED))
            .with_method(setup)
    }
}

/// Qualified name of the class under test: `qualified_name` minus the first matching suffix.
pub fn subject_class_name(qualified_name: &str) -> Option<&str> {
    TEST_CLASS_NAME_SUFFIXES
        .iter()
        .find_map(|suffix| qualified_name.strip_suffix(suffix))
}

fn is_handled(method: &MethodDecl) -> bool {
    method.modifiers.visibility != Visibility::Private
        && !method.is_constructor
        && !method.origin.is_generated()
        && !NON_HANDLED_METHOD_PREFIXES
            .iter()
            .any(|prefix| method.name.starts_with(prefix))
}

impl CodeInjector for NestedClassInjector<'_> {
    fn inject(&self, file: &mut JavaFile) {
        let Some((header, test_class)) = file.split_unit_test_class_mut() else {
            return;
        };
        let Some(subject_name) = subject_class_name(&test_class.qualified_name).map(str::to_string)
        else {
            tracing::debug!(
                target: "testgen.codegen",
                class = %test_class.qualified_name,
                "no known test class suffix"
            );
            return;
        };
        let Some(subject) = self.index.find_class(&subject_name, SearchScope::All) else {
            tracing::debug!(target: "testgen.codegen", subject = %subject_name, "class under test not found");
            return;
        };

        let mut existing: HashSet<String> = test_class
            .inner_classes
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let mut created = 0usize;

        for method in subject.methods.iter().filter(|m| is_handled(m)) {
            let name = when_class_name(&method.name);

            if existing.insert(name.clone()) {
                let nested = self.new_nested_class(test_class, &name);
                test_class.inner_classes.push(nested);
                self.organizer.add_class_import(header, BEFORE_EACH);
                created += 1;
            }
            let Some(nested) = test_class.inner_class_mut(&name) else {
                continue;
            };

            let mut nested_fields = nested.field_names();
            self.synthesizer.insert_missing(
                header,
                nested,
                Placement::Nested,
                &mut nested_fields,
                method.params.iter().map(Variable::from),
            );
        }

        if created > 0 {
            self.organizer.add_class_import(header, NESTED);
        }
        tracing::debug!(
            target: "testgen.codegen",
            subject = %subject_name,
            created,
            "nested test classes"
        );
    }
}
