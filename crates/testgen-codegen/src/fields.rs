use testgen_index::{all_fields, SearchScope, SymbolIndex};
use testgen_model::{Annotation, FieldDecl, JavaFile, Modifiers, TypeRef};

use crate::annotations::INJECT_MOCKS;
use crate::imports::ImportOrganizer;
use crate::synth::{FieldSynthesizer, Placement, Variable};
use crate::CodeInjector;

pub const TEST_CLASS_NAME_SUFFIX: &str = "Test";
pub const UNDER_TEST_FIELD_NAME: &str = "underTest";

/// Mirrors the fields of the class under test as mocks and constants on the test class, then
/// adds the `@InjectMocks` subject field.
pub struct FieldsInjector<'a> {
    index: &'a dyn SymbolIndex,
    organizer: &'a ImportOrganizer<'a>,
    synthesizer: &'a FieldSynthesizer<'a>,
}

impl<'a> FieldsInjector<'a> {
    pub fn new(organizer: &'a ImportOrganizer<'a>, synthesizer: &'a FieldSynthesizer<'a>) -> Self {
        Self {
            index: organizer.index(),
            organizer,
            synthesizer,
        }
    }
}

impl CodeInjector for FieldsInjector<'_> {
    fn inject(&self, file: &mut JavaFile) {
        let Some((header, test_class)) = file.split_unit_test_class_mut() else {
            return;
        };
        let Some(subject_name) = test_class
            .qualified_name
            .strip_suffix(TEST_CLASS_NAME_SUFFIX)
            .map(str::to_string)
        else {
            tracing::debug!(
                target: "testgen.codegen",
                class = %test_class.qualified_name,
                "test class name has no `Test` suffix"
            );
            return;
        };

        match self.index.find_class(&subject_name, SearchScope::All) {
            Some(subject) => {
                let mut existing = test_class.field_names();
                let outcome = self.synthesizer.insert_missing(
                    header,
                    test_class,
                    Placement::TopLevel,
                    &mut existing,
                    all_fields(self.index, subject)
                        .into_iter()
                        .map(Variable::from),
                );
                tracing::debug!(
                    target: "testgen.codegen",
                    subject = %subject_name,
                    mocks = outcome.mocks,
                    constants = outcome.constants,
                    "mirrored subject fields"
                );
            }
            None => {
                tracing::debug!(target: "testgen.codegen", subject = %subject_name, "class under test not found");
            }
        }

        if !test_class.has_field(UNDER_TEST_FIELD_NAME) {
            test_class.fields.push(
                FieldDecl::new(UNDER_TEST_FIELD_NAME, TypeRef::class(subject_name.clone()))
                    .with_modifiers(Modifiers::private())
                    .with_annotation(Annotation::new(INJECT_MOCKS)),
            );
        }
        self.organizer.add_class_import(header, INJECT_MOCKS);

        // Same-package subjects are skipped by the organizer.
        if self
            .index
            .find_class(&subject_name, SearchScope::Project)
            .is_some()
        {
            self.organizer.add_class_import(header, &subject_name);
        }
    }
}
