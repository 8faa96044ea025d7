use testgen_model::{Annotation, JavaFile};

use crate::annotations::{EXTEND_WITH, MOCKITO_EXTENSION};
use crate::imports::ImportOrganizer;
use crate::CodeInjector;

/// Adds `@ExtendWith(MockitoExtension.class)` to a test class that has no `@ExtendWith` yet.
///
/// Any existing `@ExtendWith`, whatever its argument, counts as configured.
pub struct RunnerInjector<'a> {
    organizer: &'a ImportOrganizer<'a>,
}

impl<'a> RunnerInjector<'a> {
    pub fn new(organizer: &'a ImportOrganizer<'a>) -> Self {
        Self { organizer }
    }
}

impl CodeInjector for RunnerInjector<'_> {
    fn inject(&self, file: &mut JavaFile) {
        let Some((header, test_class)) = file.split_unit_test_class_mut() else {
            return;
        };
        if test_class.has_annotation(EXTEND_WITH) {
            tracing::trace!(target: "testgen.codegen", class = %test_class.name, "runner already configured");
            return;
        }

        test_class
            .annotations
            .push(Annotation::new(EXTEND_WITH).with_argument("MockitoExtension.class"));
        self.organizer.add_class_import(header, MOCKITO_EXTENSION);
        self.organizer.add_class_import(header, EXTEND_WITH);
    }
}
