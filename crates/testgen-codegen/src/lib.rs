//! Mockito/JUnit 5 test scaffolding.
//!
//! Each injector reads the unit test class of a [`JavaFile`], resolves the class under test
//! through a [`SymbolIndex`](testgen_index::SymbolIndex) and inserts whatever is missing:
//!
//! - [`RunnerInjector`]: `@ExtendWith(MockitoExtension.class)` on the test class.
//! - [`FieldsInjector`]: mocks and constants for the subject's fields, plus `@InjectMocks underTest`.
//! - [`NestedClassInjector`]: one `@Nested When...` class per testable subject method.
//! - [`StaticImportsInjector`]: `assertThat` and `Mockito.*` static imports.
//!
//! Injectors only ever add. Running them a second time over their own output changes nothing.
//! [`generate_scaffolding`] wires them together in that order.

mod action;
pub mod gerund;
mod fields;
mod imports;
mod nested;
mod runner;
mod static_imports;
pub mod style;
mod synth;

use testgen_model::JavaFile;

pub use action::{
    generate_scaffolding, is_action_enabled, GenerateOptions, GenerationSummary,
    DEFAULT_FILE_SUFFIX,
};
pub use fields::{FieldsInjector, UNDER_TEST_FIELD_NAME};
pub use imports::ImportOrganizer;
pub use nested::{subject_class_name, NestedClassInjector, TEST_CLASS_NAME_SUFFIXES};
pub use runner::RunnerInjector;
pub use static_imports::StaticImportsInjector;
pub use synth::{
    FieldSynthesizer, Placement, SynthesisOutcome, TypeCategory, ValueGenerator, Variable,
};

pub mod annotations {
    pub const EXTEND_WITH: &str = "org.junit.jupiter.api.extension.ExtendWith";
    pub const NESTED: &str = "org.junit.jupiter.api.Nested";
    pub const BEFORE_EACH: &str = "org.junit.jupiter.api.BeforeEach";
    pub const MOCKITO_EXTENSION: &str = "org.mockito.junit.jupiter.MockitoExtension";
    pub const MOCK: &str = "org.mockito.Mock";
    pub const INJECT_MOCKS: &str = "org.mockito.InjectMocks";
}

/// A single generation step over a test file.
pub trait CodeInjector {
    fn inject(&self, file: &mut JavaFile);
}
