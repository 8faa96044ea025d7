use serde::Serialize;
use testgen_index::SymbolIndex;
use testgen_model::JavaFile;

use crate::fields::FieldsInjector;
use crate::imports::ImportOrganizer;
use crate::nested::NestedClassInjector;
use crate::runner::RunnerInjector;
use crate::static_imports::StaticImportsInjector;
use crate::style::JavaCodeStyle;
use crate::synth::{FieldSynthesizer, ValueGenerator};
use crate::CodeInjector;

pub const DEFAULT_FILE_SUFFIX: &str = "Test.java";

/// Whether the action is offered for `file_name`.
pub fn is_action_enabled(file_name: &str, suffix: &str) -> bool {
    file_name.ends_with(suffix)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Seed for generated literal values. `None` draws from the OS.
    pub seed: Option<u64>,
}

/// What one generation pass added to a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub imports_added: usize,
    pub annotations_added: usize,
    pub fields_added: usize,
    pub nested_classes_added: usize,
}

impl GenerationSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Run the runner, fields, nested class and static import injectors over `file`, in that order.
pub fn generate_scaffolding(
    file: &mut JavaFile,
    index: &dyn SymbolIndex,
    options: &GenerateOptions,
) -> GenerationSummary {
    let _span = tracing::info_span!(target: "testgen.codegen", "generate", file = %file.name).entered();
    let before = file.stats();

    let organizer = ImportOrganizer::new(index);
    let style = JavaCodeStyle;
    let synthesizer = FieldSynthesizer::new(&organizer, &style, ValueGenerator::new(options.seed));

    let runner = RunnerInjector::new(&organizer);
    let fields = FieldsInjector::new(&organizer, &synthesizer);
    let nested = NestedClassInjector::new(&organizer, &synthesizer);
    let static_imports = StaticImportsInjector::new(&organizer);
    let injectors: [&dyn CodeInjector; 4] = [&runner, &fields, &nested, &static_imports];
    for injector in injectors {
        injector.inject(file);
    }

    let after = file.stats();
    let summary = GenerationSummary {
        imports_added: after.imports.saturating_sub(before.imports),
        annotations_added: after.annotations.saturating_sub(before.annotations),
        fields_added: after.fields.saturating_sub(before.fields),
        nested_classes_added: after.classes.saturating_sub(before.classes),
    };
    tracing::info!(
        target: "testgen.codegen",
        imports = summary.imports_added,
        annotations = summary.annotations_added,
        fields = summary.fields_added,
        nested_classes = summary.nested_classes_added,
        "scaffolding generated"
    );
    summary
}
