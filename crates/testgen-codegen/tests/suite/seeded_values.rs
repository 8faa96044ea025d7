use pretty_assertions::assert_eq;
use testgen_codegen::{generate_scaffolding, GenerateOptions};
use testgen_index::MemoryIndex;
use testgen_model::{ClassDecl, FieldDecl, JavaFile, MethodDecl, TypeRef};

use super::fixtures::ty;

fn metrics_index() -> MemoryIndex {
    let mut index = MemoryIndex::with_builtin_libraries();
    index.add_project_class(
        ClassDecl::new("com.acme.metrics.Sampler")
            .with_field(FieldDecl::new("rate", ty("double")))
            .with_field(FieldDecl::new("window", ty("long")))
            .with_field(FieldDecl::new("threshold", ty("float")))
            .with_field(FieldDecl::new("startedAt", ty("java.time.Instant")))
            .with_field(FieldDecl::new("tags", ty("java.util.Set<java.lang.String>")))
            .with_method(MethodDecl::new("sample", TypeRef::Void).with_param("value", ty("double"))),
    );
    index
}

fn test_file() -> JavaFile {
    JavaFile::new("SamplerTest.java", Some("com.acme.metrics"))
        .with_class(ClassDecl::new("com.acme.metrics.SamplerTest"))
}

fn initializers(file: &JavaFile) -> Vec<(String, Option<String>)> {
    let mut out = Vec::new();
    for class in &file.classes {
        class.walk(&mut |c| {
            out.extend(c.fields.iter().map(|f| (f.name.clone(), f.initializer.clone())));
        });
    }
    out
}

#[test]
fn same_seed_same_literals() {
    let index = metrics_index();
    let mut a = test_file();
    let mut b = test_file();

    generate_scaffolding(&mut a, &index, &GenerateOptions { seed: Some(99) });
    generate_scaffolding(&mut b, &index, &GenerateOptions { seed: Some(99) });

    assert_eq!(initializers(&a), initializers(&b));
}

#[test]
fn value_types_get_constants_with_matching_literals() {
    let index = metrics_index();
    let mut file = test_file();

    generate_scaffolding(&mut file, &index, &GenerateOptions { seed: Some(5) });

    let values = initializers(&file);
    let names: Vec<_> = values.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec!["RATE", "WINDOW", "THRESHOLD", "STARTED_AT", "STRING", "underTest", "VALUE"]
    );

    let literal = |name: &str| {
        values
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, init)| init.clone())
            .unwrap_or_default()
    };
    assert!(literal("RATE").parse::<f64>().is_ok());
    assert!(literal("WINDOW").parse::<u32>().unwrap() < 100);
    assert!(literal("THRESHOLD").ends_with('f'));
    assert_eq!(literal("STARTED_AT"), "Instant.now()");
    assert_eq!(literal("STRING"), "\"STRING\"");
    assert!(file.header.imports_class("java.time.Instant"));
}
