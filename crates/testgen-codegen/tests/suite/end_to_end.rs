use pretty_assertions::assert_eq;
use testgen_codegen::annotations::{BEFORE_EACH, EXTEND_WITH, INJECT_MOCKS, MOCK, NESTED};
use testgen_codegen::{generate_scaffolding, GenerateOptions, GenerationSummary};
use testgen_model::{Annotation, Modifiers};

use super::fixtures::{empty_test_file, import_paths, order_service_index, ty};

#[test]
fn order_service_test_gets_full_scaffolding() {
    let index = order_service_index();
    let mut file = empty_test_file();

    let summary = generate_scaffolding(&mut file, &index, &GenerateOptions { seed: Some(17) });

    let test_class = &file.classes[0];
    assert_eq!(
        test_class.annotations,
        vec![Annotation::new(EXTEND_WITH).with_argument("MockitoExtension.class")]
    );

    let fields: Vec<_> = test_class.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["paymentGateway", "RETRY_COUNT", "underTest"]);

    let gateway = &test_class.fields[0];
    assert_eq!(gateway.ty, ty("com.acme.PaymentGateway"));
    assert_eq!(gateway.modifiers, Modifiers::private());
    assert!(gateway.has_annotation(MOCK));

    let retry = &test_class.fields[1];
    assert_eq!(retry.ty, ty("int"));
    assert_eq!(retry.modifiers, Modifiers::private().with_static(true).with_final(true));
    let value: u32 = retry
        .initializer
        .as_deref()
        .expect("constant initializer")
        .parse()
        .expect("integer literal");
    assert!(value < 100);

    let under_test = &test_class.fields[2];
    assert_eq!(under_test.ty, ty("com.acme.OrderService"));
    assert!(under_test.has_annotation(INJECT_MOCKS));

    assert_eq!(test_class.inner_classes.len(), 1);
    let nested = &test_class.inner_classes[0];
    assert_eq!(nested.name, "WhenCheckingIfIsEligible");
    assert!(nested.has_annotation(NESTED));
    assert_eq!(nested.methods.len(), 1);
    assert_eq!(nested.methods[0].name, "setup");
    assert!(nested.methods[0].has_annotation(BEFORE_EACH));
    assert_eq!(nested.fields.len(), 1);
    assert_eq!(nested.fields[0].name, "order");
    assert_eq!(nested.fields[0].ty, ty("com.acme.Order"));
    assert!(nested.fields[0].has_annotation(MOCK));

    assert_eq!(
        import_paths(&file),
        vec![
            "org.mockito.junit.jupiter.MockitoExtension",
            "org.junit.jupiter.api.extension.ExtendWith",
            "org.mockito.Mock",
            "org.mockito.InjectMocks",
            "org.junit.jupiter.api.BeforeEach",
            "org.junit.jupiter.api.Nested",
            "static org.assertj.core.api.Assertions.assertThat",
            "static org.mockito.Mockito.*",
        ]
    );

    assert_eq!(
        summary,
        GenerationSummary {
            imports_added: 8,
            annotations_added: 6,
            fields_added: 4,
            nested_classes_added: 1,
        }
    );
}

#[test]
fn test_file_in_another_package_imports_subject_and_dependencies() {
    let index = order_service_index();
    let mut file = testgen_model::JavaFile::new("OrderServiceTest.java", Some("com.acme.web"))
        .with_class(testgen_model::ClassDecl::new("com.acme.OrderServiceTest"));

    generate_scaffolding(&mut file, &index, &GenerateOptions { seed: Some(1) });

    let imports = import_paths(&file);
    for expected in ["com.acme.PaymentGateway", "com.acme.OrderService", "com.acme.Order"] {
        assert!(imports.iter().any(|i| i == expected), "missing import {expected}: {imports:?}");
    }
}

#[test]
fn unresolved_subject_only_gets_runner_under_test_and_static_imports() {
    let index = testgen_index::MemoryIndex::with_builtin_libraries();
    let mut file = empty_test_file();

    let summary = generate_scaffolding(&mut file, &index, &GenerateOptions::default());

    let test_class = &file.classes[0];
    assert_eq!(test_class.fields.len(), 1);
    assert_eq!(test_class.fields[0].name, "underTest");
    assert!(test_class.inner_classes.is_empty());
    assert_eq!(summary.nested_classes_added, 0);
    assert_eq!(summary.fields_added, 1);
}
