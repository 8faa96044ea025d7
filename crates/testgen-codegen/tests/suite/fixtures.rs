use testgen_index::MemoryIndex;
use testgen_model::{ClassDecl, ClassKind, FieldDecl, JavaFile, MethodDecl, Modifiers, TypeRef};

pub fn ty(text: &str) -> TypeRef {
    TypeRef::parse(text).expect("valid type")
}

/// `OrderService` with a mockable dependency, a primitive setting and one predicate method.
pub fn order_service() -> ClassDecl {
    ClassDecl::new("com.acme.OrderService")
        .with_modifiers(Modifiers::public())
        .with_field(
            FieldDecl::new("paymentGateway", ty("com.acme.PaymentGateway"))
                .with_modifiers(Modifiers::private().with_final(true)),
        )
        .with_field(
            FieldDecl::new("retryCount", ty("int")).with_modifiers(Modifiers::private()),
        )
        .with_method(
            MethodDecl::new("isEligible", ty("boolean")).with_param("order", ty("com.acme.Order")),
        )
}

pub fn order_service_index() -> MemoryIndex {
    let mut index = MemoryIndex::with_builtin_libraries();
    index.add_project_class(order_service());
    index.add_project_class(ClassDecl::new("com.acme.PaymentGateway").with_kind(ClassKind::Interface));
    index.add_project_class(ClassDecl::new("com.acme.Order").with_modifiers(Modifiers::public()));
    index
}

pub fn empty_test_file() -> JavaFile {
    JavaFile::new("OrderServiceTest.java", Some("com.acme"))
        .with_class(ClassDecl::new("com.acme.OrderServiceTest"))
}

pub fn import_paths(file: &JavaFile) -> Vec<String> {
    file.header
        .imports
        .iter()
        .map(|i| {
            if i.is_static {
                format!("static {}", i.path)
            } else {
                i.path.clone()
            }
        })
        .collect()
}
