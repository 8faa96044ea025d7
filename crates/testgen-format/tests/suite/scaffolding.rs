use pretty_assertions::assert_eq;
use testgen_codegen::{generate_scaffolding, GenerateOptions};
use testgen_format::{render_java_file, PrintConfig};
use testgen_index::MemoryIndex;
use testgen_model::{ClassDecl, ClassKind, FieldDecl, JavaFile, MethodDecl, Modifiers, TypeRef};

fn ty(text: &str) -> TypeRef {
    TypeRef::parse(text).expect("valid type")
}

fn order_service_index() -> MemoryIndex {
    let mut index = MemoryIndex::with_builtin_libraries();
    index.add_project_class(
        ClassDecl::new("com.acme.OrderService")
            .with_modifiers(Modifiers::public())
            .with_field(
                FieldDecl::new("paymentGateway", ty("com.acme.PaymentGateway"))
                    .with_modifiers(Modifiers::private().with_final(true)),
            )
            .with_field(FieldDecl::new("retryCount", ty("int")).with_modifiers(Modifiers::private()))
            .with_method(
                MethodDecl::new("isEligible", ty("boolean"))
                    .with_param("order", ty("com.acme.Order")),
            ),
    );
    index.add_project_class(
        ClassDecl::new("com.acme.PaymentGateway").with_kind(ClassKind::Interface),
    );
    index.add_project_class(ClassDecl::new("com.acme.Order").with_modifiers(Modifiers::public()));
    index
}

#[test]
fn generated_scaffolding_renders_as_java() {
    let index = order_service_index();
    let mut file = JavaFile::new("OrderServiceTest.java", Some("com.acme"))
        .with_class(ClassDecl::new("com.acme.OrderServiceTest"));
    generate_scaffolding(&mut file, &index, &GenerateOptions { seed: Some(3) });

    // Pin the random literal so the output is stable.
    let retry = file.classes[0]
        .fields
        .iter_mut()
        .find(|f| f.name == "RETRY_COUNT")
        .expect("constant field");
    retry.initializer = Some("42".to_string());

    let expected = "\
package com.acme;

import org.mockito.junit.jupiter.MockitoExtension;
import org.junit.jupiter.api.extension.ExtendWith;
import org.mockito.Mock;
import org.mockito.InjectMocks;
import org.junit.jupiter.api.BeforeEach;
import org.junit.jupiter.api.Nested;

import static org.assertj.core.api.Assertions.assertThat;
import static org.mockito.Mockito.*;

@ExtendWith(MockitoExtension.class)
class OrderServiceTest {
    @Mock
    private PaymentGateway paymentGateway;
    private static final int RETRY_COUNT = 42;
    @InjectMocks
    private OrderService underTest;

    @Nested
    class WhenCheckingIfIsEligible {
        @Mock
        private Order order;

        @BeforeEach
        void setup() {
        }
    }
}
";
    assert_eq!(render_java_file(&file, &PrintConfig::default()), expected);
}

#[test]
fn classes_outside_the_file_scope_stay_qualified() {
    let file = JavaFile::new("ReportTest.java", Some("com.acme.web")).with_class(
        ClassDecl::new("com.acme.web.ReportTest").with_field(
            FieldDecl::new("items", ty("java.util.List<com.acme.Order>"))
                .with_modifiers(Modifiers::private()),
        ),
    );

    let expected = "\
package com.acme.web;

class ReportTest {
    private java.util.List<com.acme.Order> items;
}
";
    assert_eq!(render_java_file(&file, &PrintConfig::default()), expected);
}

#[test]
fn constructors_and_bodies() {
    let file = JavaFile::new("Clock.java", None).with_class(
        ClassDecl::new("Clock")
            .with_modifiers(Modifiers::public().with_final(true))
            .with_method(
                MethodDecl::constructor("Clock")
                    .with_modifiers(Modifiers::private())
                    .with_body_line("super();"),
            )
            .with_method(
                MethodDecl::new("now", ty("java.time.Instant"))
                    .with_modifiers(Modifiers::public().with_static(true))
                    .with_body_line("return java.time.Instant.now();"),
            ),
    );

    let expected = "\
public final class Clock {
    private Clock() {
        super();
    }

    public static java.time.Instant now() {
        return java.time.Instant.now();
    }
}
";
    assert_eq!(render_java_file(&file, &PrintConfig::default()), expected);
}

#[test]
fn imported_class_shadows_same_package_class_of_the_same_name() {
    let mut index = MemoryIndex::with_builtin_libraries();
    index.add_project_class(
        ClassDecl::new("com.acme.OrderService")
            .with_field(
                FieldDecl::new("remoteGateway", ty("com.other.Gateway"))
                    .with_modifiers(Modifiers::private()),
            )
            .with_field(
                FieldDecl::new("localGateway", ty("com.acme.Gateway"))
                    .with_modifiers(Modifiers::private()),
            ),
    );
    index.add_project_class(ClassDecl::new("com.other.Gateway").with_kind(ClassKind::Interface));
    index.add_project_class(ClassDecl::new("com.acme.Gateway").with_kind(ClassKind::Interface));

    let mut file = JavaFile::new("OrderServiceTest.java", Some("com.acme"))
        .with_class(ClassDecl::new("com.acme.OrderServiceTest"));
    generate_scaffolding(&mut file, &index, &GenerateOptions { seed: Some(3) });

    let expected = "\
package com.acme;

import org.mockito.junit.jupiter.MockitoExtension;
import org.junit.jupiter.api.extension.ExtendWith;
import com.other.Gateway;
import org.mockito.Mock;
import org.mockito.InjectMocks;

import static org.assertj.core.api.Assertions.assertThat;
import static org.mockito.Mockito.*;

@ExtendWith(MockitoExtension.class)
class OrderServiceTest {
    @Mock
    private Gateway remoteGateway;
    @Mock
    private com.acme.Gateway localGateway;
    @InjectMocks
    private OrderService underTest;
}
";
    assert_eq!(render_java_file(&file, &PrintConfig::default()), expected);
}
