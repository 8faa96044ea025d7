//! Library stubs that let generated imports resolve without a real classpath.

use testgen_model::{ClassDecl, ClassKind, Modifiers, TypeRef};

use crate::{MemoryIndex, JAVA_LANG_ENUM};

struct Stub {
    qualified_name: &'static str,
    kind: ClassKind,
    is_final: bool,
    super_type: Option<&'static str>,
}

const fn class(qualified_name: &'static str) -> Stub {
    Stub {
        qualified_name,
        kind: ClassKind::Class,
        is_final: false,
        super_type: None,
    }
}

const fn final_class(qualified_name: &'static str) -> Stub {
    Stub {
        is_final: true,
        ..class(qualified_name)
    }
}

const fn interface(qualified_name: &'static str, super_type: Option<&'static str>) -> Stub {
    Stub {
        kind: ClassKind::Interface,
        super_type,
        ..class(qualified_name)
    }
}

const fn annotation(qualified_name: &'static str) -> Stub {
    Stub {
        kind: ClassKind::Annotation,
        ..class(qualified_name)
    }
}

const STUBS: &[Stub] = &[
    // java.lang
    class("java.lang.Object"),
    final_class("java.lang.String"),
    final_class("java.lang.Boolean"),
    final_class("java.lang.Byte"),
    final_class("java.lang.Character"),
    final_class("java.lang.Short"),
    final_class("java.lang.Integer"),
    final_class("java.lang.Long"),
    final_class("java.lang.Float"),
    final_class("java.lang.Double"),
    Stub {
        super_type: Some("java.lang.Object"),
        ..class(JAVA_LANG_ENUM)
    },
    // java.util
    final_class("java.util.UUID"),
    final_class("java.util.Optional"),
    interface("java.lang.Iterable", None),
    interface("java.util.Collection", Some("java.lang.Iterable<E>")),
    interface("java.util.List", Some("java.util.Collection<E>")),
    interface("java.util.Set", Some("java.util.Collection<E>")),
    interface("java.util.Map", None),
    Stub {
        super_type: Some("java.util.List<E>"),
        ..class("java.util.ArrayList")
    },
    Stub {
        super_type: Some("java.util.Set<E>"),
        ..class("java.util.HashSet")
    },
    // java.time
    final_class("java.time.Instant"),
    final_class("java.time.ZonedDateTime"),
    final_class("java.time.LocalDate"),
    final_class("java.time.LocalDateTime"),
    final_class("java.time.Duration"),
    // java.math
    class("java.math.BigDecimal"),
    // JUnit 5
    annotation("org.junit.jupiter.api.Test"),
    annotation("org.junit.jupiter.api.Nested"),
    annotation("org.junit.jupiter.api.BeforeEach"),
    annotation("org.junit.jupiter.api.extension.ExtendWith"),
    // Mockito
    class("org.mockito.Mockito"),
    annotation("org.mockito.Mock"),
    annotation("org.mockito.InjectMocks"),
    class("org.mockito.junit.jupiter.MockitoExtension"),
    // AssertJ
    class("org.assertj.core.api.Assertions"),
];

impl MemoryIndex {
    /// An index preloaded with stubs for the JDK types the value synthesizer knows about and the
    /// JUnit 5, Mockito and AssertJ classes the generator imports.
    ///
    /// Boxed primitives and `String` are `final`, as in the JDK.
    pub fn with_builtin_libraries() -> Self {
        let mut index = Self::new();
        for stub in STUBS {
            let mut class = ClassDecl::new(stub.qualified_name)
                .with_kind(stub.kind)
                .with_modifiers(Modifiers::public().with_final(stub.is_final));
            if let Some(super_type) = stub.super_type {
                match TypeRef::parse(super_type) {
                    Ok(ty) => class.super_types.push(ty),
                    Err(err) => {
                        tracing::warn!(target: "testgen.index", error = %err, "bad builtin stub")
                    }
                }
            }
            index.add_library_class(class);
        }
        index
    }
}
