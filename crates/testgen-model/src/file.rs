use serde::{Deserialize, Serialize};

use crate::decl::ClassDecl;
use crate::names;

/// An import statement. Static imports carry the member in the path
/// (`org.mockito.Mockito.*`, `org.assertj.core.api.Assertions.assertThat`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportDecl {
    pub path: String,
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
}

impl ImportDecl {
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
        }
    }

    pub fn static_member(class: &str, member: &str) -> Self {
        Self {
            path: format!("{class}.{member}"),
            is_static: true,
        }
    }

    /// `pkg.*` (or `Class.*` for static imports).
    pub fn is_on_demand(&self) -> bool {
        self.path.ends_with(".*")
    }

    /// Whether this import makes `qualified` (a class name) available by its simple name.
    pub fn covers_class(&self, qualified: &str) -> bool {
        if self.is_static {
            return false;
        }
        if self.path == qualified {
            return true;
        }
        match (self.path.strip_suffix(".*"), names::qualifier(qualified)) {
            (Some(package), Some(owner)) => package == owner,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportDecl>,
}

impl FileHeader {
    pub fn plain_imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.imports.iter().filter(|i| !i.is_static)
    }

    pub fn static_imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.imports.iter().filter(|i| i.is_static)
    }

    pub fn has_static_import(&self, path: &str) -> bool {
        self.static_imports().any(|i| i.path == path)
    }

    pub fn imports_class(&self, qualified: &str) -> bool {
        self.plain_imports().any(|i| i.covers_class(qualified))
    }
}

/// Aggregate counts over a file, used to summarise what a generation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    pub imports: usize,
    pub annotations: usize,
    pub fields: usize,
    pub methods: usize,
    pub classes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaFile {
    /// File name including the extension, e.g. `OrderServiceTest.java`.
    pub name: String,
    #[serde(flatten)]
    pub header: FileHeader,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl JavaFile {
    pub fn new(name: impl Into<String>, package: Option<&str>) -> Self {
        Self {
            name: name.into(),
            header: FileHeader {
                package: package.map(str::to_string),
                imports: Vec::new(),
            },
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }

    pub fn package(&self) -> Option<&str> {
        self.header.package.as_deref()
    }

    /// File name without directories and extension.
    pub fn stem(&self) -> &str {
        let base = self
            .name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.name);
        base.strip_suffix(".java").unwrap_or(base)
    }

    fn unit_test_class_index(&self) -> Option<usize> {
        let stem = self.stem();
        self.classes
            .iter()
            .position(|c| c.name == stem)
            .or_else(|| (!self.classes.is_empty()).then_some(0))
    }

    /// The top-level class named after the file, falling back to the first top-level class.
    pub fn unit_test_class(&self) -> Option<&ClassDecl> {
        self.unit_test_class_index().map(|idx| &self.classes[idx])
    }

    /// Borrow the header and the unit test class at the same time.
    pub fn split_unit_test_class_mut(&mut self) -> Option<(&mut FileHeader, &mut ClassDecl)> {
        let idx = self.unit_test_class_index()?;
        Some((&mut self.header, &mut self.classes[idx]))
    }

    pub fn stats(&self) -> ModelStats {
        let mut stats = ModelStats {
            imports: self.header.imports.len(),
            ..ModelStats::default()
        };
        for class in &self.classes {
            class.walk(&mut |c| {
                stats.classes += 1;
                stats.fields += c.fields.len();
                stats.methods += c.methods.len();
                stats.annotations += c.annotations.len()
                    + c.fields.iter().map(|f| f.annotations.len()).sum::<usize>()
                    + c.methods.iter().map(|m| m.annotations.len()).sum::<usize>();
            });
        }
        stats
    }
}
