use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use testgen_model::{names, ClassDecl, JavaFile};

use crate::{lombok, ModelError, SearchScope, SymbolIndex};

/// Serialized project description: the project's own classes plus the library classes it can
/// see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectModel {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub libraries: Vec<ClassDecl>,
}

impl ProjectModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model: ProjectModel = read_json(path)?;
        for class in model.classes.iter().chain(&model.libraries) {
            validate_class(class)?;
        }
        Ok(model)
    }
}

/// Read a test-file model.
pub fn load_java_file(path: &Path) -> Result<JavaFile, ModelError> {
    let file: JavaFile = read_json(path)?;
    for class in &file.classes {
        validate_class(class)?;
    }
    Ok(file)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_class(class: &ClassDecl) -> Result<(), ModelError> {
    if !names::is_java_identifier(&class.name) {
        return Err(ModelError::InvalidClass {
            qualified_name: class.qualified_name.clone(),
            reason: format!("`{}` is not a valid simple name", class.name),
        });
    }
    if names::simple_name(&class.qualified_name) != class.name {
        return Err(ModelError::InvalidClass {
            qualified_name: class.qualified_name.clone(),
            reason: format!("qualified name does not end with `{}`", class.name),
        });
    }
    for inner in &class.inner_classes {
        if names::qualifier(&inner.qualified_name) != Some(class.qualified_name.as_str()) {
            return Err(ModelError::InvalidClass {
                qualified_name: inner.qualified_name.clone(),
                reason: format!("not nested in `{}`", class.qualified_name),
            });
        }
        validate_class(inner)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Synthesize Lombok-generated members on project classes.
    pub lombok: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { lombok: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassOrigin {
    Project,
    Library,
}

#[derive(Debug, Clone)]
struct IndexedClass {
    decl: ClassDecl,
    origin: ClassOrigin,
}

/// Simple in-memory symbol index.
///
/// Nested classes are indexed under their own qualified names. A project class shadows a
/// library class with the same name.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    classes: HashMap<String, IndexedClass>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_model(model: ProjectModel, options: &IndexOptions) -> Self {
        let mut index = Self::new();
        index.extend_from_model(model, options);
        index
    }

    pub fn extend_from_model(&mut self, model: ProjectModel, options: &IndexOptions) {
        let ProjectModel { classes, libraries } = model;
        let (project_count, library_count) = (classes.len(), libraries.len());

        for class in libraries {
            self.add_library_class(class);
        }
        for mut class in classes {
            if options.lombok {
                let generated = lombok::expand(&mut class);
                if generated > 0 {
                    tracing::debug!(
                        target: "testgen.index",
                        class = %class.qualified_name,
                        generated,
                        "expanded lombok members"
                    );
                }
            }
            self.add_project_class(class);
        }

        tracing::debug!(
            target: "testgen.index",
            project_classes = project_count,
            library_classes = library_count,
            indexed = self.classes.len(),
            "loaded project model"
        );
    }

    pub fn add_project_class(&mut self, class: ClassDecl) {
        self.insert(class, ClassOrigin::Project);
    }

    pub fn add_library_class(&mut self, class: ClassDecl) {
        self.insert(class, ClassOrigin::Library);
    }

    fn insert(&mut self, class: ClassDecl, origin: ClassOrigin) {
        for inner in &class.inner_classes {
            self.insert(inner.clone(), origin);
        }

        let shadowed = origin == ClassOrigin::Library
            && self
                .classes
                .get(&class.qualified_name)
                .is_some_and(|existing| existing.origin == ClassOrigin::Project);
        if shadowed {
            tracing::trace!(
                target: "testgen.index",
                class = %class.qualified_name,
                "library class shadowed by project class"
            );
            return;
        }

        self.classes.insert(
            class.qualified_name.clone(),
            IndexedClass {
                decl: class,
                origin,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl SymbolIndex for MemoryIndex {
    fn find_class(&self, qualified_name: &str, scope: SearchScope) -> Option<&ClassDecl> {
        let entry = self.classes.get(qualified_name)?;
        match (scope, entry.origin) {
            (SearchScope::All, _) | (SearchScope::Project, ClassOrigin::Project) => {
                Some(&entry.decl)
            }
            (SearchScope::Project, ClassOrigin::Library) => None,
        }
    }
}
