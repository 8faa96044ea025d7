//! Small helpers for Java names.

/// Last dot-separated segment of a qualified name (`com.acme.Order` => `Order`).
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, simple)| simple)
        .unwrap_or(qualified)
}

/// Everything before the last dot (`com.acme.Order` => `com.acme`).
///
/// For nested classes this is the enclosing class, not the package; callers that need the
/// package should take it from the file header.
pub fn qualifier(qualified: &str) -> Option<&str> {
    qualified.rsplit_once('.').map(|(prefix, _)| prefix)
}

/// Join a package (possibly empty) and a simple name.
pub fn qualify(package: Option<&str>, simple: &str) -> String {
    match package {
        Some(package) if !package.is_empty() => format!("{package}.{simple}"),
        _ => simple.to_string(),
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
