//! Variable name suggestions derived from types.

use testgen_model::{names, PrimitiveType, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// An instance field: `paymentGateway`.
    Field,
    /// A `static final` constant: `PAYMENT_GATEWAY`.
    StaticFinalField,
}

pub trait NameSuggester {
    fn suggest_variable_name(&self, kind: VariableKind, ty: &TypeRef) -> String;
}

/// Conventional Java naming: lower camel case for fields, upper snake case for constants, with
/// acronyms kept as one word (`HTTPClient` => `httpClient` / `HTTP_CLIENT`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaCodeStyle;

impl NameSuggester for JavaCodeStyle {
    fn suggest_variable_name(&self, kind: VariableKind, ty: &TypeRef) -> String {
        let words = type_words(ty);
        if words.is_empty() {
            return match kind {
                VariableKind::Field => "value".to_string(),
                VariableKind::StaticFinalField => "VALUE".to_string(),
            };
        }
        match kind {
            VariableKind::Field => to_lower_camel(&words),
            VariableKind::StaticFinalField => to_upper_snake(&words),
        }
    }
}

fn type_words(ty: &TypeRef) -> Vec<String> {
    match ty {
        TypeRef::Void => Vec::new(),
        // Primitive keywords are reserved; use the first letter like most IDEs do.
        TypeRef::Primitive(p) => vec![primitive_abbreviation(*p).to_string()],
        TypeRef::Class { name, .. } => split_words(names::simple_name(name)),
        TypeRef::Array(element) => {
            let mut words = type_words(element);
            if let Some(last) = words.last_mut() {
                last.push('s');
            }
            words
        }
    }
}

fn primitive_abbreviation(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::Boolean => "b",
        PrimitiveType::Byte => "b",
        PrimitiveType::Short => "s",
        PrimitiveType::Int => "i",
        PrimitiveType::Long => "l",
        PrimitiveType::Char => "c",
        PrimitiveType::Float => "f",
        PrimitiveType::Double => "d",
    }
}

/// Split an identifier into words at case changes, underscores and digits-to-letter
/// boundaries. Runs of capitals stay together: `UUIDValue` => `UUID`, `Value`.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '$' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn to_lower_camel(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&names::capitalize(&lower));
        }
    }
    out
}

fn to_upper_snake(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
