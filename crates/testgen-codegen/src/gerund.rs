//! Method name to nested test class name (`isValid` => `WhenCheckingIfIsValid`).

pub const NESTED_CLASS_PREFIX: &str = "When";

/// `When` + gerund of the leading verb + the rest of the name.
///
/// The verb is everything before the first uppercase character. A name with no uppercase
/// character is all verb.
pub fn when_class_name(method_name: &str) -> String {
    let split = method_name
        .char_indices()
        .find(|(_, c)| c.is_uppercase())
        .map_or(method_name.len(), |(idx, _)| idx);
    let (verb, rest) = method_name.split_at(split);
    format!("{NESTED_CLASS_PREFIX}{}{rest}", gerund(verb))
}

/// Capitalized gerund form of `verb`.
///
/// Only a handful of doubling verbs are known (`get`, `commit`); anything else ending in a
/// consonant gets a plain `ing`.
pub fn gerund(verb: &str) -> String {
    let chars: Vec<char> = verb.chars().collect();
    let Some(&first) = chars.first() else {
        return String::new();
    };
    let capitalized: String = first.to_uppercase().chain(chars[1..].iter().copied()).collect();

    if chars.len() == 1 {
        return format!("{capitalized}ing");
    }

    if ["is", "can", "has"].iter().any(|p| verb.starts_with(p)) {
        return format!("CheckingIf{capitalized}");
    }

    if ["ee", "ye", "oe"].iter().any(|s| verb.ends_with(s)) {
        return format!("{capitalized}ing");
    }

    if let Some(stem) = capitalized.strip_suffix('e') {
        return format!("{stem}ing");
    }

    let lower = verb.to_lowercase();
    if lower == "get" || lower == "commit" {
        let last = chars[chars.len() - 1];
        return format!("{capitalized}{last}ing");
    }

    format!("{capitalized}ing")
}
