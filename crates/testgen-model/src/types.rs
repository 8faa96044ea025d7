use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Char,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// `byte`, `short`, `int` and `long`.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveType::Byte | PrimitiveType::Short | PrimitiveType::Int | PrimitiveType::Long
        )
    }
}

/// A reference to a Java type as written in a declaration.
///
/// Class names are fully qualified when the model was produced from resolved sources. Type
/// arguments are kept in order; wildcards are reduced to their bound (`? extends Foo` => `Foo`,
/// bare `?` => `java.lang.Object`).
///
/// On the wire a `TypeRef` is its canonical Java text, e.g. `"java.util.List<com.acme.Order>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Void,
    Primitive(PrimitiveType),
    Class { name: String, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Class {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn parse(text: &str) -> Result<Self, TypeParseError> {
        text.parse()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeRef::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Qualified class name with type arguments erased. `None` for primitives, `void` and arrays.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeRef::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Class { args, .. } => args,
            _ => &[],
        }
    }

    /// Element type of an iterable-like reference: its first type argument.
    pub fn iterable_element(&self) -> Option<&TypeRef> {
        self.type_args().first()
    }

    /// Unqualified name without type arguments (`java.util.List<Foo>` => `List`, `int[]` =>
    /// `int[]`).
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Class { name, .. } => names::simple_name(name).to_string(),
            TypeRef::Array(element) => format!("{}[]", element.simple_name()),
        }
    }

    /// Fully qualified text including type arguments.
    pub fn canonical_text(&self) -> String {
        self.to_string()
    }

    /// Text with every class name shortened to its simple name (`List<Order>`).
    pub fn presentable_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, true);
        out
    }

    fn write_text(&self, out: &mut String, simple: bool) {
        match self {
            TypeRef::Void => out.push_str("void"),
            TypeRef::Primitive(p) => out.push_str(p.keyword()),
            TypeRef::Class { name, args } => {
                out.push_str(if simple { names::simple_name(name) } else { name });
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.write_text(out, simple);
                    }
                    out.push('>');
                }
            }
            TypeRef::Array(element) => {
                element.write_text(out, simple);
                out.push_str("[]");
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_text(&mut out, false);
        f.write_str(&out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type `{text}`: {message}")]
pub struct TypeParseError {
    pub text: String,
    pub message: &'static str,
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeParser {
            text,
            src: text.as_bytes(),
            pos: 0,
        };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != parser.src.len() {
            return Err(parser.error("trailing characters"));
        }
        Ok(ty)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct TypeParser<'a> {
    text: &'a str,
    src: &'a [u8],
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn error(&self, message: &'static str) -> TypeParseError {
        TypeParseError {
            text: self.text.to_string(),
            message,
        }
    }

    fn skip_ws(&mut self) {
        while self.pos < self.src.len() && self.src[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'.' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let text = self.text;
        (self.pos > start).then(|| &text[start..self.pos])
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeParseError> {
        let Some(name) = self.ident() else {
            return Err(self.error("expected a type name"));
        };
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(self.error("malformed qualified name"));
        }
        let name = name.to_string();

        let mut ty = if name == "void" {
            TypeRef::Void
        } else if let Some(p) = PrimitiveType::from_keyword(&name) {
            TypeRef::Primitive(p)
        } else {
            let mut args = Vec::new();
            if self.eat(b'<') {
                loop {
                    args.push(self.parse_type_arg()?);
                    if self.eat(b',') {
                        continue;
                    }
                    if self.eat(b'>') {
                        break;
                    }
                    return Err(self.error("unterminated type arguments"));
                }
            }
            TypeRef::Class { name, args }
        };

        while self.eat(b'[') {
            if !self.eat(b']') {
                return Err(self.error("expected `]`"));
            }
            ty = TypeRef::array(ty);
        }
        Ok(ty)
    }

    fn parse_type_arg(&mut self) -> Result<TypeRef, TypeParseError> {
        if !self.eat(b'?') {
            return self.parse_type();
        }
        let checkpoint = self.pos;
        match self.ident() {
            Some("extends") | Some("super") => self.parse_type(),
            _ => {
                self.pos = checkpoint;
                Ok(TypeRef::class("java.lang.Object"))
            }
        }
    }
}
