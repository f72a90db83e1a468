//! Structural keys and key conversion.

use std::fmt;

use serde_json::Number;

use super::convention::CasingConvention;

/// A key of a mapping node.
///
/// `Ident` is a symbolic identifier: distinct from `Text` as a key, but equal
/// to it by value when compared through [`Key::same_identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Absent key.
    Nil,
    Text(String),
    Ident(String),
    Number(Number),
    Bool(bool),
    /// Any other key, carried by its textual representation.
    Opaque(String),
}

impl Key {
    pub fn text(text: impl Into<String>) -> Self {
        Key::Text(text.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Key::Ident(name.into())
    }

    /// Textual form of the key as an identifier, `None` for `Nil`.
    pub fn identifier(&self) -> Option<String> {
        match self {
            Key::Nil => None,
            Key::Text(text) | Key::Ident(text) | Key::Opaque(text) => Some(text.clone()),
            Key::Number(number) => Some(number.to_string()),
            Key::Bool(flag) => Some(flag.to_string()),
        }
    }

    /// Identifier form of the key with no case rewrite applied.
    pub fn into_ident(self) -> Key {
        match self {
            Key::Nil => Key::Nil,
            Key::Text(text) | Key::Ident(text) | Key::Opaque(text) => Key::Ident(text),
            Key::Number(number) => Key::Ident(number.to_string()),
            Key::Bool(flag) => Key::Ident(flag.to_string()),
        }
    }

    /// True when both keys have the same identifier form.
    pub fn same_identifier(&self, other: &Key) -> bool {
        self.identifier() == other.identifier()
    }

    /// True for a text or identifier key reading `name`.
    pub fn is_named(&self, name: &str) -> bool {
        match self {
            Key::Text(text) | Key::Ident(text) => text == name,
            _ => false,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Nil => f.write_str("null"),
            Key::Text(text) | Key::Ident(text) | Key::Opaque(text) => f.write_str(text),
            Key::Number(number) => write!(f, "{}", number),
            Key::Bool(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(text.to_string())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Number(value.into())
    }
}

impl From<bool> for Key {
    fn from(flag: bool) -> Self {
        Key::Bool(flag)
    }
}

/// Apply `coerce` to a key, keeping text and identifier keys in their
/// category. Numbers and booleans are stringified and come back as
/// identifiers. Opaque keys become identifiers without `coerce` applied.
pub fn convert<F>(key: Key, coerce: F) -> Key
where
    F: Fn(&str) -> String,
{
    match key {
        Key::Nil => Key::Nil,
        Key::Text(text) => Key::Text(coerce(&text)),
        Key::Ident(name) => Key::Ident(coerce(&name)),
        Key::Number(number) => Key::Ident(coerce(&number.to_string())),
        Key::Bool(flag) => Key::Ident(coerce(&flag.to_string())),
        Key::Opaque(repr) => Key::Ident(repr),
    }
}

/// Rewrite `key` into `convention`.
///
/// An unrecognized convention returns the identifier form of the key verbatim.
pub fn letter_case_key(key: Key, convention: CasingConvention) -> Key {
    match convention.coercion() {
        Some(coerce) => convert(key, coerce),
        None => key.into_ident(),
    }
}

/// True when `key` is already expressed in `convention`.
pub fn is_self_consistent(key: &Key, convention: CasingConvention) -> bool {
    letter_case_key(key.clone(), convention).same_identifier(key)
}
