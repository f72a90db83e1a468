//! The recursive document type walked by the normalizers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};

use crate::casing::Key;

/// Ordered mapping node contents.
pub type Mapping = IndexMap<Key, Node>;

/// A structural document: mapping, sequence, or scalar.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum Node {
    Map(Mapping),
    Seq(Vec<Node>),
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Symbolic identifier value.
    Ident(String),
}

impl Node {
    /// Build a mapping from `(key, value)` pairs, in order.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(name.into())
    }

    /// True for mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Map(_) | Node::Seq(_))
    }

    /// Value stored under `key` when this node is a mapping.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.get(&key.into()),
            _ => None,
        }
    }

    /// Number of entries in a mapping, counted at every depth.
    pub fn entry_count(&self) -> usize {
        match self {
            Node::Map(entries) => entries
                .values()
                .map(|value| 1 + value.entry_count())
                .sum(),
            Node::Seq(items) => items.iter().map(Node::entry_count).sum(),
            _ => 0,
        }
    }

    /// Use this node as a mapping key.
    ///
    /// Containers have no key form of their own and become opaque keys
    /// carrying their JSON rendering.
    pub fn into_key(self) -> Key {
        match self {
            Node::Null => Key::Nil,
            Node::Bool(flag) => Key::Bool(flag),
            Node::Number(number) => Key::Number(number),
            Node::Text(text) => Key::Text(text),
            Node::Ident(name) => Key::Ident(name),
            container @ (Node::Map(_) | Node::Seq(_)) => {
                Key::Opaque(JsonValue::from(container).to_string())
            }
        }
    }
}

impl From<Key> for Node {
    fn from(key: Key) -> Self {
        match key {
            Key::Nil => Node::Null,
            Key::Text(text) => Node::Text(text),
            Key::Ident(name) | Key::Opaque(name) => Node::Ident(name),
            Key::Number(number) => Node::Number(number),
            Key::Bool(flag) => Node::Bool(flag),
        }
    }
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::Null,
            JsonValue::Bool(flag) => Node::Bool(flag),
            JsonValue::Number(number) => Node::Number(number),
            JsonValue::String(text) => Node::Text(text),
            JsonValue::Array(items) => Node::Seq(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(entries) => Node::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::Text(k), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for JsonValue {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => JsonValue::Null,
            Node::Bool(flag) => JsonValue::Bool(flag),
            Node::Number(number) => JsonValue::Number(number),
            Node::Text(text) | Node::Ident(text) => JsonValue::String(text),
            Node::Seq(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Node::Map(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<bool> for Node {
    fn from(flag: bool) -> Self {
        Node::Bool(flag)
    }
}
