//! Selective rewriting of generated API-description documents.
//!
//! Only two fields change: the entries of a `required` list and a `name`
//! identifier. Property keys and every other value are left alone.

use crate::casing::{letter_case_key, CasingConvention, Key};
use crate::tree::{Mapping, Node};

const REQUIRED_FIELD: &str = "required";
const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, Copy)]
pub struct DocumentFieldTransformer {
    to: CasingConvention,
}

impl DocumentFieldTransformer {
    pub fn new(to: CasingConvention) -> Self {
        Self { to }
    }

    pub fn apply(&self, document: &Node) -> Node {
        match document {
            Node::Map(entries) => {
                let mut rebuilt = Mapping::with_capacity(entries.len());
                for (key, value) in entries {
                    rebuilt.insert(key.clone(), self.rewrite_entry(key, value));
                }
                Node::Map(rebuilt)
            }
            Node::Seq(items) => Node::Seq(items.iter().map(|item| self.apply(item)).collect()),
            scalar => scalar.clone(),
        }
    }

    fn rewrite_entry(&self, key: &Key, value: &Node) -> Node {
        match value {
            Node::Seq(items) if key.is_named(REQUIRED_FIELD) => Node::Seq(
                items
                    .iter()
                    .map(|item| Node::from(letter_case_key(item.clone().into_key(), self.to)))
                    .collect(),
            ),
            Node::Ident(name) if key.is_named(NAME_FIELD) => {
                Node::from(letter_case_key(Key::Ident(name.clone()), self.to))
            }
            other => self.apply(other),
        }
    }
}

/// Rewrite `required` lists and `name` identifiers in `document` into `to`.
pub fn transform_document_fields(document: &Node, to: CasingConvention) -> Node {
    DocumentFieldTransformer::new(to).apply(document)
}
