//! Rewrites every mapping key into a target convention.

use crate::casing::{letter_case_key, CasingConvention, Key};
use crate::tree::Node;

use super::{walk, KeyStrategy};

#[derive(Debug, Clone, Copy)]
pub struct KeyTransformer {
    to: CasingConvention,
}

impl KeyTransformer {
    pub fn new(to: CasingConvention) -> Self {
        Self { to }
    }

    pub fn apply(&self, node: &Node) -> Node {
        walk(node, self)
    }
}

impl KeyStrategy for KeyTransformer {
    fn rekey(&self, key: &Key) -> Option<Key> {
        Some(letter_case_key(key.clone(), self.to))
    }
}

/// Rewrite every key in `node`, at every depth, into `to`.
pub fn transform_keys(node: &Node, to: CasingConvention) -> Node {
    KeyTransformer::new(to).apply(node)
}
