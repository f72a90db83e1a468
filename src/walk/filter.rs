//! Drops mapping entries whose keys are not already in the source convention.

use std::cell::Cell;

use crate::casing::{is_self_consistent, CasingConvention, Key};
use crate::tree::Node;

use super::{walk, KeyStrategy};

/// Keeps only self-consistent keys under `from`, at every depth.
#[derive(Debug)]
pub struct KeyFilter {
    from: CasingConvention,
    dropped: Cell<usize>,
}

impl KeyFilter {
    pub fn new(from: CasingConvention) -> Self {
        Self {
            from,
            dropped: Cell::new(0),
        }
    }

    pub fn apply(&self, node: &Node) -> Node {
        walk(node, self)
    }

    /// Entries dropped so far by this filter.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

impl KeyStrategy for KeyFilter {
    fn rekey(&self, key: &Key) -> Option<Key> {
        if is_self_consistent(key, self.from) {
            return Some(key.clone());
        }

        tracing::trace!(key = %key, from = %self.from, "Dropping key outside source convention");
        self.dropped.set(self.dropped.get() + 1);
        None
    }
}

/// Remove every entry whose key is not expressed in `from`.
pub fn filter_keys(node: &Node, from: CasingConvention) -> Node {
    KeyFilter::new(from).apply(node)
}
