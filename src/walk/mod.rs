//! Recursive tree walkers.
//!
//! # Data Flow
//! ```text
//! Node
//!     → walk() (mapping: every entry, sequence: every element, scalar: untouched)
//!     → KeyStrategy::rekey() per mapping entry
//!         → filter.rs (keep self-consistent keys, drop the rest)
//!         → transform.rs (rewrite every key)
//!     → new Node
//!
//! document.rs walks the same shapes but rewrites selected values instead of keys.
//! ```
//!
//! # Design Decisions
//! - Walkers never mutate their input; they build a new tree
//! - Mapping values are walked before their entry is stored
//! - Key collisions are last-write-wins, keeping the first entry's position

pub mod document;
pub mod filter;
pub mod transform;

pub use document::{transform_document_fields, DocumentFieldTransformer};
pub use filter::{filter_keys, KeyFilter};
pub use transform::{transform_keys, KeyTransformer};

use crate::casing::Key;
use crate::tree::{Mapping, Node};

/// Per-entry key policy applied by [`walk`].
pub trait KeyStrategy {
    /// Key to store the entry under, or `None` to drop the entry.
    fn rekey(&self, key: &Key) -> Option<Key>;
}

/// Rebuild `node`, passing every mapping key through `strategy`.
pub fn walk<S>(node: &Node, strategy: &S) -> Node
where
    S: KeyStrategy + ?Sized,
{
    match node {
        Node::Map(entries) => {
            let mut rebuilt = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                if let Some(key) = strategy.rekey(key) {
                    rebuilt.insert(key, walk(value, strategy));
                }
            }
            Node::Map(rebuilt)
        }
        Node::Seq(items) => Node::Seq(items.iter().map(|item| walk(item, strategy)).collect()),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl KeyStrategy for Upper {
        fn rekey(&self, key: &Key) -> Option<Key> {
            key.identifier().map(|text| Key::Text(text.to_uppercase()))
        }
    }

    #[test]
    fn test_walk_reaches_maps_inside_sequences() {
        let node = Node::Seq(vec![
            Node::from_entries([("a", Node::Seq(vec![Node::from_entries([("b", Node::from(1))])]))]),
            Node::text("leave me"),
        ]);

        let walked = walk(&node, &Upper);

        assert_eq!(
            walked,
            Node::Seq(vec![
                Node::from_entries([(
                    "A",
                    Node::Seq(vec![Node::from_entries([("B", Node::from(1))])])
                )]),
                Node::text("leave me"),
            ])
        );
    }

    #[test]
    fn test_collisions_are_last_write_wins() {
        let node = Node::from_entries([("a", Node::from(1)), ("b", Node::from(2)), ("A", Node::from(3))]);

        let walked = walk(&node, &Upper);

        assert_eq!(
            walked,
            Node::from_entries([("A", Node::from(3)), ("B", Node::from(2))])
        );
        let Node::Map(entries) = walked else {
            panic!("expected a mapping");
        };
        assert_eq!(entries.get_index(0).map(|(k, _)| k.to_string()), Some("A".into()));
    }
}
