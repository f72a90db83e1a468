//! Body and query-string helpers for the axum adapter.

use axum::http::{header, uri::PathAndQuery, HeaderMap, Uri};
use serde_json::Value as JsonValue;
use url::form_urlencoded;

use crate::casing::Key;
use crate::tree::{Mapping, Node};

/// Largest body buffered for rewriting.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// True for `application/json` and `+json` media types.
pub fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

pub fn parse_json(bytes: &[u8]) -> Option<Node> {
    serde_json::from_slice::<JsonValue>(bytes).ok().map(Node::from)
}

pub fn encode_json(node: &Node) -> Option<Vec<u8>> {
    serde_json::to_vec(node).ok()
}

/// Parse a query string into a mapping of text keys to text values.
///
/// A key repeated in the query collects its values, in order, into a sequence.
pub fn parse_query(query: &str) -> Node {
    let mut entries = Mapping::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = Node::Text(value.into_owned());
        match entries.get_mut(&Key::Text(key.to_string())) {
            Some(Node::Seq(values)) => values.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, Node::Null);
                *existing = Node::Seq(vec![first, value]);
            }
            None => {
                entries.insert(Key::Text(key.into_owned()), value);
            }
        }
    }
    Node::Map(entries)
}

/// Render a mapping back into a query string; `None` for other shapes.
///
/// Sequence values are written as one pair per element.
pub fn render_query(node: &Node) -> Option<String> {
    let Node::Map(entries) = node else {
        return None;
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in entries {
        let key = key.to_string();
        match value {
            Node::Seq(values) => {
                for value in values {
                    serializer.append_pair(&key, &query_value(value));
                }
            }
            value => {
                serializer.append_pair(&key, &query_value(value));
            }
        }
    }
    Some(serializer.finish())
}

fn query_value(value: &Node) -> String {
    match value {
        Node::Text(text) | Node::Ident(text) => text.clone(),
        other => JsonValue::from(other.clone()).to_string(),
    }
}

/// `uri` with its query replaced by `query`.
pub fn with_query(uri: &Uri, query: &str) -> Uri {
    let path_and_query = if query.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), query)
    };

    let mut parts = uri.clone().into_parts();
    match PathAndQuery::try_from(path_and_query) {
        Ok(path_and_query) => parts.path_and_query = Some(path_and_query),
        Err(_) => return uri.clone(),
    }
    Uri::from_parts(parts).unwrap_or_else(|_| uri.clone())
}
