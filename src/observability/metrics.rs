//! Metrics collection.
//!
//! # Metrics
//! - `case_normalizer_keys_dropped_total` (counter): request keys dropped by the
//!   source-convention filter, by request field
//! - `case_normalizer_documents_rewritten_total` (counter): generated documents
//!   passed through the document-field transform
//! - `case_normalizer_unauthorized_total` (counter): requests short-circuited by
//!   the authorization gate
//!
//! # Design Decisions
//! - Counters go through the `metrics` facade; the host installs a recorder
//! - Without a recorder every update is a no-op

use metrics::counter;

pub fn record_dropped_keys(field: &'static str, count: usize) {
    counter!("case_normalizer_keys_dropped_total", "field" => field).increment(count as u64);
}

pub fn record_document_rewrite() {
    counter!("case_normalizer_documents_rewritten_total").increment(1);
}

pub fn record_unauthorized() {
    counter!("case_normalizer_unauthorized_total").increment(1);
}
