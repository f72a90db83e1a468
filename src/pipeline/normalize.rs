//! Pure request/response normalization functions shared by both call shapes.

use crate::config::{RequestCasing, ResponseCasing};
use crate::observability::metrics;
use crate::walk::{transform_document_fields, KeyFilter, KeyTransformer};

use super::message::{Request, RequestField, Response};

/// Filter then rewrite the keys of every container field of `request`.
///
/// Each field is handled on its own; absent and scalar fields are untouched.
pub fn normalize_request(request: &Request, casing: &RequestCasing) -> Request {
    let mut normalized = request.clone();
    let transformer = KeyTransformer::new(casing.to);

    for field in RequestField::ALL {
        let Some(value) = request.field(field).filter(|value| value.is_container()) else {
            continue;
        };

        let filter = KeyFilter::new(casing.from);
        let filtered = filter.apply(value);
        if filter.dropped() > 0 {
            tracing::debug!(
                field = field.name(),
                dropped = filter.dropped(),
                from = %casing.from,
                "Dropped keys not in source convention"
            );
            metrics::record_dropped_keys(field.name(), filter.dropped());
        }

        *normalized.field_mut(field) = Some(transformer.apply(&filtered));
    }

    normalized
}

/// Rewrite the keys of a container `body`; anything else passes through.
pub fn normalize_response(response: &Response, casing: &ResponseCasing) -> Response {
    let mut normalized = response.clone();
    if let Some(body) = response.body.as_ref().filter(|body| body.is_container()) {
        normalized.body = Some(KeyTransformer::new(casing.to).apply(body));
    }
    normalized
}

/// Rewrite `required`/`name` fields of a generated document body.
pub fn normalize_document_response(response: &Response, casing: &ResponseCasing) -> Response {
    let mut normalized = response.clone();
    if let Some(body) = response.body.as_ref().filter(|body| body.is_container()) {
        normalized.body = Some(transform_document_fields(body, casing.to));
        metrics::record_document_rewrite();
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::CasingConvention;
    use crate::tree::Node;
    use serde_json::json;

    #[test]
    fn test_fields_are_normalized_independently() {
        let request = Request::default()
            .with_field(RequestField::QueryParams, Node::from(json!({"pageSize": "10", "page_no": "2"})))
            .with_field(RequestField::Params, Node::from(json!([{"userId": 1}])))
            .with_body(Node::text("raw"));

        let normalized = normalize_request(&request, &RequestCasing::default());

        assert_eq!(
            normalized.query_params,
            Some(Node::from(json!({"page-size": "10"})))
        );
        assert_eq!(normalized.params, Some(Node::from(json!([{"user-id": 1}]))));
        assert_eq!(normalized.body, Some(Node::text("raw")));
        assert_eq!(normalized.body_params, None);
        // input untouched
        assert!(request.query_params.unwrap().get("page_no").is_some());
    }

    #[test]
    fn test_custom_casing() {
        let request = Request::default().with_body(Node::from(json!({"user_name": "a", "userId": 1})));
        let casing = RequestCasing {
            from: CasingConvention::Snake,
            to: CasingConvention::ScreamingSnake,
        };

        assert_eq!(
            normalize_request(&request, &casing).body,
            Some(Node::from(json!({"USER_NAME": "a"})))
        );
    }

    #[test]
    fn test_response_scalar_body_untouched() {
        let response = Response::ok(Node::text("user-name"));
        assert_eq!(normalize_response(&response, &ResponseCasing::default()), response);

        let empty = Response::default();
        assert_eq!(normalize_response(&empty, &ResponseCasing::default()), empty);
    }
}
