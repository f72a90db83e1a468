//! Key-case middleware for axum routers.
//!
//! ```ignore
//! Router::new()
//!     .route("/users", post(create_user))
//!     .layer(middleware::from_fn_with_state(RequestCasing::default(), request_case_middleware))
//!     .layer(middleware::from_fn_with_state(ResponseCasing::default(), response_case_middleware))
//! ```

use std::error::Error as _;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header, response::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;

use crate::config::{RequestCasing, ResponseCasing};
use crate::http::body::{
    encode_json, is_json, parse_json, parse_query, render_query, with_query, MAX_BODY_BYTES,
};
use crate::pipeline::{
    normalize_document_response, normalize_request, normalize_response,
    Request as CaseRequest, Response as CaseResponse,
};

/// Request body as forwarded: untouched stream, or buffered for rewriting.
enum Payload {
    Streamed(Body),
    Buffered(Bytes),
}

/// Normalize JSON body keys and query-string keys before the handler runs.
pub async fn request_case_middleware(
    State(casing): State<RequestCasing>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let mut staged = CaseRequest::new(parts.method.clone(), parts.uri.clone());
    staged.query_params = parts.uri.query().map(parse_query);

    let payload = if is_json(&parts.headers) {
        let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => bytes,
            Err(error) if is_length_limit(&error) => {
                tracing::warn!(limit = MAX_BODY_BYTES, "Request body exceeds buffer limit");
                return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
            }
            Err(error) => {
                tracing::warn!(error = %error, "Failed to buffer request body");
                return (StatusCode::BAD_REQUEST, "Failed to read request body").into_response();
            }
        };
        staged.body = parse_json(&bytes);
        if staged.body.is_none() {
            tracing::debug!(path = %parts.uri.path(), "Request body is not valid JSON, forwarding as is");
        }
        Payload::Buffered(bytes)
    } else {
        Payload::Streamed(body)
    };

    let normalized = normalize_request(&staged, &casing);

    if let Some(query) = normalized.query_params.as_ref().and_then(render_query) {
        parts.uri = with_query(&parts.uri, &query);
    }

    let body = match payload {
        Payload::Streamed(body) => body,
        Payload::Buffered(bytes) => match normalized.body.as_ref().and_then(encode_json) {
            Some(encoded) => {
                parts.headers.remove(header::CONTENT_LENGTH);
                Body::from(encoded)
            }
            None => Body::from(bytes),
        },
    };

    next.run(Request::from_parts(parts, body)).await
}

/// Rewrite every key of JSON response bodies.
pub async fn response_case_middleware(
    State(casing): State<ResponseCasing>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    rewrite_json_response(response, |staged| normalize_response(staged, &casing)).await
}

/// Rewrite `required` lists of JSON API-description responses.
pub async fn document_case_middleware(
    State(casing): State<ResponseCasing>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    rewrite_json_response(response, |staged| normalize_document_response(staged, &casing)).await
}

async fn rewrite_json_response<F>(response: Response, rewrite: F) -> Response
where
    F: FnOnce(&CaseResponse) -> CaseResponse,
{
    if !is_json(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(error = %error, "Failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let Some(node) = parse_json(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    let normalized = rewrite(&CaseResponse::new(parts.status).with_body(node));
    match normalized.body.as_ref().and_then(encode_json) {
        Some(encoded) => with_body(parts, encoded.into()),
        None => Response::from_parts(parts, Body::from(bytes)),
    }
}

/// True when buffering stopped at [`MAX_BODY_BYTES`].
fn is_length_limit(error: &axum::Error) -> bool {
    error
        .source()
        .is_some_and(|source| source.is::<LengthLimitError>())
}

fn with_body(mut parts: Parts, bytes: Bytes) -> Response {
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
