//! Shared utilities for integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
};
use case_normalizer::pipeline::{HandlerResult, Request as CaseRequest, Response as CaseResponse};
use case_normalizer::Node;
use serde_json::Value;
use std::cell::Cell;

/// Build a JSON request for the axum router.
#[allow(dead_code)]
pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text.
#[allow(dead_code)]
pub async fn read_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pipeline handler that echoes the request body and counts its calls.
#[allow(dead_code)]
pub struct EchoHandler {
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl EchoHandler {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    pub fn handle(&self, request: CaseRequest) -> HandlerResult {
        self.calls.set(self.calls.get() + 1);
        Ok(CaseResponse::ok(request.body.unwrap_or(Node::Null)))
    }
}
