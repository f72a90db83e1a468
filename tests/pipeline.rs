//! End-to-end pipeline scenarios over the handler wrappers.

use axum::http::StatusCode;
use case_normalizer::pipeline::{
    Continuation, DocumentMiddleware, Handler, HandlerError, HandlerResult, Request,
    RequestMiddleware, Response, ResponseMiddleware,
};
use case_normalizer::security::AuthorizationGate;
use case_normalizer::{CasingConvention, Key, Node, Options};
use serde_json::json;

mod common;

use common::EchoHandler;

#[test]
fn test_request_normalization_drops_non_camel_keys() {
    let echo = EchoHandler::new();
    let middleware = RequestMiddleware::new(
        |request: Request| echo.handle(request),
        Options::default(),
    );

    let request = Request::default().with_body(Node::from(json!({"userName": "a", "user_id": 5})));
    let response = middleware.call(request).unwrap();

    assert_eq!(response.body, Some(Node::from(json!({"user-name": "a"}))));
    assert_eq!(echo.calls.get(), 1);
}

#[test]
fn test_response_normalization_defaults_to_camel() {
    let handler =
        |_request: Request| -> HandlerResult { Ok(Response::ok(Node::from(json!({"user-name": "a"})))) };
    let middleware = ResponseMiddleware::new(handler, Options::default());

    let response = middleware.call(Request::default()).unwrap();

    assert_eq!(response.body, Some(Node::from(json!({"userName": "a"}))));
}

#[test]
fn test_full_round_trip() {
    let echo = EchoHandler::new();
    let stack = ResponseMiddleware::new(
        RequestMiddleware::new(|request: Request| echo.handle(request), Options::default()),
        Options::default(),
    );

    let request = Request::default().with_body(Node::from(json!({
        "orderId": 7,
        "lineItems": [{"skuCode": "A-1", "unit_price": 3}],
        "SHOUTING": true
    })));
    let response = stack.call(request).unwrap();

    assert_eq!(
        response.body,
        Some(Node::from(json!({"orderId": 7, "lineItems": [{"skuCode": "A-1"}]})))
    );
}

#[test]
fn test_non_container_body_passes_every_stage() {
    let echo = EchoHandler::new();
    let stack = ResponseMiddleware::new(
        RequestMiddleware::new(|request: Request| echo.handle(request), Options::default()),
        Options::default(),
    );

    let response = stack
        .call(Request::default().with_body(Node::text("raw-text")))
        .unwrap();

    assert_eq!(response.body, Some(Node::text("raw-text")));
}

#[test]
fn test_continuation_shape_through_both_middlewares() {
    let handler = Continuation::new(|request, respond, _raise| {
        respond(Response::ok(request.body.unwrap_or(Node::Null)))
    });
    let stack = ResponseMiddleware::new(
        RequestMiddleware::new(handler, Options::new(CasingConvention::Snake, CasingConvention::Kebab)),
        Options::to(CasingConvention::ScreamingSnake),
    );

    let mut seen = None;
    stack.call_with(
        Request::default().with_body(Node::from(json!({"first_name": "a", "lastName": "b"}))),
        Box::new(|response: Response| seen = response.body),
        Box::new(|_: HandlerError| panic!("unexpected failure")),
    );

    assert_eq!(seen, Some(Node::from(json!({"FIRST_NAME": "a"}))));
}

#[test]
fn test_numeric_keys_are_promoted_end_to_end() {
    let handler = |_request: Request| -> HandlerResult {
        Ok(Response::ok(Node::from_entries([(Key::from(42), Node::text("answer"))])))
    };
    let middleware = ResponseMiddleware::new(handler, Options::default());

    let body = middleware.call(Request::default()).unwrap().body.unwrap();

    assert_eq!(body.get(Key::ident("42")), Some(&Node::text("answer")));
    assert_eq!(body.get(Key::from(42)), None);
}

#[test]
fn test_document_required_fields() {
    let handler = |_request: Request| -> HandlerResult {
        Ok(Response::ok(Node::from(json!({
            "required": ["user-name", "user-id"],
            "properties": {"other-field": {"type": "string"}}
        }))))
    };
    let middleware = DocumentMiddleware::document(handler, Options::default());

    let body = middleware.call(Request::default()).unwrap().body.unwrap();

    assert_eq!(
        body,
        Node::from(json!({
            "required": ["userName", "userId"],
            "properties": {"other-field": {"type": "string"}}
        }))
    );
}

#[test]
fn test_authorization_denial_skips_handler() {
    let echo = EchoHandler::new();
    let gate = AuthorizationGate::with_authorizer(
        |request: Request| echo.handle(request),
        |_request: &Request| false,
    );

    let response = gate
        .call(Request::default().with_body(Node::text("secret")))
        .unwrap();

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, Some(Node::text("Unauthorized")));
    assert!(response.headers.is_empty());
    assert_eq!(echo.calls.get(), 0);
}

#[test]
fn test_authorization_stub_allows() {
    let echo = EchoHandler::new();
    let gate = AuthorizationGate::new(|request: Request| echo.handle(request));

    let response = gate
        .call(Request::default().with_body(Node::text("hello")))
        .unwrap();

    assert_eq!(response.body, Some(Node::text("hello")));
    assert_eq!(echo.calls.get(), 1);
}
