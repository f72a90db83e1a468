//! Authorization gate.
//!
//! # Responsibilities
//! - Ask an [`Authorizer`] whether a request may proceed
//! - Short-circuit with `401 Unauthorized` without calling the handler
//!
//! # Design Decisions
//! - The shipped check is a stub that allows everything
//! - Denial is a response, not an error

use crate::observability::metrics;
use crate::pipeline::{Handler, HandlerResult, Request, Response};

/// Decides whether a request may reach the wrapped handler.
pub trait Authorizer {
    fn is_authorized(&self, request: &Request) -> bool;
}

/// Stub check: every request is authorized.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn is_authorized(&self, _request: &Request) -> bool {
        true
    }
}

impl<F> Authorizer for F
where
    F: Fn(&Request) -> bool,
{
    fn is_authorized(&self, request: &Request) -> bool {
        self(request)
    }
}

/// Wraps a handler behind an [`Authorizer`].
#[derive(Debug, Clone)]
pub struct AuthorizationGate<H, A = AllowAll> {
    inner: H,
    authorizer: A,
}

impl<H: Handler> AuthorizationGate<H> {
    pub fn new(inner: H) -> Self {
        Self::with_authorizer(inner, AllowAll)
    }
}

impl<H: Handler, A: Authorizer> AuthorizationGate<H, A> {
    pub fn with_authorizer(inner: H, authorizer: A) -> Self {
        Self { inner, authorizer }
    }
}

impl<H: Handler, A: Authorizer> Handler for AuthorizationGate<H, A> {
    fn call(&self, request: Request) -> HandlerResult {
        if !self.authorizer.is_authorized(&request) {
            tracing::warn!(method = %request.method, uri = %request.uri, "Request not authorized");
            metrics::record_unauthorized();
            return Ok(Response::unauthorized());
        }

        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use axum::http::StatusCode;

    #[test]
    fn test_allow_all_forwards() {
        let handler = |_request: Request| -> HandlerResult { Ok(Response::ok(Node::text("ok"))) };
        let gate = AuthorizationGate::new(handler);

        let response = gate.call(Request::default()).unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, Some(Node::text("ok")));
    }

    #[test]
    fn test_denial_uses_authorizer_verdict() {
        let handler = |_request: Request| -> HandlerResult { Ok(Response::ok(Node::Null)) };
        let gate = AuthorizationGate::with_authorizer(handler, |request: &Request| {
            request.headers.contains_key("authorization")
        });

        assert_eq!(
            gate.call(Request::default()).unwrap(),
            Response::unauthorized()
        );
    }
}
