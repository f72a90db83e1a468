//! Handler wrappers applying the normalizers around a downstream handler.
//!
//! Every wrapper supports both call shapes. In the continuation shape the
//! response transform runs inside the success continuation; failures are
//! forwarded untouched.

use crate::config::{Options, RequestCasing, ResponseCasing};

use super::handler::{Handler, HandlerResult, Raise, Respond};
use super::message::{Request, Response};
use super::normalize::{normalize_document_response, normalize_request, normalize_response};

/// Normalizes inbound keys before the downstream handler sees the request.
///
/// Install after whatever parses body and query parameters into trees.
#[derive(Debug, Clone)]
pub struct RequestMiddleware<H> {
    inner: H,
    casing: RequestCasing,
}

impl<H: Handler> RequestMiddleware<H> {
    pub fn new(inner: H, options: Options) -> Self {
        Self {
            inner,
            casing: options.request_casing(),
        }
    }
}

impl<H: Handler> Handler for RequestMiddleware<H> {
    fn call(&self, request: Request) -> HandlerResult {
        self.inner.call(normalize_request(&request, &self.casing))
    }

    fn call_with<'a>(&self, request: Request, respond: Respond<'a>, raise: Raise<'a>) {
        self.inner
            .call_with(normalize_request(&request, &self.casing), respond, raise)
    }
}

/// Which outbound transform a [`ResponseStage`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTransform {
    /// Rewrite every key of the body.
    Keys,
    /// Rewrite only `required`/`name` fields of a generated document.
    DocumentFields,
}

/// Rewrites the downstream handler's response body.
#[derive(Debug, Clone)]
pub struct ResponseStage<H> {
    inner: H,
    casing: ResponseCasing,
    transform: ResponseTransform,
}

/// Rewrites every key of the response body (default target camelCase).
pub type ResponseMiddleware<H> = ResponseStage<H>;

/// Rewrites `required`/`name` fields of a generated document body.
pub type DocumentMiddleware<H> = ResponseStage<H>;

impl<H: Handler> ResponseStage<H> {
    /// Key-rewriting response middleware; only `options.to` is consulted.
    pub fn new(inner: H, options: Options) -> Self {
        Self {
            inner,
            casing: options.response_casing(),
            transform: ResponseTransform::Keys,
        }
    }

    /// Document-field middleware for handlers serving generated API descriptions.
    pub fn document(inner: H, options: Options) -> Self {
        Self {
            inner,
            casing: options.document_casing(),
            transform: ResponseTransform::DocumentFields,
        }
    }
}

fn apply_transform(
    casing: &ResponseCasing,
    transform: ResponseTransform,
    response: Response,
) -> Response {
    match transform {
        ResponseTransform::Keys => normalize_response(&response, casing),
        ResponseTransform::DocumentFields => normalize_document_response(&response, casing),
    }
}

impl<H: Handler> Handler for ResponseStage<H> {
    fn call(&self, request: Request) -> HandlerResult {
        let response = self.inner.call(request)?;
        Ok(apply_transform(&self.casing, self.transform, response))
    }

    fn call_with<'a>(&self, request: Request, respond: Respond<'a>, raise: Raise<'a>) {
        let (casing, transform) = (self.casing, self.transform);
        self.inner.call_with(
            request,
            Box::new(move |response: Response| {
                respond(apply_transform(&casing, transform, response))
            }),
            raise,
        )
    }
}
