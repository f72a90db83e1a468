//! Downstream handler capability.
//!
//! A handler is called in one of two shapes:
//! - direct: `call(request)` returns the response or an error;
//! - continuation: `call_with(request, respond, raise)` hands the outcome to
//!   one of two continuations.
//!
//! Continuations are borrowed for the duration of the call, so they run
//! synchronously inside it.

use std::cell::RefCell;

use thiserror::Error;

use super::message::{Request, Response};

/// Success continuation.
pub type Respond<'a> = Box<dyn FnOnce(Response) + 'a>;

/// Failure continuation.
pub type Raise<'a> = Box<dyn FnOnce(HandlerError) + 'a>;

/// Errors raised by downstream handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Handler reported a failure.
    #[error("Handler failed: {0}")]
    Failed(String),

    /// Continuation-style handler returned without calling either continuation.
    #[error("Handler returned without responding")]
    NoResponse,

    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for direct handler calls.
pub type HandlerResult = Result<Response, HandlerError>;

pub trait Handler {
    /// Direct shape: errors propagate to the caller untouched.
    fn call(&self, request: Request) -> HandlerResult;

    /// Continuation shape.
    fn call_with<'a>(&self, request: Request, respond: Respond<'a>, raise: Raise<'a>) {
        match self.call(request) {
            Ok(response) => respond(response),
            Err(error) => raise(error),
        }
    }
}

impl<F> Handler for F
where
    F: Fn(Request) -> HandlerResult,
{
    fn call(&self, request: Request) -> HandlerResult {
        self(request)
    }
}

/// Handler written natively in continuation shape.
pub struct Continuation<F>(F);

impl<F> Continuation<F>
where
    F: for<'a> Fn(Request, Respond<'a>, Raise<'a>),
{
    pub fn new(handler: F) -> Self {
        Self(handler)
    }
}

impl<F> Handler for Continuation<F>
where
    F: for<'a> Fn(Request, Respond<'a>, Raise<'a>),
{
    fn call(&self, request: Request) -> HandlerResult {
        let outcome = RefCell::new(None);
        (self.0)(
            request,
            Box::new(|response: Response| {
                outcome.replace(Some(Ok(response)));
            }),
            Box::new(|error: HandlerError| {
                outcome.replace(Some(Err(error)));
            }),
        );
        outcome.into_inner().unwrap_or(Err(HandlerError::NoResponse))
    }

    fn call_with<'a>(&self, request: Request, respond: Respond<'a>, raise: Raise<'a>) {
        (self.0)(request, respond, raise)
    }
}
