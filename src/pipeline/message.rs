//! Request and response values passed through the pipeline.

use axum::http::{HeaderMap, Method, StatusCode, Uri};

use crate::tree::Node;

/// Request fields whose container values are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    BodyParams,
    QueryParams,
    Body,
    Params,
}

impl RequestField {
    pub const ALL: [RequestField; 4] = [
        RequestField::BodyParams,
        RequestField::QueryParams,
        RequestField::Body,
        RequestField::Params,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RequestField::BodyParams => "body-params",
            RequestField::QueryParams => "query-params",
            RequestField::Body => "body",
            RequestField::Params => "params",
        }
    }
}

/// An inbound request with its payload fields already parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body_params: Option<Node>,
    pub query_params: Option<Node>,
    pub body: Option<Node>,
    pub params: Option<Node>,
}

impl Request {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: RequestField, value: Node) -> Self {
        *self.field_mut(field) = Some(value);
        self
    }

    pub fn with_body(self, body: Node) -> Self {
        self.with_field(RequestField::Body, body)
    }

    pub fn field(&self, field: RequestField) -> Option<&Node> {
        match field {
            RequestField::BodyParams => self.body_params.as_ref(),
            RequestField::QueryParams => self.query_params.as_ref(),
            RequestField::Body => self.body.as_ref(),
            RequestField::Params => self.params.as_ref(),
        }
    }

    pub fn field_mut(&mut self, field: RequestField) -> &mut Option<Node> {
        match field {
            RequestField::BodyParams => &mut self.body_params,
            RequestField::QueryParams => &mut self.query_params,
            RequestField::Body => &mut self.body,
            RequestField::Params => &mut self.params,
        }
    }
}

/// A handler's response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<Node>,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// A `200 OK` response carrying `body`.
    pub fn ok(body: Node) -> Self {
        Self::new(StatusCode::OK).with_body(body)
    }

    /// Fixed `401` short-circuit response with a plain-text body.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED).with_body(Node::text("Unauthorized"))
    }

    pub fn with_body(mut self, body: Node) -> Self {
        self.body = Some(body);
        self
    }
}
