//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Unset conventions resolve to the documented per-stage defaults.

use serde::{Deserialize, Serialize};

use crate::casing::CasingConvention;

/// Default convention inbound keys are expected in.
pub const DEFAULT_REQUEST_FROM: CasingConvention = CasingConvention::Camel;
/// Default convention inbound keys are rewritten to.
pub const DEFAULT_REQUEST_TO: CasingConvention = CasingConvention::Kebab;
/// Default convention outbound keys are rewritten to.
pub const DEFAULT_RESPONSE_TO: CasingConvention = CasingConvention::Camel;
/// Default convention for generated document fields.
pub const DEFAULT_DOCUMENT_TO: CasingConvention = CasingConvention::Camel;

/// Per-stage casing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Convention inbound keys must already be in.
    pub from: Option<CasingConvention>,

    /// Convention keys are rewritten to.
    pub to: Option<CasingConvention>,
}

impl Options {
    pub fn new(from: CasingConvention, to: CasingConvention) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn to(to: CasingConvention) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    pub fn request_casing(&self) -> RequestCasing {
        RequestCasing {
            from: self.from.unwrap_or(DEFAULT_REQUEST_FROM),
            to: self.to.unwrap_or(DEFAULT_REQUEST_TO),
        }
    }

    /// Resolve the outbound target; `from` plays no part on this side.
    pub fn response_casing(&self) -> ResponseCasing {
        ResponseCasing {
            to: self.to.unwrap_or(DEFAULT_RESPONSE_TO),
        }
    }

    pub fn document_casing(&self) -> ResponseCasing {
        ResponseCasing {
            to: self.to.unwrap_or(DEFAULT_DOCUMENT_TO),
        }
    }

    fn unrecognized(&self) -> impl Iterator<Item = &'static str> + '_ {
        [("from", self.from), ("to", self.to)]
            .into_iter()
            .filter(|(_, convention)| *convention == Some(CasingConvention::Unrecognized))
            .map(|(field, _)| field)
    }
}

/// Resolved request-side conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCasing {
    pub from: CasingConvention,
    pub to: CasingConvention,
}

impl Default for RequestCasing {
    fn default() -> Self {
        Options::default().request_casing()
    }
}

/// Resolved response-side convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCasing {
    pub to: CasingConvention,
}

impl Default for ResponseCasing {
    fn default() -> Self {
        Options::default().response_casing()
    }
}

/// Root configuration for the normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Inbound request normalization.
    pub request: Options,

    /// Outbound response normalization.
    pub response: Options,

    /// Generated API-description documents.
    pub document: Options,
}

impl NormalizerConfig {
    /// `section.field` paths holding a convention name outside the supported set.
    pub fn unrecognized_conventions(&self) -> Vec<String> {
        [
            ("request", &self.request),
            ("response", &self.response),
            ("document", &self.document),
        ]
        .into_iter()
        .flat_map(|(section, options)| {
            options
                .unrecognized()
                .map(move |field| format!("{}.{}", section, field))
        })
        .collect()
    }
}
