//! Transport-neutral invocation contract.
//!
//! An invocation carries a method name and a body, plus a context holding
//! the request-scoped id. The response is a status code, a header map and a
//! body string, so any transport (an HTTP server, a serverless runtime) can
//! adapt it.
//!
//! # Methods
//!
//! - `OPTIONS` – pre-flight; empty 200 advertising allowed methods/headers
//! - `POST`    – run a checkout
//! - anything else – 405

use mcpay_sdk::objects::{CheckoutResponse, ErrorResponse};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::checkout::CheckoutHandler;
use crate::config::ProvidersConfig;
use crate::error::CheckoutError;
use crate::validation::ValidationError;

pub const METHOD_PREFLIGHT: &str = "OPTIONS";
pub const METHOD_SUBMIT: &str = "POST";

pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const HEADER_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const HEADER_MAX_AGE: &str = "Access-Control-Max-Age";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, X-User-Id, X-Auth-Token";
/// Seconds a browser may cache the pre-flight answer.
const PREFLIGHT_MAX_AGE: u32 = 86_400;

/// Used when the error body itself cannot be encoded.
const FALLBACK_ERROR_BODY: &str = r#"{"error":"internal error"}"#;

/// An incoming request as seen by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub method: String,
    /// Raw body. `None` or blank is treated as an empty JSON object.
    pub body: Option<String>,
}

/// Per-invocation data supplied by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<&'static str, String>,
    pub body: String,
}

impl InvocationResponse {
    fn new(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(HEADER_ALLOW_ORIGIN, "*".to_owned());
        Self {
            status_code,
            headers,
            body,
        }
    }

    fn json(status_code: u16, body: &impl Serialize) -> Result<Self, CheckoutError> {
        let body = serde_json::to_string(body)?;
        let mut response = Self::new(status_code, body);
        response
            .headers
            .insert(HEADER_CONTENT_TYPE, "application/json".to_owned());
        Ok(response)
    }

    fn preflight() -> Self {
        let mut response = Self::new(200, String::new());
        response
            .headers
            .insert(HEADER_ALLOW_METHODS, ALLOWED_METHODS.to_owned());
        response
            .headers
            .insert(HEADER_ALLOW_HEADERS, ALLOWED_HEADERS.to_owned());
        response
            .headers
            .insert(HEADER_MAX_AGE, PREFLIGHT_MAX_AGE.to_string());
        response
    }

    fn error(err: &CheckoutError) -> Self {
        let body = ErrorResponse {
            error: err.to_string(),
        };
        Self::json(err.status_code(), &body).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode error response");
            let mut response = Self::new(500, FALLBACK_ERROR_BODY.to_owned());
            response
                .headers
                .insert(HEADER_CONTENT_TYPE, "application/json".to_owned());
            response
        })
    }
}

/// Handle one invocation. Never fails: every error becomes a JSON body with
/// the matching status code.
pub fn handle(
    invocation: &Invocation,
    context: &InvocationContext,
    providers: &ProvidersConfig,
) -> InvocationResponse {
    match invocation.method.as_str() {
        METHOD_PREFLIGHT => InvocationResponse::preflight(),
        METHOD_SUBMIT => {
            let body = invocation
                .body
                .as_deref()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or("{}");
            CheckoutHandler::new(providers)
                .process(body, &context.request_id)
                .map(CheckoutResponse::from)
                .and_then(|response| InvocationResponse::json(200, &response))
                .unwrap_or_else(|e| InvocationResponse::error(&e))
        }
        other => {
            tracing::warn!(method = other, "Method not allowed");
            InvocationResponse::error(&CheckoutError::MethodNotAllowed(other.to_owned()))
        }
    }
}

/// Answer a submit whose body bytes are not UTF-8 text.
///
/// Transports call this instead of [`handle`] so the body is rejected rather
/// than decoded lossily.
pub fn reject_invalid_utf8() -> InvocationResponse {
    tracing::warn!("Request body is not valid UTF-8");
    InvocationResponse::error(&CheckoutError::from(ValidationError::invalid_utf8()))
}
