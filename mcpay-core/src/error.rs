//! Error taxonomy of the checkout handler.
//!
//! Every variant maps to exactly one HTTP status code; the invocation layer
//! turns any of them into a `{"error": ...}` body.

use mcpay_sdk::objects::UnsupportedPaymentMethod;
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A request field is missing, malformed or out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The package id does not name a catalog entry.
    #[error("Invalid package ID")]
    UnknownPackage(String),

    /// A payment method tag slipped past validation.
    #[error("Invalid payment method")]
    UnsupportedMethod(#[from] UnsupportedPaymentMethod),

    /// The transport method is neither the pre-flight nor the submission.
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    /// Anything else. The message is returned to the caller verbatim.
    #[error("{0}")]
    Internal(String),
}

impl CheckoutError {
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Validation(_) | CheckoutError::UnknownPackage(_) => 400,
            CheckoutError::MethodNotAllowed(_) => 405,
            CheckoutError::UnsupportedMethod(_) | CheckoutError::Internal(_) => 500,
        }
    }

    /// Whether the failure was caused by the caller rather than by us.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<url::ParseError> for CheckoutError {
    fn from(err: url::ParseError) -> Self {
        CheckoutError::Internal(format!("failed to build payment url: {err}"))
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::Internal(format!("failed to encode response: {err}"))
    }
}
