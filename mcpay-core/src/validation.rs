//! Validation of untrusted checkout input.
//!
//! The raw body is decoded into [`CheckoutFields`] and checked with
//! `validator`. Every violation is collected so the caller sees all offending
//! fields at once. A [`CheckoutRequest`] only exists once all constraints
//! hold, so provider code never sees malformed input.

use mcpay_sdk::objects::PaymentMethod;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 16;

/// Key the donation page sends the in-game name under.
const USERNAME_FIELD: &str = "minecraft_username";

/// Order in which violations are reported.
const FIELD_ORDER: [&str; 4] = ["package_id", "payment_method", "email", "username"];

const UNSUPPORTED_PAYMENT_METHOD: &str = "unsupported_payment_method";

/// Checkout fields as they arrive, before any constraint holds.
///
/// Every field is optional so that a missing one is reported next to the
/// others instead of aborting the decode.
#[derive(Debug, Deserialize, Validate)]
struct CheckoutFields {
    #[validate(required, length(min = 1))]
    package_id: Option<String>,

    #[validate(required, custom(function = "supported_payment_method"))]
    payment_method: Option<String>,

    #[validate(required, email)]
    email: Option<String>,

    #[serde(rename = "minecraft_username", alias = "username")]
    #[validate(required, length(min = 3, max = 16))]
    username: Option<String>,
}

fn supported_payment_method(tag: &str) -> Result<(), validator::ValidationError> {
    match tag.parse::<PaymentMethod>() {
        Ok(_) => Ok(()),
        Err(_) => Err(validator::ValidationError::new(UNSUPPORTED_PAYMENT_METHOD)),
    }
}

impl CheckoutFields {
    fn into_request(self) -> Result<CheckoutRequest, ValidationError> {
        let violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(report) => self.violations(&report),
        };
        let payment_method = self
            .payment_method
            .as_deref()
            .and_then(|tag| tag.parse::<PaymentMethod>().ok());

        match (self.package_id, payment_method, self.email, self.username) {
            (Some(package_id), Some(payment_method), Some(email), Some(username))
                if violations.is_empty() =>
            {
                Ok(CheckoutRequest {
                    package_id,
                    payment_method,
                    email,
                    username,
                })
            }
            _ => Err(ValidationError { violations }),
        }
    }

    fn violations(&self, report: &ValidationErrors) -> Vec<FieldViolation> {
        let errors = report.field_errors();
        FIELD_ORDER
            .iter()
            .filter_map(|&field| {
                let field_errors = errors
                    .get(field)
                    .or_else(|| (field == "username").then(|| errors.get(USERNAME_FIELD)).flatten())?;
                let error = field_errors.first()?;
                Some(FieldViolation {
                    field,
                    violation: self.violation(field, &error.code),
                })
            })
            .collect()
    }

    fn violation(&self, field: &str, code: &str) -> Violation {
        match code {
            "required" => Violation::Missing,
            "email" => Violation::InvalidEmail,
            UNSUPPORTED_PAYMENT_METHOD => {
                Violation::UnsupportedPaymentMethod(self.payment_method.clone().unwrap_or_default())
            }
            "length" if field == "username" => Violation::LengthOutOfRange {
                min: USERNAME_MIN_LEN,
                max: USERNAME_MAX_LEN,
                actual: self.username.as_deref().map_or(0, |u| u.chars().count()),
            },
            "length" => Violation::Empty,
            other => Violation::Rejected(other.to_owned()),
        }
    }
}

/// A checkout request whose fields satisfy every constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    package_id: String,
    payment_method: PaymentMethod,
    email: String,
    username: String,
}

impl CheckoutRequest {
    /// Validate individual field values.
    pub fn new(
        package_id: impl Into<String>,
        payment_method: &str,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        CheckoutFields {
            package_id: Some(package_id.into()),
            payment_method: Some(payment_method.to_owned()),
            email: Some(email.into()),
            username: Some(username.into()),
        }
        .into_request()
    }

    /// Decode and validate a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            ValidationError::single("body", Violation::MalformedJson(e.to_string()))
        })?;
        Self::from_value(&value)
    }

    /// Validate an already decoded JSON value, which must be an object.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::single("body", Violation::NotAnObject));
        }
        CheckoutFields::deserialize(value)
            .map_err(|e| ValidationError::single("body", Violation::WrongType(e.to_string())))?
            .into_request()
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing,
    Empty,
    UnsupportedPaymentMethod(String),
    InvalidEmail,
    LengthOutOfRange { min: usize, max: usize, actual: usize },
    /// A constraint without a dedicated variant, by its validator code.
    Rejected(String),
    InvalidUtf8,
    MalformedJson(String),
    NotAnObject,
    WrongType(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing => f.write_str("is required"),
            Violation::Empty => f.write_str("must not be empty"),
            Violation::UnsupportedPaymentMethod(tag) => {
                let supported: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
                write!(f, "'{tag}' is not one of {}", supported.join(", "))
            }
            Violation::InvalidEmail => f.write_str("is not a valid email address"),
            Violation::LengthOutOfRange { min, max, actual } => {
                write!(f, "must be {min}-{max} characters long, got {actual}")
            }
            Violation::Rejected(code) => write!(f, "is invalid ({code})"),
            Violation::InvalidUtf8 => f.write_str("is not valid UTF-8"),
            Violation::MalformedJson(reason) => write!(f, "is not valid JSON: {reason}"),
            Violation::NotAnObject => f.write_str("must be a JSON object"),
            Violation::WrongType(reason) => write!(f, "has a field of the wrong type: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.violation)
    }
}

/// One or more request fields failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid request: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    fn single(field: &'static str, violation: Violation) -> Self {
        Self {
            violations: vec![FieldViolation { field, violation }],
        }
    }

    /// The request body bytes are not UTF-8 text.
    pub fn invalid_utf8() -> Self {
        Self::single("body", Violation::InvalidUtf8)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in reporting order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> String {
        value.to_string()
    }

    fn fields_of(result: Result<CheckoutRequest, ValidationError>) -> Vec<&'static str> {
        match result {
            Ok(request) => panic!("expected validation failure, got {request:?}"),
            Err(err) => err.fields(),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = CheckoutRequest::from_json(&body(json!({
            "package_id": "vip",
            "payment_method": "freekassa",
            "email": "steve@example.com",
            "minecraft_username": "Steve123",
        })))
        .unwrap();
        assert_eq!(request.package_id(), "vip");
        assert_eq!(request.payment_method(), PaymentMethod::Freekassa);
        assert_eq!(request.email(), "steve@example.com");
        assert_eq!(request.username(), "Steve123");
    }

    #[test]
    fn test_username_alias() {
        let request = CheckoutRequest::from_json(&body(json!({
            "package_id": "vip",
            "payment_method": "stripe",
            "email": "alex@example.com",
            "username": "Alex",
        })))
        .unwrap();
        assert_eq!(request.username(), "Alex");
    }

    #[test]
    fn test_username_length_bounds() {
        let check = |name: &str| CheckoutRequest::new("vip", "stripe", "a@example.com", name);
        assert!(check("abc").is_ok());
        assert!(check("abcdefghijklmnop").is_ok());
        assert_eq!(fields_of(check("ab")), vec!["username"]);
        assert_eq!(fields_of(check("abcdefghijklmnopq")), vec!["username"]);
        assert_eq!(fields_of(check("")), vec!["username"]);
        // characters, not bytes
        assert!(check("Вася").is_ok());
    }

    #[test]
    fn test_payment_method_is_case_sensitive() {
        let result = CheckoutRequest::new("vip", "Stripe", "a@example.com", "Steve");
        assert_eq!(fields_of(result), vec!["payment_method"]);
        let result = CheckoutRequest::new("vip", "paypal", "a@example.com", "Steve");
        assert_eq!(fields_of(result), vec!["payment_method"]);
    }

    #[test]
    fn test_rejects_invalid_email() {
        for email in ["", "not-an-email", "@example.com", "steve@"] {
            let result = CheckoutRequest::new("vip", "yukassa", email, "Steve");
            assert_eq!(fields_of(result), vec!["email"], "email {email:?}");
        }
    }

    #[test]
    fn test_rejects_empty_package_id() {
        let result = CheckoutRequest::new("", "yukassa", "a@example.com", "Steve");
        assert_eq!(fields_of(result), vec!["package_id"]);
    }

    #[test]
    fn test_collects_every_violation() {
        let result = CheckoutRequest::from_json(&body(json!({
            "payment_method": "cash",
            "minecraft_username": "x",
        })));
        let err = result.unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["package_id", "payment_method", "email", "username"]
        );
        assert_eq!(err.violations()[0].violation, Violation::Missing);
        assert_eq!(
            err.violations()[1].violation,
            Violation::UnsupportedPaymentMethod("cash".into())
        );
        assert_eq!(err.violations()[2].violation, Violation::Missing);
        assert_eq!(
            err.violations()[3].violation,
            Violation::LengthOutOfRange {
                min: USERNAME_MIN_LEN,
                max: USERNAME_MAX_LEN,
                actual: 1
            }
        );
        assert!(err.to_string().starts_with("Invalid request: package_id is required; "));
    }

    #[test]
    fn test_null_field_is_missing() {
        let result = CheckoutRequest::from_json(&body(json!({
            "package_id": "vip",
            "payment_method": "stripe",
            "email": null,
            "minecraft_username": "Steve",
        })));
        assert_eq!(fields_of(result), vec!["email"]);
    }

    #[test]
    fn test_rejects_non_string_field() {
        let err = CheckoutRequest::from_json(&body(json!({
            "package_id": 7,
            "payment_method": "stripe",
            "email": "a@example.com",
            "minecraft_username": "Steve",
        })))
        .unwrap_err();
        assert_eq!(err.fields(), vec!["body"]);
        assert!(matches!(err.violations()[0].violation, Violation::WrongType(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = ValidationError::invalid_utf8();
        assert_eq!(err.to_string(), "Invalid request: body is not valid UTF-8");
    }

    #[test]
    fn test_rejects_malformed_body() {
        assert_eq!(fields_of(CheckoutRequest::from_json("{not json")), vec!["body"]);
        assert_eq!(fields_of(CheckoutRequest::from_json("[1, 2]")), vec!["body"]);
        assert_eq!(
            CheckoutRequest::from_json("null").unwrap_err().violations()[0].violation,
            Violation::NotAnObject
        );
    }
}
