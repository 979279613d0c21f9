//! The `payment_url` field of a checkout response.
//!
//! A checkout either yields a real provider redirect, or a placeholder of the
//! form `#<provider>-not-configured` when the provider has no credentials.
//! Placeholders are never valid absolute URLs, so a client can tell the two
//! apart by the leading `#`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

use super::payment_method::PaymentMethod;

/// Prefix shared by every placeholder value.
pub const PLACEHOLDER_PREFIX: char = '#';

const PLACEHOLDER_SUFFIX: &str = "-not-configured";

/// Where the buyer should be sent to complete a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentUrl {
    /// Redirect to the provider's hosted checkout.
    Redirect(Url),
    /// The provider is temporarily unavailable because it has no credentials.
    NotConfigured(PaymentMethod),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentUrlError {
    #[error("unknown placeholder: {0}")]
    UnknownPlaceholder(String),
    #[error("invalid redirect url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PaymentUrl {
    /// Returns `true` if the buyer can actually be redirected.
    pub fn is_configured(&self) -> bool {
        matches!(self, PaymentUrl::Redirect(_))
    }

    pub fn redirect(&self) -> Option<&Url> {
        match self {
            PaymentUrl::Redirect(url) => Some(url),
            PaymentUrl::NotConfigured(_) => None,
        }
    }

    /// Parse a `payment_url` value as returned by the checkout endpoint.
    pub fn parse(value: &str) -> Result<Self, PaymentUrlError> {
        match value.strip_prefix(PLACEHOLDER_PREFIX) {
            Some(placeholder) => placeholder
                .strip_suffix(PLACEHOLDER_SUFFIX)
                .and_then(|tag| tag.parse::<PaymentMethod>().ok())
                .map(PaymentUrl::NotConfigured)
                .ok_or_else(|| PaymentUrlError::UnknownPlaceholder(value.to_owned())),
            None => Ok(PaymentUrl::Redirect(Url::parse(value)?)),
        }
    }
}

impl fmt::Display for PaymentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentUrl::Redirect(url) => f.write_str(url.as_str()),
            PaymentUrl::NotConfigured(method) => {
                write!(f, "{PLACEHOLDER_PREFIX}{method}{PLACEHOLDER_SUFFIX}")
            }
        }
    }
}

impl Serialize for PaymentUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PaymentUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        PaymentUrl::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_provider_labelled() {
        let rendered: Vec<String> = PaymentMethod::ALL
            .into_iter()
            .map(|m| PaymentUrl::NotConfigured(m).to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "#stripe-not-configured",
                "#freekassa-not-configured",
                "#yukassa-not-configured",
            ]
        );
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(
            PaymentUrl::parse("#freekassa-not-configured").unwrap(),
            PaymentUrl::NotConfigured(PaymentMethod::Freekassa)
        );
        assert!(matches!(
            PaymentUrl::parse("#paypal-not-configured"),
            Err(PaymentUrlError::UnknownPlaceholder(_))
        ));
    }

    #[test]
    fn test_parse_redirect() {
        let parsed = PaymentUrl::parse("https://pay.freekassa.com/?m=1&oa=299").unwrap();
        assert!(parsed.is_configured());
        assert_eq!(parsed.redirect().unwrap().host_str(), Some("pay.freekassa.com"));
        assert!(matches!(
            PaymentUrl::parse("not a url"),
            Err(PaymentUrlError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PaymentUrl::NotConfigured(PaymentMethod::Stripe)).unwrap();
        assert_eq!(json, "\"#stripe-not-configured\"");
        let back: PaymentUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaymentUrl::NotConfigured(PaymentMethod::Stripe));
    }
}
