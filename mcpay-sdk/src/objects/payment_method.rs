use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// All payment providers a checkout can be redirected to.
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card / international gateway.
    Stripe,
    /// Regional gateway with MD5-signed links.
    Freekassa,
    /// Regional gateway without an explicit link signature.
    Yukassa,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Stripe,
        PaymentMethod::Freekassa,
        PaymentMethod::Yukassa,
    ];

    /// The wire tag of this provider, e.g. `"freekassa"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::Freekassa => "freekassa",
            PaymentMethod::Yukassa => "yukassa",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag does not name any supported provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported payment method: {0}")]
pub struct UnsupportedPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnsupportedPaymentMethod;

    /// Tags are matched case-sensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == tag)
            .ok_or_else(|| UnsupportedPaymentMethod(tag.to_owned()))
    }
}
