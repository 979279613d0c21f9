use serde::{Deserialize, Serialize};

use super::payment_method::PaymentMethod;
use super::payment_url::PaymentUrl;

/// Request payload for starting a checkout.
///
/// Sent by the donation page when the buyer confirms a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckoutRequestBody {
    pub package_id: String,
    pub payment_method: PaymentMethod,
    pub email: String,
    /// In-game name the package is granted to.
    #[serde(rename = "minecraft_username", alias = "username")]
    pub username: String,
}

/// Response returned after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Provider redirect, or a placeholder if the provider is not configured.
    pub payment_url: PaymentUrl,
    pub order_id: String,
    /// Display name of the purchased package.
    pub package: String,
    /// Price in roubles.
    pub amount: u32,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
