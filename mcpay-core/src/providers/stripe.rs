//! Stripe (cards, Apple Pay, Google Pay).
//!
//! The link carries amount, currency and buyer details as plain query
//! parameters; it is not signed. The secret key is only checked for
//! presence and never leaves the server.

use mcpay_sdk::objects::{PaymentMethod, PaymentUrl};
use url::Url;

use super::{PaymentUrlBuilder, URL_CURRENCY};
use crate::catalog::Package;
use crate::config::Secret;
use crate::error::CheckoutError;
use crate::order_id::OrderId;

const CHECKOUT_URL: &str = "https://stripe.com/pay";

#[derive(Debug, Clone, Copy)]
pub struct StripeGateway<'a> {
    secret_key: Option<&'a Secret>,
}

impl<'a> StripeGateway<'a> {
    pub fn new(secret_key: Option<&'a Secret>) -> Self {
        Self { secret_key }
    }
}

impl PaymentUrlBuilder for StripeGateway<'_> {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Stripe
    }

    fn build(
        &self,
        package: &Package,
        email: &str,
        username: &str,
        _order_id: &OrderId,
    ) -> Result<PaymentUrl, CheckoutError> {
        if self.secret_key.is_none() {
            return Ok(PaymentUrl::NotConfigured(PaymentMethod::Stripe));
        }

        let amount = package.price.to_string();
        let url = Url::parse_with_params(
            CHECKOUT_URL,
            [
                ("amount", amount.as_str()),
                ("currency", URL_CURRENCY),
                ("email", email),
                ("metadata[username]", username),
            ],
        )?;
        Ok(PaymentUrl::Redirect(url))
    }
}
