//! YooKassa (SBP, cards, wallets).
//!
//! The link is not signed; the secret key is required but only checked for
//! presence.

use mcpay_sdk::objects::{PaymentMethod, PaymentUrl};
use url::Url;

use super::PaymentUrlBuilder;
use crate::catalog::Package;
use crate::config::ShopCredentials;
use crate::error::CheckoutError;
use crate::order_id::OrderId;

const CHECKOUT_URL: &str = "https://yookassa.ru/checkout/payments";

#[derive(Debug, Clone, Copy)]
pub struct YukassaGateway<'a> {
    credentials: Option<&'a ShopCredentials>,
}

impl<'a> YukassaGateway<'a> {
    pub fn new(credentials: Option<&'a ShopCredentials>) -> Self {
        Self { credentials }
    }
}

impl PaymentUrlBuilder for YukassaGateway<'_> {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Yukassa
    }

    fn build(
        &self,
        package: &Package,
        email: &str,
        _username: &str,
        order_id: &OrderId,
    ) -> Result<PaymentUrl, CheckoutError> {
        let Some(credentials) = self.credentials else {
            return Ok(PaymentUrl::NotConfigured(PaymentMethod::Yukassa));
        };

        let sum = package.price.to_string();
        let url = Url::parse_with_params(
            CHECKOUT_URL,
            [
                ("shopId", credentials.shop_id.as_str()),
                ("sum", sum.as_str()),
                ("customerContact", email),
                ("orderId", order_id.as_str()),
            ],
        )?;
        Ok(PaymentUrl::Redirect(url))
    }
}
