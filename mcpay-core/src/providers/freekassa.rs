//! Freekassa.
//!
//! The only provider whose link is signed. See
//! [`mcpay_sdk::signature::sign_freekassa`] for the signing string.

use mcpay_sdk::objects::{PaymentMethod, PaymentUrl};
use mcpay_sdk::signature::sign_freekassa;
use url::Url;

use super::PaymentUrlBuilder;
use crate::catalog::Package;
use crate::config::ShopCredentials;
use crate::error::CheckoutError;
use crate::order_id::OrderId;

const CHECKOUT_URL: &str = "https://pay.freekassa.com/";

#[derive(Debug, Clone, Copy)]
pub struct FreekassaGateway<'a> {
    credentials: Option<&'a ShopCredentials>,
}

impl<'a> FreekassaGateway<'a> {
    pub fn new(credentials: Option<&'a ShopCredentials>) -> Self {
        Self { credentials }
    }
}

impl PaymentUrlBuilder for FreekassaGateway<'_> {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Freekassa
    }

    fn build(
        &self,
        package: &Package,
        email: &str,
        username: &str,
        order_id: &OrderId,
    ) -> Result<PaymentUrl, CheckoutError> {
        let Some(credentials) = self.credentials else {
            return Ok(PaymentUrl::NotConfigured(PaymentMethod::Freekassa));
        };

        let signature = sign_freekassa(
            &credentials.shop_id,
            package.price,
            credentials.secret_key.expose(),
            order_id.as_str(),
        );
        let amount = package.price.to_string();
        let url = Url::parse_with_params(
            CHECKOUT_URL,
            [
                ("m", credentials.shop_id.as_str()),
                ("oa", amount.as_str()),
                ("o", order_id.as_str()),
                ("s", signature.as_str()),
                ("em", email),
                ("us", username),
            ],
        )?;
        Ok(PaymentUrl::Redirect(url))
    }
}
