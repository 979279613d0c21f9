//! Payment provider URL builders.
//!
//! Each provider turns a resolved package and buyer details into the URL of
//! its hosted checkout. A provider without credentials yields a
//! [`PaymentUrl::NotConfigured`] placeholder instead of failing, so the
//! caller can report it as temporarily unavailable.
//!
//! No request is ever sent to a provider; only the redirect URL is built.

mod freekassa;
mod stripe;
mod yukassa;

pub use freekassa::FreekassaGateway;
pub use stripe::StripeGateway;
pub use yukassa::YukassaGateway;

use mcpay_sdk::objects::{PaymentMethod, PaymentUrl};

use crate::catalog::Package;
use crate::config::ProvidersConfig;
use crate::error::CheckoutError;
use crate::order_id::OrderId;

/// Currency code embedded in provider URLs that carry one.
pub const URL_CURRENCY: &str = "rub";

/// Builds the redirect URL for one provider.
pub trait PaymentUrlBuilder {
    fn method(&self) -> PaymentMethod;

    fn build(
        &self,
        package: &Package,
        email: &str,
        username: &str,
        order_id: &OrderId,
    ) -> Result<PaymentUrl, CheckoutError>;
}

/// The closed set of supported providers, borrowing their credentials.
#[derive(Debug, Clone, Copy)]
pub enum Gateway<'a> {
    Stripe(StripeGateway<'a>),
    Freekassa(FreekassaGateway<'a>),
    Yukassa(YukassaGateway<'a>),
}

impl<'a> Gateway<'a> {
    pub fn select(method: PaymentMethod, config: &'a ProvidersConfig) -> Self {
        match method {
            PaymentMethod::Stripe => Gateway::Stripe(StripeGateway::new(config.stripe.as_ref())),
            PaymentMethod::Freekassa => {
                Gateway::Freekassa(FreekassaGateway::new(config.freekassa.as_ref()))
            }
            PaymentMethod::Yukassa => {
                Gateway::Yukassa(YukassaGateway::new(config.yukassa.as_ref()))
            }
        }
    }

    fn builder(&self) -> &dyn PaymentUrlBuilder {
        match self {
            Gateway::Stripe(g) => g,
            Gateway::Freekassa(g) => g,
            Gateway::Yukassa(g) => g,
        }
    }
}

impl PaymentUrlBuilder for Gateway<'_> {
    fn method(&self) -> PaymentMethod {
        self.builder().method()
    }

    fn build(
        &self,
        package: &Package,
        email: &str,
        username: &str,
        order_id: &OrderId,
    ) -> Result<PaymentUrl, CheckoutError> {
        self.builder().build(package, email, username, order_id)
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::PACKAGES;
    use crate::config::{Secret, ShopCredentials};

    fn configured() -> ProvidersConfig {
        ProvidersConfig {
            stripe: Some(Secret::new("sk_test")),
            freekassa: Some(ShopCredentials {
                shop_id: "100".into(),
                secret_key: Secret::new("s3cret"),
            }),
            yukassa: Some(ShopCredentials {
                shop_id: "200".into(),
                secret_key: Secret::new("y-secret"),
            }),
        }
    }

    #[test]
    fn test_select_matches_method() {
        let config = configured();
        for method in PaymentMethod::ALL {
            assert_eq!(Gateway::select(method, &config).method(), method);
        }
    }

    #[test]
    fn test_unconfigured_placeholders_are_distinct() {
        let config = ProvidersConfig::default();
        let order_id = OrderId::derive("abcdef1234567890", "vip");
        let urls: Vec<PaymentUrl> = PaymentMethod::ALL
            .into_iter()
            .map(|m| {
                Gateway::select(m, &config)
                    .build(&PACKAGES[0], "a@example.com", "Steve", &order_id)
                    .unwrap()
            })
            .collect();
        for (method, url) in PaymentMethod::ALL.into_iter().zip(&urls) {
            assert_eq!(url, &PaymentUrl::NotConfigured(method));
        }
        assert_ne!(urls[0].to_string(), urls[1].to_string());
        assert_ne!(urls[1].to_string(), urls[2].to_string());
    }

    #[test]
    fn test_configured_gateways_redirect() {
        let config = configured();
        let order_id = OrderId::derive("abcdef1234567890", "elite");
        for method in PaymentMethod::ALL {
            let url = Gateway::select(method, &config)
                .build(&PACKAGES[2], "a@example.com", "Steve", &order_id)
                .unwrap();
            assert!(url.is_configured(), "{method} should redirect");
        }
    }
}
