//! Checkout orchestration.
//!
//! A checkout runs strictly in sequence:
//!
//! ```text
//! AwaitingRequest → Validated → PackageResolved → UrlBuilt → Responded
//! ```
//!
//! and can fail from any stage. Nothing here blocks or performs I/O.

use mcpay_sdk::objects::{CheckoutResponse, PaymentUrl};
use std::fmt;

use crate::catalog;
use crate::config::ProvidersConfig;
use crate::error::CheckoutError;
use crate::order_id::OrderId;
use crate::providers::{Gateway, PaymentUrlBuilder};
use crate::validation::CheckoutRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingRequest,
    Validated,
    PackageResolved,
    UrlBuilt,
    Responded,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingRequest => "awaiting_request",
            Stage::Validated => "validated",
            Stage::PackageResolved => "package_resolved",
            Stage::UrlBuilt => "url_built",
            Stage::Responded => "responded",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResult {
    pub payment_url: PaymentUrl,
    pub order_id: OrderId,
    pub package_name: &'static str,
    pub amount: u32,
}

impl From<CheckoutResult> for CheckoutResponse {
    fn from(result: CheckoutResult) -> Self {
        CheckoutResponse {
            payment_url: result.payment_url,
            order_id: result.order_id.into_string(),
            package: result.package_name.to_owned(),
            amount: result.amount,
        }
    }
}

/// Turns a raw checkout body into a provider redirect.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutHandler<'a> {
    providers: &'a ProvidersConfig,
}

impl<'a> CheckoutHandler<'a> {
    pub fn new(providers: &'a ProvidersConfig) -> Self {
        Self { providers }
    }

    /// Run a checkout for a raw JSON body.
    ///
    /// `request_id` is the invocation-scoped id the order id is derived from.
    pub fn process(&self, body: &str, request_id: &str) -> Result<CheckoutResult, CheckoutError> {
        let mut stage = Stage::AwaitingRequest;
        let result = self.run(body, request_id, &mut stage);
        match &result {
            Ok(result) => {
                tracing::info!(
                    order_id = %result.order_id,
                    package = result.package_name,
                    configured = result.payment_url.is_configured(),
                    "Checkout completed"
                );
            }
            Err(e) if e.is_client_error() => {
                tracing::warn!(stage = %stage, error = %e, "Checkout rejected");
            }
            Err(e) => {
                tracing::error!(stage = %stage, error = %e, "Checkout failed");
            }
        }
        result
    }

    fn run(
        &self,
        body: &str,
        request_id: &str,
        stage: &mut Stage,
    ) -> Result<CheckoutResult, CheckoutError> {
        let request = CheckoutRequest::from_json(body)?;
        advance(stage, Stage::Validated);

        let package = catalog::resolve(request.package_id())?;
        advance(stage, Stage::PackageResolved);

        let order_id = OrderId::derive(request_id, request.package_id());
        let gateway = Gateway::select(request.payment_method(), self.providers);
        let payment_url =
            gateway.build(package, request.email(), request.username(), &order_id)?;
        advance(stage, Stage::UrlBuilt);

        if !payment_url.is_configured() {
            tracing::warn!(method = %gateway.method(), "Payment provider is not configured");
        }

        let result = CheckoutResult {
            payment_url,
            order_id,
            package_name: package.name,
            amount: package.price,
        };
        advance(stage, Stage::Responded);
        Ok(result)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!(from = %stage, to = %next, "Checkout stage");
    *stage = next;
}
