//! Checkout API client (donation page → mcpay server).

use reqwest::{Client, StatusCode};
use url::Url;

use super::ClientError;
use crate::objects::{
    CheckoutRequestBody, CheckoutResponse, ErrorResponse, PackageInfo, PaymentMethod, PaymentUrl,
};

/// What the donation page should do after a checkout request succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Send the buyer to the provider.
    Redirect {
        url: Url,
        order_id: String,
        package: String,
        amount: u32,
    },
    /// The selected provider has no credentials yet; ask the buyer to pick
    /// another method or come back later.
    Unavailable { method: PaymentMethod },
}

impl From<CheckoutResponse> for CheckoutOutcome {
    fn from(response: CheckoutResponse) -> Self {
        match response.payment_url {
            PaymentUrl::Redirect(url) => CheckoutOutcome::Redirect {
                url,
                order_id: response.order_id,
                package: response.package,
                amount: response.amount,
            },
            PaymentUrl::NotConfigured(method) => CheckoutOutcome::Unavailable { method },
        }
    }
}

/// Typed HTTP client for the mcpay checkout endpoint.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: Client,
    base_url: Url,
}

impl CheckoutClient {
    /// Create a new `CheckoutClient`.
    ///
    /// * `base_url` – root URL of the mcpay server (e.g. `https://donate.example.com`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /api/v1/payment` – start a checkout.
    pub async fn create_payment(
        &self,
        body: &CheckoutRequestBody,
    ) -> Result<CheckoutOutcome, ClientError> {
        let url = self.base_url.join("/api/v1/payment")?;
        let resp = self.http.post(url).json(body).send().await?;
        let response: CheckoutResponse = parse_response(resp).await?;
        Ok(response.into())
    }

    /// `GET /api/v1/packages` – list purchasable packages.
    pub async fn list_packages(&self) -> Result<Vec<PackageInfo>, ClientError> {
        let url = self.base_url.join("/api/v1/packages")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    decode_body(status, &bytes)
}

/// Decode a response body, turning non-2xx statuses into [`ClientError::Api`].
///
/// The error message is taken from an [`ErrorResponse`] body, or the raw
/// text when the body is not one.
fn decode_body<T: serde::de::DeserializeOwned>(
    status: StatusCode,
    bytes: &[u8],
) -> Result<T, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(bytes)
            .map(|e| e.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
        return Err(ClientError::Api { status, message });
    }
    serde_json::from_slice(bytes).map_err(ClientError::Json)
}
