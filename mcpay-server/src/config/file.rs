//! TOML file configuration structures.
//!
//! These structs directly map to the `mcpay-config.toml` file format. Every
//! section is optional; a missing file is the same as an empty one.

use mcpay_core::config::keys;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// `[providers.*]` sections. Environment variables take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub stripe: StripeConfig,
    #[serde(default)]
    pub freekassa: ShopConfig,
    #[serde(default)]
    pub yukassa: ShopConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StripeConfig {
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    pub shop_id: Option<String>,
    pub secret_key: Option<String>,
}

impl ProvidersConfig {
    /// Value of a credential by its environment variable name.
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            keys::STRIPE_SECRET_KEY => self.stripe.secret_key.clone(),
            keys::FREEKASSA_SHOP_ID => self.freekassa.shop_id.clone(),
            keys::FREEKASSA_SECRET_KEY => self.freekassa.secret_key.clone(),
            keys::YUKASSA_SHOP_ID => self.yukassa.shop_id.clone(),
            keys::YUKASSA_SECRET_KEY => self.yukassa.secret_key.clone(),
            _ => None,
        }
    }
}
