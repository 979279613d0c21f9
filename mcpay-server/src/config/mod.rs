//! Configuration module for mcpay-server.
//!
//! Handles loading configuration from an optional TOML file, CLI arguments,
//! and environment variables. Provider credentials set in the environment
//! override the ones in the file.

pub mod file;

use crate::config::file::FileConfig;
use mcpay_core::config::{ProvidersConfig, keys};
use mcpay_sdk::objects::PaymentMethod;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub listen: SocketAddr,
    pub providers: ProvidersConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load the configuration, reading credentials from the process
    /// environment.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        self.load_with_env(|name| std::env::var(name).ok())
    }

    /// Load the configuration with an explicit environment lookup.
    ///
    /// This will:
    /// 1. Read the TOML file, if it exists
    /// 2. Apply CLI overrides
    /// 3. Overlay provider credentials from the environment
    pub fn load_with_env(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        let file_config = self.read_file()?;

        let listen = self.listen_override.unwrap_or(file_config.server.listen);
        let providers = ProvidersConfig::from_lookup(|name| {
            env(name)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file_config.providers.get(name))
        });

        log_provider_status(&providers);

        Ok(LoadedConfig { listen, providers })
    }

    fn read_file(&self) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(&self.config_path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.config_path.display(),
                    "Config file not found, using defaults and environment"
                );
                Ok(FileConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn log_provider_status(providers: &ProvidersConfig) {
    for method in PaymentMethod::ALL {
        let configured = match method {
            PaymentMethod::Stripe => providers.stripe.is_some(),
            PaymentMethod::Freekassa => providers.freekassa.is_some(),
            PaymentMethod::Yukassa => providers.yukassa.is_some(),
        };
        if configured {
            tracing::info!(provider = %method, "Payment provider configured");
        } else {
            tracing::warn!(
                provider = %method,
                "Payment provider not configured, checkouts will return a placeholder"
            );
        }
    }
    tracing::debug!(names = ?keys::ALL, "Provider credentials are read from these variables");
}
