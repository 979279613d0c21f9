//! Provider credential configuration.
//!
//! These types represent the validated runtime configuration. Loading from
//! files and the environment is handled by the server crate; here the
//! credentials are resolved from a plain name → value lookup so they can be
//! built deterministically in tests.

use std::fmt;

/// Fixed names under which provider credentials are looked up.
pub mod keys {
    pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
    pub const FREEKASSA_SHOP_ID: &str = "FREEKASSA_SHOP_ID";
    pub const FREEKASSA_SECRET_KEY: &str = "FREEKASSA_SECRET_KEY";
    pub const YUKASSA_SHOP_ID: &str = "YUKASSA_SHOP_ID";
    pub const YUKASSA_SECRET_KEY: &str = "YUKASSA_SECRET_KEY";

    pub const ALL: [&str; 5] = [
        STRIPE_SECRET_KEY,
        FREEKASSA_SHOP_ID,
        FREEKASSA_SECRET_KEY,
        YUKASSA_SHOP_ID,
        YUKASSA_SECRET_KEY,
    ];
}

/// A credential value that is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Box<str>);

impl Secret {
    pub fn new(value: impl Into<Box<str>>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Shop identifier plus shared secret, as issued by a regional gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopCredentials {
    pub shop_id: String,
    pub secret_key: Secret,
}

impl ShopCredentials {
    /// Both parts must be present and non-empty.
    pub fn from_parts(shop_id: Option<String>, secret_key: Option<String>) -> Option<Self> {
        Some(Self {
            shop_id: non_empty(shop_id)?,
            secret_key: Secret::new(non_empty(secret_key)?),
        })
    }
}

/// Credentials of every payment provider. `None` means not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidersConfig {
    pub stripe: Option<Secret>,
    pub freekassa: Option<ShopCredentials>,
    pub yukassa: Option<ShopCredentials>,
}

impl ProvidersConfig {
    /// Resolve credentials from a lookup keyed by the names in [`keys`].
    ///
    /// Empty values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            stripe: non_empty(lookup(keys::STRIPE_SECRET_KEY)).map(Secret::new),
            freekassa: ShopCredentials::from_parts(
                lookup(keys::FREEKASSA_SHOP_ID),
                lookup(keys::FREEKASSA_SECRET_KEY),
            ),
            yukassa: ShopCredentials::from_parts(
                lookup(keys::YUKASSA_SHOP_ID),
                lookup(keys::YUKASSA_SECRET_KEY),
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_nothing_configured() {
        let config = ProvidersConfig::from_lookup(|_| None);
        assert_eq!(config, ProvidersConfig::default());
    }

    #[test]
    fn test_all_configured() {
        let config = ProvidersConfig::from_lookup(lookup_from(&[
            (keys::STRIPE_SECRET_KEY, "sk_test"),
            (keys::FREEKASSA_SHOP_ID, "100"),
            (keys::FREEKASSA_SECRET_KEY, "s3cret"),
            (keys::YUKASSA_SHOP_ID, "200"),
            (keys::YUKASSA_SECRET_KEY, "y-secret"),
        ]));
        assert_eq!(config.stripe.as_ref().map(Secret::expose), Some("sk_test"));
        let freekassa = config.freekassa.as_ref().map(|c| (c.shop_id.as_str(), c.secret_key.expose()));
        assert_eq!(freekassa, Some(("100", "s3cret")));
        assert_eq!(config.yukassa.as_ref().map(|c| c.shop_id.as_str()), Some("200"));
    }

    #[test]
    fn test_partial_shop_credentials_are_absent() {
        let config = ProvidersConfig::from_lookup(lookup_from(&[
            (keys::FREEKASSA_SHOP_ID, "100"),
            (keys::YUKASSA_SECRET_KEY, "y-secret"),
        ]));
        assert!(config.freekassa.is_none());
        assert!(config.yukassa.is_none());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let config = ProvidersConfig::from_lookup(lookup_from(&[
            (keys::STRIPE_SECRET_KEY, ""),
            (keys::FREEKASSA_SHOP_ID, "100"),
            (keys::FREEKASSA_SECRET_KEY, "  "),
        ]));
        assert!(config.stripe.is_none());
        assert!(config.freekassa.is_none());
    }

    #[test]
    fn test_secret_is_redacted() {
        let config = ProvidersConfig::from_lookup(lookup_from(&[(keys::STRIPE_SECRET_KEY, "sk_live_123")]));
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk_live_123"));
        assert!(debug.contains("Secret(***)"));
    }
}
