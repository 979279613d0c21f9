//! Deterministic order identifiers.

use serde::Serialize;
use std::fmt;

/// Number of leading request-id characters kept in an order id.
pub const REQUEST_ID_PREFIX_LEN: usize = 8;

/// `<first 8 characters of the request id>-<package id>`.
///
/// A request id shorter than [`REQUEST_ID_PREFIX_LEN`] is used whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn derive(request_id: &str, package_id: &str) -> Self {
        let prefix = match request_id.char_indices().nth(REQUEST_ID_PREFIX_LEN) {
            Some((end, _)) => &request_id[..end],
            None => request_id,
        };
        OrderId(format!("{prefix}-{package_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_request_id() {
        assert_eq!(
            OrderId::derive("abcdef1234567890", "vip").as_str(),
            "abcdef12-vip"
        );
    }

    #[test]
    fn test_is_deterministic() {
        let a = OrderId::derive("abcdef1234567890", "premium");
        let b = OrderId::derive("abcdef1234567890", "premium");
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_request_id_used_whole() {
        assert_eq!(OrderId::derive("abc", "elite").as_str(), "abc-elite");
        assert_eq!(OrderId::derive("abcdefgh", "vip").as_str(), "abcdefgh-vip");
        assert_eq!(OrderId::derive("", "vip").as_str(), "-vip");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(
            OrderId::derive("заказ-номер-1", "vip").as_str(),
            "заказ-но-vip"
        );
    }

    #[test]
    fn test_keeps_package_id_as_given() {
        assert_eq!(OrderId::derive("12345678", "VIP").as_str(), "12345678-VIP");
    }
}
