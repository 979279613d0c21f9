//! The fixed catalog of donation packages.

use mcpay_sdk::objects::PackageInfo;

use crate::error::CheckoutError;

/// Every price in the catalog is in roubles.
pub const CURRENCY: &str = "RUB";

/// A purchasable tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Package {
    /// Lower-case lookup key.
    pub id: &'static str,
    pub name: &'static str,
    /// Whole roubles.
    pub price: u32,
}

/// Ordered from the cheapest to the most expensive tier.
pub static PACKAGES: [Package; 3] = [
    Package {
        id: "vip",
        name: "VIP",
        price: 299,
    },
    Package {
        id: "premium",
        name: "PREMIUM",
        price: 599,
    },
    Package {
        id: "elite",
        name: "ELITE",
        price: 999,
    },
];

/// Look up a package by id, ignoring case.
pub fn resolve(package_id: &str) -> Result<&'static Package, CheckoutError> {
    let key = package_id.to_lowercase();
    PACKAGES
        .iter()
        .find(|package| package.id == key)
        .ok_or_else(|| CheckoutError::UnknownPackage(package_id.to_owned()))
}

impl From<&Package> for PackageInfo {
    fn from(package: &Package) -> Self {
        PackageInfo {
            id: package.id.to_owned(),
            name: package.name.to_owned(),
            price: package.price,
            currency: CURRENCY.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_packages() {
        assert_eq!(resolve("vip").map(|p| p.price), Ok(299));
        assert_eq!(resolve("premium").map(|p| p.name), Ok("PREMIUM"));
        assert_eq!(resolve("elite").map(|p| p.price), Ok(999));
    }

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(resolve("VIP"), resolve("vip"));
        assert_eq!(resolve("Elite").map(|p| p.id), Ok("elite"));
    }

    #[test]
    fn test_resolve_unknown_package() {
        let err = resolve("nonexistent");
        assert!(matches!(err, Err(CheckoutError::UnknownPackage(ref id)) if id == "nonexistent"));
        assert!(resolve("").is_err());
        // lookup is by key, not by prefix
        assert!(resolve("vi").is_err());
    }

    #[test]
    fn test_prices_strictly_increase() {
        assert!(PACKAGES.windows(2).all(|w| w[0].price < w[1].price));
    }
}
