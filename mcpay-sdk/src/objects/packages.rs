use serde::{Deserialize, Serialize};

/// A purchasable package as listed by `GET /api/v1/packages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub id: String,
    pub name: String,
    pub price: u32,
    /// ISO 4217 code, always `RUB`.
    pub currency: String,
}
