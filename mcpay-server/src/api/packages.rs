use axum::{Json, response::IntoResponse};
use mcpay_core::catalog::PACKAGES;
use mcpay_sdk::objects::PackageInfo;

/// `GET /packages`: list the catalog, cheapest first.
pub(super) async fn list_packages() -> impl IntoResponse {
    let packages: Vec<PackageInfo> = PACKAGES.iter().map(PackageInfo::from).collect();
    Json(packages)
}
