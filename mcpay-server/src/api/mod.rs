//! Checkout API handlers.
//!
//! # Endpoints
//!
//! - `ANY /payment`  – checkout invocation (`POST`), pre-flight (`OPTIONS`),
//!   anything else is rejected with 405
//! - `GET /packages` – list purchasable packages

use axum::{
    Router,
    routing::{any, get},
};

use crate::state::AppState;

mod packages;
mod payment;

/// Build the checkout API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payment", any(payment::payment))
        .route("/packages", get(packages::list_packages))
}
