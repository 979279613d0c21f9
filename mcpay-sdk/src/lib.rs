//! Shared types for the mcpay donation checkout.
//!
//! Holds the wire objects exchanged with the checkout endpoint, the signing
//! primitives required by payment providers, and (behind the `client`
//! feature) a typed HTTP client.

pub mod objects;
pub mod signature;

#[cfg(feature = "client")]
pub mod client;
