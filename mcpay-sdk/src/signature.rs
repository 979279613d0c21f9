//! Link signing required by payment providers.
//!
//! Only Freekassa signs its checkout links. The wire format is fixed by the
//! provider and must be reproduced bit-for-bit:
//!
//! ```text
//! s = hex(MD5("{shop_id}:{amount}:{secret}:{order_id}"))
//! ```
//!
//! The digest is rendered as lowercase hex.

use md5::{Digest, Md5};

/// Separator between the fields of the Freekassa signing string.
pub const FREEKASSA_SEPARATOR: char = ':';

/// Build the string that Freekassa expects to be hashed.
pub fn freekassa_sign_string(shop_id: &str, amount: u32, secret: &str, order_id: &str) -> String {
    let sep = FREEKASSA_SEPARATOR;
    format!("{shop_id}{sep}{amount}{sep}{secret}{sep}{order_id}")
}

/// Sign a Freekassa checkout link: `hex(MD5("{shop_id}:{amount}:{secret}:{order_id}"))`.
pub fn sign_freekassa(shop_id: &str, amount: u32, secret: &str, order_id: &str) -> String {
    let data = freekassa_sign_string(shop_id, amount, secret, order_id);
    hex::encode(Md5::digest(data.as_bytes()))
}
