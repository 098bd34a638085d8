//! Trait for the HMAC-SHA-256 primitive consumed by HKDF
//!
//! HKDF only needs the input/output contract `hmac(key, message) -> [u8; 32]`.
//! Implementations may be backed by any correct HMAC-SHA-256.

use crate::Result;
use ecdhe_params::utils::hash::HMAC_SHA256_OUTPUT_SIZE;

/// An HMAC-SHA-256 implementation (RFC 2104 over FIPS 180-4 SHA-256)
pub trait HmacSha256 {
    /// Returns the algorithm name
    fn name() -> &'static str {
        "HMAC-SHA256"
    }

    /// Compute the 32-byte tag of `message` under `key`
    ///
    /// Keys of any length are accepted, including the empty key.
    fn hmac(key: &[u8], message: &[u8]) -> Result<[u8; HMAC_SHA256_OUTPUT_SIZE]>;

    /// Compute the tag of the concatenation of `parts`
    ///
    /// The default joins the parts and calls [`HmacSha256::hmac`];
    /// streaming implementations should override it.
    fn hmac_parts(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_OUTPUT_SIZE]> {
        let message = parts.concat();
        Self::hmac(key, &message)
    }
}
