//! HMAC-SHA-256 (RFC 2104 / FIPS 198-1)
//!
//! Backed by the RustCrypto `hmac` and `sha2` crates. [`Hmac`] offers a
//! streaming interface and implements [`HmacSha256`], the primitive contract
//! consumed by HKDF.

use crate::error::{Error, Result};
use ::hmac::{Hmac as RcHmac, Mac};
use ecdhe_api::HmacSha256;
use ecdhe_params::utils::hash::HMAC_SHA256_OUTPUT_SIZE;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256Core = RcHmac<Sha256>;

/// Streaming HMAC-SHA-256
#[derive(Clone)]
pub struct Hmac {
    inner: HmacSha256Core,
}

impl Hmac {
    /// Create a new HMAC instance keyed with `key`
    ///
    /// Keys longer than the SHA-256 block are hashed first; any length,
    /// including zero, is accepted.
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = <HmacSha256Core as Mac>::new_from_slice(key)
            .map_err(|_| Error::Mac { context: "HMAC-SHA256 key" })?;
        Ok(Self { inner })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalise and return the tag
    pub fn finalize(self) -> [u8; HMAC_SHA256_OUTPUT_SIZE] {
        self.inner.finalize().into_bytes().into()
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Result<[u8; HMAC_SHA256_OUTPUT_SIZE]> {
        let mut h = Self::new(key)?;
        h.update(data);
        Ok(h.finalize())
    }

    /// Constant-time verification of `tag` against `key` / `data`
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, data)?;
        if tag.len() != HMAC_SHA256_OUTPUT_SIZE {
            return Ok(false);
        }
        Ok(expected.ct_eq(tag).into())
    }
}

impl core::fmt::Debug for Hmac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Hmac([REDACTED])")
    }
}

impl HmacSha256 for Hmac {
    fn hmac(key: &[u8], message: &[u8]) -> Result<[u8; HMAC_SHA256_OUTPUT_SIZE]> {
        Self::mac(key, message)
    }

    fn hmac_parts(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_OUTPUT_SIZE]> {
        let mut h = Self::new(key)?;
        for part in parts {
            h.update(part);
        }
        Ok(h.finalize())
    }
}
